//! Configuration management
//!
//! Settings are layered: defaults, then a config file, then `INTROSPECTOR_*`
//! environment variables, then command-line flags.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use file::{FileConfig, EnvConfig};
pub use cli::{CliConfig, CliArgs};
pub use settings::SettingsValidator;
pub use parser::{
    create_default_config, find_default_config, parse_config_content, parse_config_file,
    DEFAULT_CONFIG_FILE,
};

/// Prefix of the environment variables read by [`EnvConfig`]
pub const ENV_PREFIX: &str = "INTROSPECTOR";

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;

    /// Precedence of this source; higher numbers are merged later and win
    fn priority(&self) -> u8;
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource + ?Sized>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            tracing::debug!("Loading settings from {}", source.name());
            Ok(self.merge(source.load()?))
        } else {
            Ok(self)
        }
    }

    /// Load every source, lowest priority first
    pub fn load_sources(mut self, mut sources: Vec<Box<dyn ConfigSource>>) -> Result<Self> {
        sources.sort_by_key(|source| source.priority());
        for source in &sources {
            self = self.load_from(source.as_ref())?;
        }
        Ok(self)
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();

        SettingsValidator::validate(&settings)?;

        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from every source with proper precedence handling
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    load_config_with_env_prefix(cli_args, ENV_PREFIX)
}

/// Load configuration with a custom environment variable prefix
pub fn load_config_with_env_prefix(cli_args: CliArgs, env_prefix: &str) -> Result<Settings> {
    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::with_path(path)),
        None => FileConfig::discover(),
    };

    let mut sources: Vec<Box<dyn ConfigSource>> = vec![
        Box::new(CliConfig::new(cli_args)),
        Box::new(EnvConfig::new(env_prefix)),
    ];
    if let Some(file_config) = file_config {
        sources.push(Box::new(file_config));
    }

    ConfigBuilder::new().load_sources(sources)?.build()
}
