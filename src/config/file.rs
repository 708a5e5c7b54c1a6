//! File and environment configuration sources

use std::path::{Path, PathBuf};

use crate::error::{IntrospectorError, Result};
use crate::models::config::PartialSettings;
use super::{ConfigSource, parser};

/// Configuration file source
///
/// A file named on the command line must exist; one found in a default
/// location is used only when present.
pub struct FileConfig {
    path: PathBuf,
    name: String,
    required: bool,
}

impl FileConfig {
    /// Source for an explicitly requested file
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            required: true,
        }
    }

    /// Source for the first file found in the default locations
    pub fn discover() -> Option<Self> {
        parser::find_default_config().map(|path| Self {
            name: format!("default config file ({})", path.display()),
            path,
            required: false,
        })
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.path.is_file() {
            return Err(IntrospectorError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.required || self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        20
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(suffix) = self.var("SUFFIX") {
            settings.source_suffix = Some(suffix);
        }

        if let Some(names) = self.var("EXCLUDE_TYPES") {
            settings.exclude_types = Some(
                names
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            );
        }

        if let Some(schema) = self.var("SCHEMA") {
            let schema = schema
                .parse()
                .map_err(IntrospectorError::config_error)?;
            settings.schema = Some(schema);
        }

        if let Some(output_file) = self.var("OUTPUT_FILE") {
            settings.output_file = Some(PathBuf::from(output_file));
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ["SUFFIX", "EXCLUDE_TYPES", "SCHEMA", "OUTPUT_FILE"]
            .iter()
            .any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        10
    }
}
