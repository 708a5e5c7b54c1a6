//! Command-line argument configuration source

use std::path::PathBuf;

use crate::cli::args::{Args, SchemaArg};
use crate::error::Result;
use crate::models::config::{PartialSettings, ReportSchema};
use super::ConfigSource;

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
}

/// Command-line arguments relevant to settings
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub exclude_types: Option<Vec<String>>,
    pub schema: Option<ReportSchema>,
    pub dedup_uses: bool,
    pub output_file: Option<PathBuf>,
    pub suffix: Option<String>,
    pub follow_links: bool,
    pub no_parallel: bool,
    pub threads: Option<usize>,
    pub no_progress: bool,
    pub no_colors: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
        }
    }
}

impl From<&Args> for CliArgs {
    /// Only the first positional is used; the argument count is checked
    /// before this is called.
    fn from(args: &Args) -> Self {
        Self {
            path: args.paths.first().cloned(),
            exclude_types: if args.exclude_type.is_empty() {
                None
            } else {
                Some(args.exclude_type.clone())
            },
            schema: args.schema.map(|schema| match schema {
                SchemaArg::Full => ReportSchema::Full,
                SchemaArg::Minimal => ReportSchema::Minimal,
            }),
            dedup_uses: args.dedup_uses,
            output_file: args.output_file.clone(),
            suffix: args.suffix.clone(),
            follow_links: args.follow_links,
            no_parallel: args.no_parallel,
            threads: args.threads,
            no_progress: args.no_progress,
            no_colors: args.no_colors,
            quiet: args.quiet,
            verbose: args.verbose,
            config: args.config.clone(),
        }
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = &self.args.path {
            settings.scan_path = Some(path.clone());
        }

        if let Some(names) = &self.args.exclude_types {
            settings.exclude_types = Some(names.clone());
        }

        if let Some(schema) = self.args.schema {
            settings.schema = Some(schema);
        }

        if let Some(output_file) = &self.args.output_file {
            settings.output_file = Some(output_file.clone());
        }

        if let Some(suffix) = &self.args.suffix {
            settings.source_suffix = Some(suffix.clone());
        }

        if let Some(threads) = self.args.threads {
            settings.threads = Some(threads);
        }

        // Boolean flags only ever switch a default off or on
        if self.args.dedup_uses {
            settings.dedup_uses = Some(true);
        }

        if self.args.follow_links {
            settings.follow_links = Some(true);
        }

        if self.args.no_parallel {
            settings.parallel = Some(false);
        }

        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        // CLI args are always available
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        30
    }
}
