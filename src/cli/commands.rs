//! Command implementations

use super::Args;
use crate::config::{self, parser::create_default_config, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::Analyzer;
use crate::error::{ErrorSeverity, IntrospectorError, Result};
use crate::logging;
use crate::output::{
    create_progress_callback, write_report, OutputWriter, ProgressReporter, StdoutWriter,
    SummaryFormatter,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Printed to stdout when the positional argument count is wrong
pub const USAGE: &str = "Usage: introspector <path-to-java-project>";

/// Exit code of a usage error
pub const USAGE_EXIT_CODE: i32 = 2;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Analyze the project at the single positional path
    Analyze(Args),
    /// Write a default configuration file
    Init(PathBuf),
    /// Wrong number of positional arguments
    Usage,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            let path = args
                .config
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            return Command::Init(path);
        }

        if args.paths.len() != 1 {
            return Command::Usage;
        }

        Command::Analyze(args)
    }

    /// Execute the command
    ///
    /// `Usage` prints the usage line and succeeds; the caller decides the
    /// exit code.
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Analyze(args) => analyze(args),
            Command::Init(path) => init(path),
            Command::Usage => StdoutWriter.write(&format!("{}\n", USAGE)),
        }
    }
}

/// Exit code for a failed run
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 3,
    }
}

/// Hint printed under the error message, if any
pub fn suggestion(err: &IntrospectorError) -> Option<&'static str> {
    match err {
        IntrospectorError::InvalidPath { .. } => {
            Some("Check that the project path exists and is accessible")
        }
        IntrospectorError::ConfigNotFound { .. } => Some(
            "Create one with `introspector --init` or drop the --config option",
        ),
        IntrospectorError::ConfigParse { .. } => {
            Some("Compare the file with the one written by `introspector --init`")
        }
        IntrospectorError::GlobPattern { .. } => {
            Some("Check the --exclude-type values for unbalanced brackets")
        }
        IntrospectorError::OutputDirectoryNotFound { .. } => {
            Some("Create the output directory first or specify a different path")
        }
        IntrospectorError::PermissionDenied { .. } => {
            Some("Check the permissions of the project tree and the output directory")
        }
        _ => None,
    }
}

fn analyze(args: &Args) -> Result<()> {
    let settings = config::load_config(CliArgs::from(args))?;
    logging::apply_settings(settings.quiet, settings.verbose)?;

    tracing::info!(
        "analyzing {} (schema: {}, parallel: {}, threads: {})",
        settings.scan_path.display(),
        settings.schema,
        settings.parallel,
        settings.threads
    );

    let analyzer = Analyzer::new(settings)?;
    let settings = analyzer.settings();

    let progress_reporter = Arc::new(ProgressReporter::new(
        settings.show_progress && !settings.quiet,
    ));
    progress_reporter.start(0, "Parsing");

    let outcome =
        analyzer.analyze_with_progress(create_progress_callback(progress_reporter.clone()));
    progress_reporter.finish();
    let outcome = outcome?;

    tracing::info!("writing report to {}", settings.output_file.display());
    write_report(&outcome.report, settings.schema, &settings.output_file)?;

    let summary = SummaryFormatter::new(settings.use_colors, settings.verbose, settings.quiet)
        .format(&outcome.summary, &settings.output_file);
    StdoutWriter.write(&summary)
}

fn init(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Configuration file already exists at: {}", path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    create_default_config(path)?;

    println!("Created default configuration file at: {}", path.display());
    println!("Edit it to change the source suffix, excluded types, report schema or output file.");
    Ok(())
}
