//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default name of the report written into the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "project_analysis.json";

/// Default suffix of the files handed to the parser
pub const DEFAULT_SOURCE_SUFFIX: &str = ".java";

/// Main configuration settings for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Root of the project to analyze
    pub scan_path: PathBuf,

    /// File-name suffix of the source files to parse
    pub source_suffix: String,

    /// Type names (or glob patterns) left out of the report
    pub exclude_types: Vec<String>,

    /// Shape of the JSON document
    pub schema: ReportSchema,

    /// Collapse repeated `uses` edges per (source, target)
    pub dedup_uses: bool,

    /// Report destination
    pub output_file: PathBuf,

    /// Whether to follow symbolic links to directories during traversal
    pub follow_links: bool,

    /// Whether to parse files on a thread pool
    pub parallel: bool,

    /// Worker threads used when `parallel` is set
    pub threads: usize,

    /// Whether to show a progress bar while parsing
    pub show_progress: bool,

    /// Whether to use colors in the terminal summary
    pub use_colors: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::from("."),
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            exclude_types: vec!["MavenWrapperDownloader".to_string()],
            schema: ReportSchema::Full,
            dedup_uses: false,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            follow_links: false,
            parallel: true,
            threads: num_cpus::get(),
            show_progress: true,
            use_colors: true,
            quiet: false,
            verbose: false,
        }
    }
}

/// Supported report shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSchema {
    /// Declarations with package, kind, modifiers and metrics, plus relations
    Full,
    /// Names, fields and method signatures only
    Minimal,
}

impl std::str::FromStr for ReportSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(ReportSchema::Full),
            "minimal" => Ok(ReportSchema::Minimal),
            _ => Err(format!("Invalid report schema: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportSchema::Full => write!(f, "full"),
            ReportSchema::Minimal => write!(f, "minimal"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub scan_path: Option<PathBuf>,
    pub source_suffix: Option<String>,
    pub exclude_types: Option<Vec<String>>,
    pub schema: Option<ReportSchema>,
    pub dedup_uses: Option<bool>,
    pub output_file: Option<PathBuf>,
    pub follow_links: Option<bool>,
    pub parallel: Option<bool>,
    pub threads: Option<usize>,
    pub show_progress: Option<bool>,
    pub use_colors: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.scan_path.is_some() {
            self.scan_path = other.scan_path;
        }
        if other.source_suffix.is_some() {
            self.source_suffix = other.source_suffix;
        }
        if other.exclude_types.is_some() {
            self.exclude_types = other.exclude_types;
        }
        if other.schema.is_some() {
            self.schema = other.schema;
        }
        if other.dedup_uses.is_some() {
            self.dedup_uses = other.dedup_uses;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.parallel.is_some() {
            self.parallel = other.parallel;
        }
        if other.threads.is_some() {
            self.threads = other.threads;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(scan_path) = &self.scan_path {
            settings.scan_path = scan_path.clone();
        }
        if let Some(source_suffix) = &self.source_suffix {
            settings.source_suffix = source_suffix.clone();
        }
        if let Some(exclude_types) = &self.exclude_types {
            settings.exclude_types = exclude_types.clone();
        }
        if let Some(schema) = self.schema {
            settings.schema = schema;
        }
        if let Some(dedup_uses) = self.dedup_uses {
            settings.dedup_uses = dedup_uses;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = output_file.clone();
        }
        if let Some(follow_links) = self.follow_links {
            settings.follow_links = follow_links;
        }
        if let Some(parallel) = self.parallel {
            settings.parallel = parallel;
        }
        if let Some(threads) = self.threads {
            settings.threads = threads;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }

        settings
    }
}
