//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Introspector - Java project structure extractor
#[derive(Parser, Debug)]
#[command(name = "introspector")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract the class and interface structure of a Java project into a JSON report")]
#[command(long_about = "Introspector walks a Java source tree, parses every .java file and writes one JSON \
document (project_analysis.json) listing each class and interface with its package, modifiers, fields and \
methods, plus the extends/implements/uses relations between them.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Analyze a project, writing ./project_analysis.json
    introspector ./my-java-project

    # Write the report somewhere else
    introspector ./my-java-project --output-file build/structure.json

Report Options:
    # Only names, fields and method signatures
    introspector ./my-java-project --schema minimal

    # Record each (type, parameter type) pair once
    introspector ./my-java-project --dedup-uses

    # Leave generated types out (replaces the default list)
    introspector ./my-java-project --exclude-type 'Generated*' --exclude-type MavenWrapperDownloader

Performance Options:
    # Single-threaded parsing
    introspector ./my-java-project --no-parallel

    # Limit the worker pool
    introspector ./my-java-project --threads 2

Configuration:
    # Use a specific configuration file
    introspector ./my-java-project --config ./introspector.toml

    # Create a default configuration file (.introspector.toml)
    introspector --init
")]
pub struct Args {
    /// Root of the Java project; exactly one is required
    #[arg(value_name = "PROJECT_PATH", num_args = 0..)]
    pub paths: Vec<PathBuf>,

    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .introspector.toml in the current or home directory)")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "NAME", help = "Type name or glob pattern to leave out of the report (repeatable; replaces the default list)")]
    pub exclude_type: Vec<String>,

    #[arg(long, value_enum, value_name = "SCHEMA", help = "Report shape: 'full' with packages, modifiers, metrics and relations, or 'minimal' with names and signatures only")]
    pub schema: Option<SchemaArg>,

    #[arg(long, help = "Keep only the first 'uses' edge per (source, target) pair")]
    pub dedup_uses: bool,

    #[arg(short, long, value_name = "FILE", help = "File to write the report to (defaults to project_analysis.json in the current directory)")]
    pub output_file: Option<PathBuf>,

    #[arg(long, value_name = "SUFFIX", help = "File-name suffix of source files to parse (defaults to .java)")]
    pub suffix: Option<String>,

    #[arg(long, help = "Follow symbolic links to directories during traversal")]
    pub follow_links: bool,

    #[arg(long, help = "Disable parallel parsing")]
    pub no_parallel: bool,

    #[arg(long, value_name = "N", help = "Number of worker threads (defaults to the number of CPUs)")]
    pub threads: Option<usize>,

    #[arg(long, help = "Disable the progress bar")]
    pub no_progress: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_colors: bool,

    #[arg(short, long, help = "Suppress non-essential output")]
    pub quiet: bool,

    #[arg(short, long, help = "Show stage progress and skipped files")]
    pub verbose: bool,

    #[arg(long, help = "Create a default configuration file (.introspector.toml) and exit")]
    pub init: bool,
}

/// Report schema as accepted on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaArg {
    Full,
    Minimal,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
