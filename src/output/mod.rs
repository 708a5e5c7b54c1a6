//! Output formatting and writing functionality

mod formatters;
mod progress;
mod writers;

pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::writers::{FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::ReportSchema;
use crate::models::report::{AnalysisReport, RunSummary};
use std::path::Path;

/// Trait for report formatters
pub trait Formatter {
    /// Render a report as the document written to disk
    fn format(&self, report: &AnalysisReport) -> Result<String>;
}

/// JSON document in one of the supported schemas
pub struct JsonFormatter {
    pub schema: ReportSchema,
}

impl JsonFormatter {
    pub fn new(schema: ReportSchema) -> Self {
        Self { schema }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        formatters::format_report_json(report, self.schema)
    }
}

/// Create a formatter for the configured schema
pub fn create_formatter(schema: ReportSchema) -> Box<dyn Formatter> {
    Box::new(JsonFormatter::new(schema))
}

/// Terminal summary printed after the report is written
pub struct SummaryFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl SummaryFormatter {
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }

    pub fn format(&self, summary: &RunSummary, output_path: &Path) -> String {
        if self.quiet {
            formatters::format_summary_line(summary, output_path)
        } else {
            formatters::format_summary_text(summary, output_path, self.use_colors, self.verbose)
        }
    }
}

/// Format `report` and publish it atomically at `path`
pub fn write_report(report: &AnalysisReport, schema: ReportSchema, path: &Path) -> Result<()> {
    let content = create_formatter(schema).format(report)?;
    FileWriter::new(path).write(&content)
}
