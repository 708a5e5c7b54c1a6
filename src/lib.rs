//! Introspector - extracts the structure of a Java project
//!
//! This library walks a Java source tree, parses every source file with
//! tree-sitter and reports the declared classes and interfaces, their
//! members, and the relations between them as one JSON document.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use error::{handle_error, ErrorSeverity, IntrospectorError, Result, ResultExt};
pub use models::{
    config::{ReportSchema, Settings},
    declaration::TypeDeclaration,
    relation::{RelationEdge, RelationKind, RelationMode},
    report::{AnalysisOutcome, AnalysisReport, RunSummary},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
