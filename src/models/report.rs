//! Report and run summary structures

use super::declaration::TypeDeclaration;
use super::relation::RelationEdge;
use crate::error::IntrospectorError;
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

/// Declarations and relations of one run, in discovery order
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    declarations: Vec<TypeDeclaration>,
    relations: Vec<RelationEdge>,
}

impl AnalysisReport {
    pub fn new(declarations: Vec<TypeDeclaration>, relations: Vec<RelationEdge>) -> Self {
        Self {
            declarations,
            relations,
        }
    }

    pub fn declarations(&self) -> &[TypeDeclaration] {
        &self.declarations
    }

    pub fn relations(&self) -> &[RelationEdge] {
        &self.relations
    }

    /// True when every edge starts at a declaration of this report
    pub fn is_consistent(&self) -> bool {
        let names: HashSet<&str> = self.declarations.iter().map(|d| d.name.as_str()).collect();
        self.relations.iter().all(|edge| names.contains(edge.source.as_str()))
    }
}

/// Where a recoverable failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// A directory could not be read
    Traversal,
    /// A file could not be read
    Io,
    /// A file is not valid UTF-8
    Encoding,
    /// The parser rejected the file
    Syntax,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FailureKind::Traversal => "traversal",
            FailureKind::Io => "io",
            FailureKind::Encoding => "encoding",
            FailureKind::Syntax => "syntax",
        };
        f.write_str(name)
    }
}

/// A file or subtree left out of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub kind: FailureKind,
    pub message: String,
}

impl FileFailure {
    pub fn new(path: impl Into<PathBuf>, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }

    /// The failure as a crate error, for severity-based handling
    pub fn to_error(&self) -> IntrospectorError {
        match self.kind {
            FailureKind::Traversal => {
                IntrospectorError::directory_traversal_error(&self.path, &self.message)
            }
            _ => IntrospectorError::parse_error(
                &self.path,
                format!("{} ({})", self.message, self.kind),
            ),
        }
    }
}

/// Counters for the terminal summary; never part of the JSON document
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub files_discovered: usize,
    pub files_parsed: usize,
    pub declarations: usize,
    pub relations: usize,
    pub failures: Vec<FileFailure>,
    pub duration: Duration,
}

impl RunSummary {
    pub fn files_failed(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| f.kind != FailureKind::Traversal)
            .count()
    }

    pub fn traversal_failures(&self) -> usize {
        self.failures.len() - self.files_failed()
    }
}

/// Everything one pipeline run produces
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub summary: RunSummary,
}
