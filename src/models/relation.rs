//! Relation edges between declared types

use serde::{Deserialize, Serialize};

/// Kind of relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// Class inheritance, or interface extension
    Extends,
    /// Interface implementation
    Implements,
    /// A method parameter of the target type
    Uses,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Extends => "extends",
            RelationKind::Implements => "implements",
            RelationKind::Uses => "uses",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One directed fact; the same fact may be recorded several times
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationEdge {
    pub source: String,
    /// Textual type name, not necessarily declared in the project
    pub target: String,
    pub kind: RelationKind,
}

impl RelationEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: RelationKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}

/// How repeated edges are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelationMode {
    /// Every occurrence is kept
    #[default]
    OccurrenceLog,
    /// `uses` edges collapse per (source, target); first occurrence wins
    Deduplicated,
}

impl RelationMode {
    pub fn from_dedup_flag(dedup_uses: bool) -> Self {
        if dedup_uses {
            RelationMode::Deduplicated
        } else {
            RelationMode::OccurrenceLog
        }
    }
}
