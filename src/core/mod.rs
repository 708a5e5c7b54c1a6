//! Core pipeline: discovery, extraction, relation building and orchestration

pub mod analyzer;
pub mod discovery;
pub mod extractor;
pub mod parallel;
pub mod relations;

pub use analyzer::Analyzer;
pub use discovery::{discover, Discovery, DiscoveryOptions};
pub use extractor::{extract, ExclusionList};
pub use relations::build_relations;
