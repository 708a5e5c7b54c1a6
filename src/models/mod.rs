//! Data models: the syntax tree, the extracted declarations and the report

pub mod ast;
pub mod config;
pub mod declaration;
pub mod relation;
pub mod report;
