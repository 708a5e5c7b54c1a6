//! Parsing of Java source files
//!
//! `ast_parser` runs tree-sitter over a file and `lowering` turns the
//! resulting concrete tree into the crate's closed syntax tree.

pub mod ast_parser;
mod lowering;

pub use ast_parser::{JavaParser, ParseResult};
