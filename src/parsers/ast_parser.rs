//! Java parser wrapper using tree-sitter

use crate::error::Result;
use crate::models::ast::CompilationUnit;
use crate::models::report::{FailureKind, FileFailure};
use std::fs;
use std::path::Path;
use tree_sitter::{Language, Node, Parser};

use super::lowering;

/// Result of parsing one file: an AST or the reason the file is skipped
pub type ParseResult = std::result::Result<CompilationUnit, FileFailure>;

/// Parses Java files into the crate's syntax tree
///
/// Holds only the grammar; a fresh `tree_sitter::Parser` is created per
/// file so one instance can be shared across worker threads.
pub struct JavaParser {
    language: Language,
}

impl JavaParser {
    /// Create a parser, checking that the grammar loads
    pub fn new() -> Result<Self> {
        let language: Language = tree_sitter_java::LANGUAGE.into();
        Parser::new().set_language(&language)?;
        Ok(Self { language })
    }

    /// Read and parse a file
    pub fn parse(&self, path: &Path) -> ParseResult {
        let bytes = fs::read(path)
            .map_err(|e| FileFailure::new(path, FailureKind::Io, e.to_string()))?;

        let source = String::from_utf8(bytes).map_err(|e| {
            FileFailure::new(
                path,
                FailureKind::Encoding,
                format!("invalid UTF-8: {}", e.utf8_error()),
            )
        })?;

        self.parse_source(path, &source)
    }

    /// Parse already loaded source text
    pub fn parse_source(&self, path: &Path, source: &str) -> ParseResult {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| FileFailure::new(path, FailureKind::Syntax, e.to_string()))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| FileFailure::new(path, FailureKind::Syntax, "parser produced no tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            let message = match first_error(root) {
                Some(node) => {
                    let pos = node.start_position();
                    let what = if node.is_missing() {
                        format!("missing {}", node.kind())
                    } else {
                        "syntax error".to_string()
                    };
                    format!("{} at {}:{}", what, pos.row + 1, pos.column + 1)
                }
                None => "syntax error".to_string(),
            };
            return Err(FileFailure::new(path, FailureKind::Syntax, message));
        }

        Ok(lowering::lower_unit(path, root, source))
    }
}

/// Depth-first search for the first ERROR or MISSING node
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
