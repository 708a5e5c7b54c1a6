//! Closed syntax tree handed from the parse adapter to the extractor
//!
//! Only the node kinds the extractor understands exist here. The parse
//! adapter lowers the grammar's concrete tree into these values, so adding a
//! node kind means adding a variant and fixing every `match` that breaks.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One parsed source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub path: PathBuf,
    /// Declared package, if any
    pub package: Option<String>,
    /// Class and interface declarations in document order
    pub types: Vec<TypeNode>,
}

/// Class or interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A class or interface declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeNode {
    pub name: String,
    pub kind: TypeKind,
    /// Keyword modifiers in source order
    pub modifiers: Vec<String>,
    /// `extends` clause, simple names
    pub supertypes: Vec<String>,
    /// `implements` clause, simple names
    pub interfaces: Vec<String>,
    pub members: Vec<Member>,
}

/// Body member of a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Member {
    Field(FieldNode),
    Method(MethodNode),
    /// Nested, local or otherwise enclosed class/interface
    Type(TypeNode),
}

/// One field declaration, possibly declaring several variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNode {
    /// Type text shared by every variable
    pub declared_type: String,
    pub variables: Vec<VariableNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableNode {
    pub name: String,
    /// Array dimensions written after the name (`int a[][]` has 2)
    pub extra_dimensions: usize,
}

impl VariableNode {
    /// Type text of this variable once its own dimensions are applied
    pub fn effective_type(&self, declared_type: &str) -> String {
        with_dimensions(declared_type, self.extra_dimensions)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodNode {
    pub name: String,
    pub parameters: Vec<ParameterNode>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterNode {
    pub name: String,
    pub declared_type: String,
}

/// 1-based line range of a node; either end may be unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start_line: Option<usize>,
    pub end_line: Option<usize>,
}

impl Span {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line: Some(start_line),
            end_line: Some(end_line),
        }
    }

    /// `end - start + 1`, with an unknown end treated as line 0.
    ///
    /// No guard: an unknown end yields a zero or negative count and two
    /// unknown ends yield 1.
    pub fn line_count(&self) -> i64 {
        let end = self.end_line.unwrap_or(0) as i64;
        let start = self.start_line.unwrap_or(0) as i64;
        end - start + 1
    }
}

/// Append `[]` pairs to a type text
pub fn with_dimensions(type_text: &str, dimensions: usize) -> String {
    let mut text = String::with_capacity(type_text.len() + dimensions * 2);
    text.push_str(type_text);
    for _ in 0..dimensions {
        text.push_str("[]");
    }
    text
}
