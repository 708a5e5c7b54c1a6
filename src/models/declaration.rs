//! Extracted declaration model

use super::ast::TypeKind;
use serde::{Deserialize, Serialize};

/// A class or interface as it appears in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    /// Empty when the unit declares no package
    pub package: String,
    pub kind: TypeKind,
    pub modifiers: Vec<String>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
    pub supertypes: Vec<String>,
    pub interfaces: Vec<String>,
}

impl TypeDeclaration {
    /// Modifiers joined in declaration order, e.g. `"public, abstract"`
    pub fn modifiers_text(&self) -> String {
        self.modifiers.join(", ")
    }

    /// Number of parameters across every method
    pub fn parameter_count(&self) -> usize {
        self.methods.iter().map(|m| m.parameters.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub declared_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// May be zero or negative when the parser reported no end line
    pub lines_of_code: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub declared_type: String,
}
