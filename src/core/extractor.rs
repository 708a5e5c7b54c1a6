//! Structural extraction from the syntax tree

use crate::error::Result;
use crate::models::ast::{CompilationUnit, Member, TypeNode};
use crate::models::declaration::{Field, Method, Parameter, TypeDeclaration};
use glob::Pattern;

/// Type names left out of the report
#[derive(Debug, Clone, Default)]
pub struct ExclusionList {
    exact: Vec<String>,
    patterns: Vec<Pattern>,
}

impl ExclusionList {
    /// Build from configured entries
    ///
    /// Entries with glob metacharacters are compiled as patterns, the rest
    /// are matched by exact name.
    pub fn new(entries: &[String]) -> Result<Self> {
        let mut list = Self::default();
        for entry in entries {
            if entry.contains(['*', '?', '[']) {
                list.patterns.push(Pattern::new(entry)?);
            } else {
                list.exact.push(entry.clone());
            }
        }
        Ok(list)
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exact.iter().any(|e| e == name) || self.patterns.iter().any(|p| p.matches(name))
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.patterns.is_empty()
    }
}

/// Declarations of one unit, types before their nested types
pub fn extract(unit: &CompilationUnit, exclusion: &ExclusionList) -> Vec<TypeDeclaration> {
    let package = unit.package.clone().unwrap_or_default();
    let mut declarations = Vec::new();
    for node in &unit.types {
        visit(node, &package, exclusion, &mut declarations);
    }
    declarations
}

fn visit(
    node: &TypeNode,
    package: &str,
    exclusion: &ExclusionList,
    out: &mut Vec<TypeDeclaration>,
) {
    if exclusion.is_excluded(&node.name) {
        tracing::debug!("excluding type {}", node.name);
    } else {
        out.push(declaration(node, package));
    }

    // Nested types of an excluded type are still reported
    for member in &node.members {
        if let Member::Type(nested) = member {
            visit(nested, package, exclusion, out);
        }
    }
}

fn declaration(node: &TypeNode, package: &str) -> TypeDeclaration {
    let mut fields = Vec::new();
    let mut methods = Vec::new();

    for member in &node.members {
        match member {
            Member::Field(field) => {
                fields.extend(field.variables.iter().map(|variable| Field {
                    name: variable.name.clone(),
                    declared_type: variable.effective_type(&field.declared_type),
                }));
            }
            Member::Method(method) => methods.push(Method {
                name: method.name.clone(),
                parameters: method
                    .parameters
                    .iter()
                    .map(|p| Parameter {
                        name: p.name.clone(),
                        declared_type: p.declared_type.clone(),
                    })
                    .collect(),
                lines_of_code: method.span.line_count(),
            }),
            Member::Type(_) => {}
        }
    }

    TypeDeclaration {
        name: node.name.clone(),
        package: package.to_string(),
        kind: node.kind,
        modifiers: node.modifiers.clone(),
        fields,
        methods,
        supertypes: node.supertypes.clone(),
        interfaces: node.interfaces.clone(),
    }
}
