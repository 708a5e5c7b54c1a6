//! Relation edges derived from extracted declarations

use crate::models::declaration::TypeDeclaration;
use crate::models::relation::{RelationEdge, RelationKind, RelationMode};
use std::collections::HashSet;

/// Edges of `declarations`, in declaration order
///
/// Per declaration: `extends` edges, then `implements` edges, then one
/// `uses` edge per method parameter.
pub fn build_relations(declarations: &[TypeDeclaration], mode: RelationMode) -> Vec<RelationEdge> {
    let edges = declarations.iter().flat_map(edges_of).collect();
    apply_mode(edges, mode)
}

/// Apply a mode to an occurrence log built elsewhere
pub fn apply_mode(edges: Vec<RelationEdge>, mode: RelationMode) -> Vec<RelationEdge> {
    match mode {
        RelationMode::OccurrenceLog => edges,
        RelationMode::Deduplicated => deduplicate_uses(edges),
    }
}

fn edges_of(declaration: &TypeDeclaration) -> Vec<RelationEdge> {
    let source = &declaration.name;

    let extends = declaration
        .supertypes
        .iter()
        .map(|target| RelationEdge::new(source, target, RelationKind::Extends));

    let implements = declaration
        .interfaces
        .iter()
        .map(|target| RelationEdge::new(source, target, RelationKind::Implements));

    let uses = declaration
        .methods
        .iter()
        .flat_map(|method| method.parameters.iter())
        .map(|param| RelationEdge::new(source, &param.declared_type, RelationKind::Uses));

    extends.chain(implements).chain(uses).collect()
}

/// Keep the first `uses` edge per (source, target)
fn deduplicate_uses(edges: Vec<RelationEdge>) -> Vec<RelationEdge> {
    let mut seen = HashSet::new();
    edges
        .into_iter()
        .filter(|edge| {
            edge.kind != RelationKind::Uses
                || seen.insert((edge.source.clone(), edge.target.clone()))
        })
        .collect()
}
