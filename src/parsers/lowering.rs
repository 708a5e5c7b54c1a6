//! Lowering of the tree-sitter Java tree into the closed syntax tree

use crate::models::ast::{
    with_dimensions, CompilationUnit, FieldNode, Member, MethodNode, ParameterNode, Span, TypeKind,
    TypeNode, VariableNode,
};
use std::path::Path;
use tree_sitter::Node;

const CLASS_DECLARATION: &str = "class_declaration";
const INTERFACE_DECLARATION: &str = "interface_declaration";

/// Lower a whole file
pub fn lower_unit(path: &Path, root: Node, source: &str) -> CompilationUnit {
    let lowering = Lowering {
        source,
        line_starts: line_starts(source),
    };

    let mut cursor = root.walk();
    let package = root
        .named_children(&mut cursor)
        .find(|child| child.kind() == "package_declaration")
        .and_then(|decl| lowering.package_name(decl));

    CompilationUnit {
        path: path.to_path_buf(),
        package,
        types: lowering.enclosed_types(root),
    }
}

/// Byte offsets at which each line begins
///
/// Java ends a line at `\r\n`, `\n` or a lone `\r`; tree-sitter rows only
/// count `\n`.
fn line_starts(source: &str) -> Vec<usize> {
    let bytes = source.as_bytes();
    let mut starts = vec![0];
    for (i, &byte) in bytes.iter().enumerate() {
        let ends_line = byte == b'\n' || (byte == b'\r' && bytes.get(i + 1) != Some(&b'\n'));
        if ends_line {
            starts.push(i + 1);
        }
    }
    starts
}

fn is_word(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Whether two adjacent type tokens are written with a space between them
fn needs_space(prev: &str, next: &str) -> bool {
    match (prev, next) {
        (",", _) | ("&", _) | (_, "&") => true,
        ("?", next) | (")", next) => is_word(next),
        (prev, next) => is_word(prev) && is_word(next),
    }
}

/// Visitor over the concrete tree, borrowing the source text
struct Lowering<'s> {
    source: &'s str,
    line_starts: Vec<usize>,
}

impl<'s> Lowering<'s> {
    fn text(&self, node: Node) -> &'s str {
        self.source.get(node.byte_range()).unwrap_or("")
    }

    /// 1-based line of a byte offset
    fn line_of(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset)
    }

    /// Type text rebuilt from its tokens: comments dropped, a space between
    /// words and after commas, none around brackets and dots
    fn type_text(&self, node: Node) -> String {
        let mut tokens = Vec::new();
        self.collect_tokens(node, &mut tokens);

        let mut text = String::new();
        let mut prev: Option<&str> = None;
        for token in tokens {
            if prev.is_some_and(|prev| needs_space(prev, token)) {
                text.push(' ');
            }
            text.push_str(token);
            prev = Some(token);
        }
        text
    }

    fn collect_tokens(&self, node: Node, tokens: &mut Vec<&'s str>) {
        if node.is_extra() {
            return;
        }
        if node.child_count() == 0 {
            let token = self.text(node);
            if !token.is_empty() {
                tokens.push(token);
            }
            return;
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.collect_tokens(child, tokens);
        }
    }

    fn package_name(&self, decl: Node) -> Option<String> {
        let mut cursor = decl.walk();
        let name = decl
            .named_children(&mut cursor)
            .find(|child| matches!(child.kind(), "identifier" | "scoped_identifier"))?;
        Some(self.type_text(name))
    }

    /// Class and interface declarations anywhere below `node`, outermost
    /// first, in document order. Does not descend into the ones it finds.
    fn enclosed_types(&self, node: Node) -> Vec<TypeNode> {
        let mut found = Vec::new();
        self.collect_types(node, &mut found);
        found
    }

    fn collect_types(&self, node: Node, found: &mut Vec<TypeNode>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                CLASS_DECLARATION | INTERFACE_DECLARATION => found.push(self.type_node(child)),
                _ => self.collect_types(child, found),
            }
        }
    }

    fn type_node(&self, decl: Node) -> TypeNode {
        let kind = if decl.kind() == INTERFACE_DECLARATION {
            TypeKind::Interface
        } else {
            TypeKind::Class
        };

        let name = decl
            .child_by_field_name("name")
            .map(|n| self.text(n).to_string())
            .unwrap_or_default();

        let mut supertypes = Vec::new();
        let mut interfaces = Vec::new();
        let mut modifiers = Vec::new();

        let mut cursor = decl.walk();
        for child in decl.named_children(&mut cursor) {
            match child.kind() {
                "modifiers" => modifiers = self.modifiers(child),
                "superclass" => supertypes.extend(self.type_names(child)),
                // `extends` of an interface lists its supertypes
                "extends_interfaces" => supertypes.extend(self.type_names(child)),
                "super_interfaces" => interfaces.extend(self.type_names(child)),
                _ => {}
            }
        }

        let members = decl
            .child_by_field_name("body")
            .map(|body| self.members(body))
            .unwrap_or_default();

        TypeNode {
            name,
            kind,
            modifiers,
            supertypes,
            interfaces,
            members,
        }
    }

    /// Keyword modifiers; annotations are dropped
    fn modifiers(&self, node: Node) -> Vec<String> {
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .filter(|child| !child.is_named())
            .map(|child| self.text(child).to_string())
            .collect()
    }

    /// Simple names of the types listed in a `superclass`, `extends_interfaces`
    /// or `super_interfaces` clause
    fn type_names(&self, clause: Node) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = clause.walk();
        for child in clause.named_children(&mut cursor) {
            if child.kind() == "type_list" {
                let mut inner = child.walk();
                names.extend(child.named_children(&mut inner).filter_map(|t| self.simple_name(t)));
            } else if let Some(name) = self.simple_name(child) {
                names.push(name);
            }
        }
        names
    }

    /// `java.util.List<String>` becomes `List`
    fn simple_name(&self, ty: Node) -> Option<String> {
        match ty.kind() {
            "type_identifier" => Some(self.text(ty).to_string()),
            "scoped_type_identifier" => {
                let mut cursor = ty.walk();
                let last = ty
                    .named_children(&mut cursor)
                    .filter(|c| c.kind() == "type_identifier")
                    .last()?;
                Some(self.text(last).to_string())
            }
            "generic_type" => self.simple_name(ty.named_child(0)?),
            "annotated_type" => {
                let mut cursor = ty.walk();
                let inner = ty
                    .named_children(&mut cursor)
                    .filter(|c| !matches!(c.kind(), "annotation" | "marker_annotation"))
                    .last()?;
                self.simple_name(inner)
            }
            "line_comment" | "block_comment" => None,
            _ => Some(self.type_text(ty)),
        }
    }

    fn members(&self, body: Node) -> Vec<Member> {
        let mut members = Vec::new();
        let mut cursor = body.walk();
        for child in body.named_children(&mut cursor) {
            match child.kind() {
                "field_declaration" | "constant_declaration" => {
                    if let Some(field) = self.field(child) {
                        members.push(Member::Field(field));
                    }
                }
                "method_declaration" => members.push(Member::Method(self.method(child))),
                CLASS_DECLARATION | INTERFACE_DECLARATION => {
                    members.push(Member::Type(self.type_node(child)));
                    continue;
                }
                _ => {}
            }
            // Local and anonymous-body classes, plus those inside enums
            members.extend(self.enclosed_types(child).into_iter().map(Member::Type));
        }
        members
    }

    fn field(&self, decl: Node) -> Option<FieldNode> {
        let declared_type = self.type_text(decl.child_by_field_name("type")?);

        let mut cursor = decl.walk();
        let variables = decl
            .children_by_field_name("declarator", &mut cursor)
            .filter_map(|declarator| self.variable(declarator))
            .collect();

        Some(FieldNode {
            declared_type,
            variables,
        })
    }

    fn variable(&self, declarator: Node) -> Option<VariableNode> {
        let name = self.text(declarator.child_by_field_name("name")?).to_string();
        Some(VariableNode {
            name,
            extra_dimensions: self.dimensions(declarator),
        })
    }

    /// Count of `[]` pairs in the node's `dimensions` field
    fn dimensions(&self, node: Node) -> usize {
        node.child_by_field_name("dimensions")
            .map(|dims| {
                let mut cursor = dims.walk();
                dims.children(&mut cursor).filter(|c| c.kind() == "[").count()
            })
            .unwrap_or(0)
    }

    fn method(&self, decl: Node) -> MethodNode {
        let name = decl
            .child_by_field_name("name")
            .map(|n| self.text(n).to_string())
            .unwrap_or_default();

        let parameters = decl
            .child_by_field_name("parameters")
            .map(|params| self.parameters(params))
            .unwrap_or_default();

        let span = Span::new(self.line_of(decl.start_byte()), self.line_of(decl.end_byte()));

        MethodNode {
            name,
            parameters,
            span,
        }
    }

    fn parameters(&self, params: Node) -> Vec<ParameterNode> {
        let mut cursor = params.walk();
        params
            .named_children(&mut cursor)
            .filter_map(|param| match param.kind() {
                "formal_parameter" => self.formal_parameter(param),
                "spread_parameter" => self.spread_parameter(param),
                // receiver_parameter and comments
                _ => None,
            })
            .collect()
    }

    fn formal_parameter(&self, param: Node) -> Option<ParameterNode> {
        let ty = self.type_text(param.child_by_field_name("type")?);
        let name = self.text(param.child_by_field_name("name")?).to_string();
        Some(ParameterNode {
            name,
            declared_type: with_dimensions(&ty, self.dimensions(param)),
        })
    }

    /// `String... args` is recorded with its element type `String`
    fn spread_parameter(&self, param: Node) -> Option<ParameterNode> {
        let mut cursor = param.walk();
        let children: Vec<Node> = param.named_children(&mut cursor).collect();

        let ty = children
            .iter()
            .find(|c| {
                !matches!(
                    c.kind(),
                    "modifiers" | "variable_declarator" | "line_comment" | "block_comment"
                )
            })?;
        let declarator = children.iter().find(|c| c.kind() == "variable_declarator")?;
        let variable = self.variable(*declarator)?;

        Some(ParameterNode {
            name: variable.name,
            declared_type: self.type_text(*ty),
        })
    }
}
