//! PHP (with the HTML-embedding grammar, so files start with `<?php`).

use super::{CallAdapter, CallSite, CalleeShape, argument_nodes, node_text};
use tree_sitter::Node;

pub struct PhpAdapter;

impl CallAdapter for PhpAdapter {
    fn match_call<'t>(&self, node: Node<'t>, _source: &str) -> Option<CallSite<'t>> {
        let (shape, args) = match node.kind() {
            "function_call_expression" => {
                let callee = node.child_by_field_name("function")?;
                let shape = if is_call(callee) {
                    CalleeShape::Chained(callee)
                } else {
                    CalleeShape::Direct(callee)
                };
                (shape, node.child_by_field_name("arguments")?)
            }
            // $obj->name(), $obj?->name(), Cls::name()
            "member_call_expression"
            | "nullsafe_member_call_expression"
            | "scoped_call_expression" => (
                CalleeShape::Member(node.child_by_field_name("name")?),
                node.child_by_field_name("arguments")?,
            ),
            "object_creation_expression" => {
                let mut cursor = node.walk();
                let mut class = None;
                let mut args = None;
                for child in node.named_children(&mut cursor) {
                    match child.kind() {
                        "arguments" => args = Some(child),
                        // new class(...) { } has no class name to hover.
                        "anonymous_class" => return None,
                        _ if class.is_none() && !child.is_extra() => class = Some(child),
                        _ => {}
                    }
                }
                (CalleeShape::Direct(class?), args?)
            }
            _ => return None,
        };

        let arguments = argument_nodes(args)
            .into_iter()
            .filter(|arg| arg.kind() == "argument")
            .collect();
        Some(CallSite {
            shape,
            arguments,
            receiver_slots: 0,
        })
    }

    /// `$needle` as an argument yields `needle`: declared names are compared
    /// with their sigil removed.
    fn literal_name(&self, argument: Node<'_>, source: &str) -> Option<String> {
        let mut cursor = argument.walk();
        let value = argument
            .named_children(&mut cursor)
            .filter(|child| !child.is_extra())
            .last()?;
        if value.kind() != "variable_name" {
            return None;
        }
        let mut cursor = value.walk();
        let name = value
            .named_children(&mut cursor)
            .find(|child| child.kind() == "name")?;
        Some(node_text(name, source).to_string())
    }
}

fn is_call(node: Node<'_>) -> bool {
    matches!(
        node.kind(),
        "function_call_expression"
            | "member_call_expression"
            | "nullsafe_member_call_expression"
            | "scoped_call_expression"
    )
}
