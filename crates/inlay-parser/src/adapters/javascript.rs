//! JavaScript, TypeScript, JSX and TSX.
//!
//! tree-sitter-typescript reports a `type_assertion` argument (`<T>value`) as
//! starting on its `<`, so its span needs no column correction.

use super::{CallAdapter, CallSite, CalleeShape, argument_nodes, identifier_text};
use tree_sitter::Node;

pub struct JavaScriptAdapter;

impl CallAdapter for JavaScriptAdapter {
    fn match_call<'t>(&self, node: Node<'t>, _source: &str) -> Option<CallSite<'t>> {
        let callee_field = match node.kind() {
            "call_expression" => "function",
            "new_expression" => "constructor",
            _ => return None,
        };
        let callee = node.child_by_field_name(callee_field)?;
        let args = node.child_by_field_name("arguments")?;
        // Tagged templates put a template_string in the arguments field.
        if args.kind() != "arguments" {
            return None;
        }
        Some(CallSite {
            shape: callee_shape(callee),
            arguments: argument_nodes(args),
            receiver_slots: 0,
        })
    }

    fn literal_name(&self, argument: Node<'_>, source: &str) -> Option<String> {
        identifier_text(argument, source)
    }
}

fn callee_shape(callee: Node<'_>) -> CalleeShape<'_> {
    match callee.kind() {
        "member_expression" => callee
            .child_by_field_name("property")
            .map_or(CalleeShape::Direct(callee), CalleeShape::Member),
        "call_expression" => CalleeShape::Chained(callee),
        _ => CalleeShape::Direct(callee),
    }
}
