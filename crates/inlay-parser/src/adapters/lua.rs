//! Lua. `obj:method(a)` passes `obj` implicitly, so its first explicit
//! argument sits in parameter slot 1.

use super::{CallAdapter, CallSite, CalleeShape, argument_nodes, identifier_text};
use tree_sitter::Node;

pub struct LuaAdapter;

impl CallAdapter for LuaAdapter {
    fn match_call<'t>(&self, node: Node<'t>, _source: &str) -> Option<CallSite<'t>> {
        if node.kind() != "function_call" {
            return None;
        }
        let callee = node.child_by_field_name("name")?;
        let args = node.child_by_field_name("arguments")?;

        let (shape, receiver_slots) = match callee.kind() {
            "method_index_expression" => (
                CalleeShape::Member(callee.child_by_field_name("method")?),
                1,
            ),
            "dot_index_expression" => (
                callee
                    .child_by_field_name("field")
                    .map_or(CalleeShape::Direct(callee), CalleeShape::Member),
                0,
            ),
            "function_call" => (CalleeShape::Chained(callee), 0),
            _ => (CalleeShape::Direct(callee), 0),
        };

        // f"str" and f{...} pass a single argument without parentheses.
        let arguments = match args.kind() {
            "string" | "table_constructor" => vec![args],
            _ => argument_nodes(args),
        };
        Some(CallSite {
            shape,
            arguments,
            receiver_slots,
        })
    }

    fn literal_name(&self, argument: Node<'_>, source: &str) -> Option<String> {
        identifier_text(argument, source)
    }
}
