//! Java.

use super::{CallAdapter, CallSite, CalleeShape, argument_nodes, identifier_text};
use tree_sitter::Node;

pub struct JavaAdapter;

impl CallAdapter for JavaAdapter {
    fn match_call<'t>(&self, node: Node<'t>, _source: &str) -> Option<CallSite<'t>> {
        let shape = match node.kind() {
            "method_invocation" => {
                let name = node.child_by_field_name("name")?;
                if node.child_by_field_name("object").is_some() {
                    CalleeShape::Member(name)
                } else {
                    CalleeShape::Direct(name)
                }
            }
            "object_creation_expression" => CalleeShape::Direct(node.child_by_field_name("type")?),
            // this(...) / super(...)
            "explicit_constructor_invocation" => {
                CalleeShape::Direct(node.child_by_field_name("constructor")?)
            }
            _ => return None,
        };
        let args = node.child_by_field_name("arguments")?;
        Some(CallSite {
            shape,
            arguments: argument_nodes(args),
            receiver_slots: 0,
        })
    }

    fn literal_name(&self, argument: Node<'_>, source: &str) -> Option<String> {
        identifier_text(argument, source)
    }
}
