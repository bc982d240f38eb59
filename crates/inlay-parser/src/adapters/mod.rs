//! Per-language knowledge plugged into the shared extraction engine.
//!
//! Each adapter maps its grammar's node kinds onto a closed set of call
//! shapes; everything else (traversal, positions, filtering) lives in
//! [`crate::calls`].

mod java;
mod javascript;
mod lua;
mod php;

pub use java::JavaAdapter;
pub use javascript::JavaScriptAdapter;
pub use lua::LuaAdapter;
pub use php::PhpAdapter;

use crate::languages::Language;
use tree_sitter::Node;

/// How the callee of a call site is spelled.
#[derive(Debug, Clone, Copy)]
pub enum CalleeShape<'t> {
    /// `a.b(...)`, `$a->b(...)`, `a:b(...)`: holds the member name node.
    Member(Node<'t>),
    /// `f(...)(...)`: holds the inner call node.
    Chained(Node<'t>),
    /// Anything else: holds the callee expression.
    Direct(Node<'t>),
}

/// A call or construction expression recognised by an adapter.
#[derive(Debug, Clone)]
pub struct CallSite<'t> {
    pub shape: CalleeShape<'t>,
    /// Argument nodes in source order, comments excluded.
    pub arguments: Vec<Node<'t>>,
    /// Implicit leading arguments the call passes (the receiver of a Lua
    /// `obj:method()` call).
    pub receiver_slots: usize,
}

/// Grammar-specific recognition of call sites.
pub trait CallAdapter: Sync {
    /// Recognise `node` as a call or construction expression.
    fn match_call<'t>(&self, node: Node<'t>, source: &str) -> Option<CallSite<'t>>;

    /// The argument's identifier when the argument is a bare identifier.
    fn literal_name(&self, argument: Node<'_>, source: &str) -> Option<String>;
}

static JAVASCRIPT: JavaScriptAdapter = JavaScriptAdapter;
static PHP: PhpAdapter = PhpAdapter;
static LUA: LuaAdapter = LuaAdapter;
static JAVA: JavaAdapter = JavaAdapter;

/// The adapter that understands `language`'s grammar.
pub fn for_language(language: Language) -> &'static dyn CallAdapter {
    match language {
        Language::JavaScript
        | Language::JavaScriptReact
        | Language::TypeScript
        | Language::TypeScriptReact => &JAVASCRIPT,
        Language::Php => &PHP,
        Language::Lua => &LUA,
        Language::Java => &JAVA,
    }
}

/// Named, non-comment children of an argument list node.
pub(crate) fn argument_nodes<'t>(list: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = list.walk();
    list.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

pub(crate) fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Text of `node` when it is an `identifier` node.
pub(crate) fn identifier_text(node: Node<'_>, source: &str) -> Option<String> {
    (node.kind() == "identifier").then(|| node_text(node, source).to_string())
}
