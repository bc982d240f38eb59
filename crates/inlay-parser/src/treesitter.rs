//! Tree-sitter integration for multi-language AST parsing.

use crate::languages::Language;
use inlay_core::error::ExtractError;

/// Parse source text and return the tree-sitter tree.
///
/// A tree that contains `ERROR` or `MISSING` nodes is rejected: a half-typed
/// document yields no call sites at all rather than misplaced ones.
pub fn parse_source(source: &str, language: Language) -> Result<tree_sitter::Tree, ExtractError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language.ts_language())
        .map_err(|e| ExtractError::Grammar {
            language: language.name(),
            message: e.to_string(),
        })?;
    let tree = parser
        .parse(source.as_bytes(), None)
        .ok_or(ExtractError::NoTree)?;

    let root = tree.root_node();
    if root.has_error() {
        let line = first_error_row(&root).unwrap_or(0);
        return Err(ExtractError::Syntax { line });
    }
    Ok(tree)
}

/// Row of the first `ERROR` or `MISSING` node in document order.
fn first_error_row(node: &tree_sitter::Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(row) = first_error_row(&child) {
            return Some(row);
        }
    }
    None
}

/// Replace a leading `#!` interpreter line with an empty line. Line numbers
/// of everything after it are preserved.
pub fn strip_shebang(source: &str) -> std::borrow::Cow<'_, str> {
    if !source.starts_with("#!") {
        return std::borrow::Cow::Borrowed(source);
    }
    match source.find('\n') {
        Some(newline) => std::borrow::Cow::Owned(source[newline..].to_string()),
        None => std::borrow::Cow::Owned(String::new()),
    }
}
