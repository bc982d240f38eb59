//! Tree-sitter based call-site extraction for inline parameter annotations.
//!
//! Supports JavaScript, TypeScript (and their JSX variants), PHP, Lua and Java.
//! [`calls`] walks a parsed document and emits one record per call argument;
//! [`signature`] recovers declared parameter names from hover text.

pub mod adapters;
pub mod calls;
pub mod languages;
pub mod signature;
pub mod treesitter;
