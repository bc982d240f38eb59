//! Core types for inline parameter-name annotations.
//!
//! Provides the position model ([`position::SourcePosition`], [`position::Span`]),
//! the per-argument call-site records produced by the extractors
//! ([`model::CallSiteGroup`]), parsed signatures, configuration loading, and the
//! error taxonomy shared by the parser and annotation crates.

pub mod config;
pub mod error;
pub mod model;
pub mod position;
