//! Error taxonomy. Every variant here describes a normal editing state (a
//! half-typed document, a callee the oracle cannot describe) and is handled
//! silently by the caller; none of them is fatal.

use crate::position::SourcePosition;

/// The whole document could not be turned into call sites.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to load {language} grammar: {message}")]
    Grammar {
        language: &'static str,
        message: String,
    },
    #[error("parser produced no tree")]
    NoTree,
    #[error("syntax error near line {line}")]
    Syntax { line: usize },
}

/// The hover oracle itself failed (as opposed to answering with nothing).
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("hover request failed: {0}")]
    Transport(String),
    #[error("document {0} is not open")]
    UnknownDocument(String),
}

/// Why a single call site produced no annotations. Siblings are unaffected.
#[derive(Debug, thiserror::Error)]
pub enum CallSiteError {
    #[error("no hover entries at {0}")]
    NoHover(SourcePosition),
    #[error("hover text at {0} does not contain a parameter list")]
    UnrecognizedSignature(SourcePosition),
    #[error(transparent)]
    Oracle(#[from] OracleError),
}
