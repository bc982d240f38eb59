//! Call-site records, parsed signatures and positioned annotations.

use crate::position::{SourcePosition, Span};
use serde::{Deserialize, Serialize};

/// One argument of one call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedArgument {
    /// Where to ask the hover oracle for the callee's signature.
    pub callee_anchor: SourcePosition,
    /// Position of this argument in its call's argument list. Colon-style
    /// receiver calls start at 1 (the receiver occupies slot 0).
    pub argument_index: usize,
    /// The argument's own identifier, when it is a bare identifier reference.
    pub literal_name: Option<String>,
    /// The argument's extent, end-exclusive.
    pub span: Span,
}

/// All arguments of a single call or construction expression, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSiteGroup {
    pub anchor: SourcePosition,
    pub arguments: Vec<ExtractedArgument>,
}

impl CallSiteGroup {
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

/// Parameter names declared by a callee, as recovered from signature text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSignature {
    /// Declaration order.
    pub parameter_names: Vec<String>,
    /// True when the last declared parameter absorbs all trailing arguments.
    pub is_variadic: bool,
}

impl ParsedSignature {
    pub fn new(parameter_names: Vec<String>, is_variadic: bool) -> Self {
        Self {
            parameter_names,
            is_variadic,
        }
    }
}

/// A rendered label to place at the start of an argument's span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub span: Span,
    pub label: String,
}
