//! Source coordinates shared by extraction, reconciliation and rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 0-based (line, character) coordinate. `character` counts Unicode scalar
/// values from the start of the line, not bytes.
///
/// Ordering is lexicographic by `(line, character)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    pub line: usize,
    pub character: usize,
}

impl SourcePosition {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Shift the character left by `columns`, clamping at column 0.
    #[must_use]
    pub fn shifted_left(self, columns: usize) -> Self {
        Self {
            line: self.line,
            character: self.character.saturating_sub(columns),
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// An end-exclusive source range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl Span {
    /// Build a span, swapping the endpoints if they arrive reversed so that
    /// `start <= end` always holds.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Maps tree-sitter style `(row, byte column)` points onto [`SourcePosition`]s.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            source,
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of line `row` without its line terminator. Out-of-range rows are empty.
    pub fn line_text(&self, row: usize) -> &'a str {
        let Some(&start) = self.line_starts.get(row) else {
            return "";
        };
        let end = self
            .line_starts
            .get(row + 1)
            .map_or(self.source.len(), |next| next - 1);
        self.source
            .get(start..end)
            .unwrap_or("")
            .trim_end_matches('\r')
    }

    /// Convert a byte column on `row` into a character position.
    pub fn position(&self, row: usize, byte_column: usize) -> SourcePosition {
        let line = self.line_text(row);
        let mut column = byte_column.min(line.len());
        while !line.is_char_boundary(column) {
            column -= 1;
        }
        SourcePosition::new(row, line[..column].chars().count())
    }

    /// Number of leading whitespace characters on `row` (the whole line length
    /// when the line is blank).
    pub fn leading_whitespace(&self, row: usize) -> usize {
        self.line_text(row)
            .chars()
            .take_while(|c| c.is_whitespace())
            .count()
    }

    /// Number of tabs within the leading whitespace of `row`.
    pub fn leading_tabs(&self, row: usize) -> usize {
        self.line_text(row)
            .chars()
            .take_while(|c| c.is_whitespace())
            .filter(|c| *c == '\t')
            .count()
    }
}
