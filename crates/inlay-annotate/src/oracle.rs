//! The hover oracle: whatever can describe the callee at a source position.
//!
//! Editors answer hover requests with markdown blocks; only the text matters
//! here. [`StaticOracle`] replays recorded answers.

use crate::pipeline::Document;
use anyhow::{Context, Result};
use inlay_core::error::OracleError;
use inlay_core::model::ParsedSignature;
use inlay_core::position::SourcePosition;
use inlay_parser::languages::Language;
use inlay_parser::signature::parse_signature;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::path::Path;

/// One hover result: its content blocks in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverEntry {
    pub contents: Vec<String>,
}

impl HoverEntry {
    pub fn new<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            contents: contents.into_iter().map(Into::into).collect(),
        }
    }
}

/// Source of callee descriptions.
///
/// An empty answer is a normal outcome (nothing known at that position);
/// `Err` is reserved for the oracle itself failing.
pub trait HoverOracle: Sync {
    fn hover(
        &self,
        document: &Document,
        position: SourcePosition,
    ) -> impl Future<Output = Result<Vec<HoverEntry>, OracleError>> + Send;
}

/// Pick the signature out of a hover answer: the first block of the first
/// entry that the language's dialect can parse.
pub fn choose_signature(language: Language, entries: &[HoverEntry]) -> Option<ParsedSignature> {
    entries
        .first()?
        .contents
        .iter()
        .find_map(|block| parse_signature(language, block))
}

/// Recorded hover answers, keyed by position.
#[derive(Debug, Clone, Default)]
pub struct StaticOracle {
    answers: HashMap<SourcePosition, Vec<HoverEntry>>,
}

#[derive(Deserialize)]
struct FixtureRecord {
    line: usize,
    character: usize,
    #[serde(default)]
    contents: Vec<String>,
}

impl StaticOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more entry at `position`.
    pub fn insert(&mut self, position: SourcePosition, entry: HoverEntry) {
        self.answers.entry(position).or_default().push(entry);
    }

    /// Builder form of [`StaticOracle::insert`].
    #[must_use]
    pub fn with(mut self, line: usize, character: usize, contents: &[&str]) -> Self {
        self.insert(
            SourcePosition::new(line, character),
            HoverEntry::new(contents.iter().copied()),
        );
        self
    }

    /// Parse a fixture: `[{"line": 0, "character": 4, "contents": ["..."]}]`.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<FixtureRecord> =
            serde_json::from_str(json).context("invalid hover fixture")?;
        let mut oracle = Self::new();
        for record in records {
            oracle.insert(
                SourcePosition::new(record.line, record.character),
                HoverEntry {
                    contents: record.contents,
                },
            );
        }
        Ok(oracle)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read hover fixture {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl HoverOracle for StaticOracle {
    async fn hover(
        &self,
        _document: &Document,
        position: SourcePosition,
    ) -> Result<Vec<HoverEntry>, OracleError> {
        Ok(self.answers.get(&position).cloned().unwrap_or_default())
    }
}
