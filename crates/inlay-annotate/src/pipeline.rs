//! One annotation pass over a document.
//!
//! Extraction is synchronous; hover queries then fan out as a bounded stream
//! (one query per call site, not per argument); reconciliation runs on the
//! answers in call-site order.

use crate::oracle::{HoverOracle, choose_signature};
use crate::resolve::{ResolveOptions, resolve};
use anyhow::{Context, Result};
use futures_util::{StreamExt, stream};
use inlay_core::config::InlayConfig;
use inlay_core::error::CallSiteError;
use inlay_core::model::{Annotation, CallSiteGroup};
use inlay_parser::calls::{ExtractOptions, extract_call_sites};
use inlay_parser::languages::Language;
use std::path::Path;

/// An open document as the host editor sees it.
#[derive(Debug, Clone)]
pub struct Document {
    pub uri: String,
    pub language: Language,
    pub text: String,
    /// False when the editor indents this document with tabs.
    pub insert_spaces: bool,
}

impl Document {
    pub fn new(uri: impl Into<String>, language: Language, text: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            language,
            text: text.into(),
            insert_spaces: true,
        }
    }

    /// Read a file, picking the language from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(language) = Language::from_path(path) else {
            anyhow::bail!("unsupported file type: {}", path.display());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self::new(path.display().to_string(), language, text))
    }

    #[must_use]
    pub fn with_tabs(mut self) -> Self {
        self.insert_spaces = false;
        self
    }
}

/// Run a full pass and return every annotation, ordered by call site and
/// then by argument.
///
/// Call sites the oracle cannot describe contribute nothing; the pass itself
/// never fails.
pub async fn annotate_document<O: HoverOracle>(
    oracle: &O,
    document: &Document,
    config: &InlayConfig,
) -> Vec<Annotation> {
    if !config.enabled {
        return Vec::new();
    }

    let extract_options = ExtractOptions {
        hide_single_parameters: config.annotations.hide_single_parameters,
        tab_indented: !document.insert_spaces,
    };
    let groups = extract_call_sites(&document.text, document.language, &extract_options);
    if groups.is_empty() {
        return Vec::new();
    }
    tracing::debug!("{}: {} call sites", document.uri, groups.len());

    let resolve_options = ResolveOptions::for_language(config, document.language);
    let resolved: Vec<Result<Vec<Option<String>>, CallSiteError>> = stream::iter(&groups)
        .map(|group| resolve_call_site(oracle, document, group, &resolve_options))
        .buffered(config.oracle.concurrency.max(1))
        .collect()
        .await;

    let leading = &config.annotations.leading_characters;
    let trailing = &config.annotations.trailing_characters;
    let mut annotations = Vec::new();
    for (group, names) in groups.iter().zip(resolved) {
        let names = match names {
            Ok(names) => names,
            Err(CallSiteError::Oracle(e)) => {
                tracing::warn!("{}: hover at {} failed: {}", document.uri, group.anchor, e);
                continue;
            }
            Err(e) => {
                tracing::debug!("{}: skipping call site: {}", document.uri, e);
                continue;
            }
        };
        for (argument, name) in group.arguments.iter().zip(names) {
            if let Some(name) = name {
                annotations.push(Annotation {
                    span: argument.span,
                    label: format!("{}{}{}", leading, name, trailing),
                });
            }
        }
    }
    annotations
}

async fn resolve_call_site<O: HoverOracle>(
    oracle: &O,
    document: &Document,
    group: &CallSiteGroup,
    options: &ResolveOptions,
) -> Result<Vec<Option<String>>, CallSiteError> {
    let entries = oracle.hover(document, group.anchor).await?;
    if entries.is_empty() {
        return Err(CallSiteError::NoHover(group.anchor));
    }
    let signature = choose_signature(document.language, &entries)
        .ok_or(CallSiteError::UnrecognizedSignature(group.anchor))?;
    Ok(resolve(group, &signature, options))
}
