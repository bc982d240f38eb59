//! Extract call sites (one record per argument) from a parsed document.

use crate::adapters::{self, CallAdapter, CallSite, CalleeShape};
use crate::languages::Language;
use crate::treesitter;
use inlay_core::error::ExtractError;
use inlay_core::model::{CallSiteGroup, ExtractedArgument};
use inlay_core::position::{LineIndex, SourcePosition, Span};

/// Width assumed for a leading tab when columns are expanded.
pub const TAB_WIDTH: usize = 4;

/// Columns removed per leading whitespace character on tab-indented documents.
/// Applied to tab-expanded columns, it maps a line indented only with tabs
/// back onto its real characters. Other tab widths are not compensated.
pub const TAB_COLUMN_CORRECTION: usize = TAB_WIDTH - 1;

/// Per-pass extraction switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Emit nothing for calls with exactly one argument.
    pub hide_single_parameters: bool,
    /// The document is indented with tabs rather than spaces.
    pub tab_indented: bool,
}

/// Extract call-site groups from a document.
///
/// Never fails: a document that does not parse yields no groups.
pub fn extract_call_sites(
    source: &str,
    language: Language,
    options: &ExtractOptions,
) -> Vec<CallSiteGroup> {
    match try_extract_call_sites(source, language, options) {
        Ok(groups) => groups,
        Err(e) => {
            tracing::debug!("no call sites for {} document: {}", language, e);
            Vec::new()
        }
    }
}

/// Extract call-site groups, reporting why a document could not be analysed.
pub fn try_extract_call_sites(
    source: &str,
    language: Language,
    options: &ExtractOptions,
) -> Result<Vec<CallSiteGroup>, ExtractError> {
    let source = treesitter::strip_shebang(source);
    let tree = treesitter::parse_source(&source, language)?;

    let mut collector = CallCollector {
        adapter: adapters::for_language(language),
        source: &source,
        lines: LineIndex::new(&source),
        options,
        groups: Vec::new(),
    };
    collector.collect_calls(&tree.root_node());
    Ok(collector.groups)
}

struct CallCollector<'a> {
    adapter: &'static dyn CallAdapter,
    source: &'a str,
    lines: LineIndex<'a>,
    options: &'a ExtractOptions,
    groups: Vec<CallSiteGroup>,
}

impl CallCollector<'_> {
    /// Pre-order walk: an outer call is emitted before the calls nested in it.
    fn collect_calls(&mut self, node: &tree_sitter::Node) {
        if let Some(site) = self.adapter.match_call(*node, self.source)
            && let Some(group) = self.build_group(&site)
        {
            self.groups.push(group);
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.collect_calls(&child);
        }
    }

    fn build_group(&self, site: &CallSite<'_>) -> Option<CallSiteGroup> {
        if site.arguments.is_empty() {
            return None;
        }
        if self.options.hide_single_parameters && site.arguments.len() == 1 {
            return None;
        }

        let anchor_node = match site.shape {
            CalleeShape::Member(name) => name,
            CalleeShape::Chained(inner) => self
                .adapter
                .match_call(inner, self.source)
                .and_then(|inner_site| inner_site.arguments.first().copied())
                .unwrap_or(inner),
            CalleeShape::Direct(callee) => callee,
        };
        let anchor = self.point(anchor_node.start_position());

        let arguments = site
            .arguments
            .iter()
            .enumerate()
            .map(|(index, arg)| ExtractedArgument {
                callee_anchor: anchor,
                argument_index: index + site.receiver_slots,
                literal_name: self.adapter.literal_name(*arg, self.source),
                span: Span::new(
                    self.point(arg.start_position()),
                    self.point(arg.end_position()),
                ),
            })
            .collect();

        Some(CallSiteGroup { anchor, arguments })
    }

    fn point(&self, point: tree_sitter::Point) -> SourcePosition {
        let position = self.lines.position(point.row, point.column);
        if !self.options.tab_indented {
            return position;
        }
        // Expand leading tabs, then take the fixed correction back off.
        let expanded = position.character + self.lines.leading_tabs(point.row) * (TAB_WIDTH - 1);
        let correction = self.lines.leading_whitespace(point.row) * TAB_COLUMN_CORRECTION;
        SourcePosition::new(position.line, expanded.saturating_sub(correction))
    }
}
