//! Debounced, supersedable annotation passes for one document view.
//!
//! Every refresh takes a generation ticket. A pass whose ticket is no longer
//! the latest when its delay or its hover queries finish drops its result,
//! so the surface always shows the output of the newest completed pass.

use crate::oracle::HoverOracle;
use crate::pipeline::{Document, annotate_document};
use inlay_core::config::{InlayConfig, ScheduleConfig};
use inlay_core::model::Annotation;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Where finished passes land. Each call replaces everything shown before.
pub trait DecorationSurface: Sync {
    fn apply(&self, annotations: Vec<Annotation>);
}

/// What caused a refresh; selects the debounce delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The document was just opened.
    Initial,
    /// An edit, a focus change or a configuration change.
    Update,
}

impl Trigger {
    pub fn delay(self, schedule: &ScheduleConfig) -> Duration {
        let ms = match self {
            Self::Initial => schedule.initial_delay_ms,
            Self::Update => schedule.update_delay_ms,
        };
        Duration::from_millis(ms)
    }
}

pub struct AnnotationSession<O, S> {
    oracle: O,
    surface: S,
    generation: AtomicU64,
}

impl<O: HoverOracle, S: DecorationSurface> AnnotationSession<O, S> {
    pub fn new(oracle: O, surface: S) -> Self {
        Self {
            oracle,
            surface,
            generation: AtomicU64::new(0),
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Schedule a pass. Returns whether its result reached the surface.
    pub async fn refresh(
        &self,
        document: &Document,
        config: &InlayConfig,
        trigger: Trigger,
    ) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let delay = trigger.delay(&config.schedule);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if !self.is_current(ticket) {
            tracing::debug!("{}: pass {} superseded before start", document.uri, ticket);
            return false;
        }

        let annotations = annotate_document(&self.oracle, document, config).await;
        if !self.is_current(ticket) {
            tracing::debug!(
                "{}: pass {} superseded, dropping {} annotations",
                document.uri,
                ticket,
                annotations.len()
            );
            return false;
        }

        tracing::debug!(
            "{}: pass {} applying {} annotations",
            document.uri,
            ticket,
            annotations.len()
        );
        self.surface.apply(annotations);
        true
    }

    /// Flip `config.enabled` and redraw: a disabled configuration clears the
    /// surface. Returns the new state.
    pub async fn toggle(&self, document: &Document, config: &mut InlayConfig) -> bool {
        let enabled = config.toggle_enabled();
        tracing::info!(
            "inline parameter annotations {}",
            if enabled { "enabled" } else { "disabled" }
        );
        self.refresh(document, config, Trigger::Update).await;
        enabled
    }

    /// Make every in-flight pass stale, e.g. when the document closes.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }
}
