//! Render metrics and observability.
//!
//! Counts rendered pages, pages that lost a section to a content error under
//! the lenient policy, the content errors themselves, and cosmetic fallbacks
//! (unknown insight colours).

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// What a single page render ran into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTally {
    /// Sections or frame values that failed to resolve their content
    pub content_errors: usize,
    /// Fail-soft substitutions made while rendering
    pub cosmetic_fallbacks: usize,
}

impl PageTally {
    pub fn is_clean(&self) -> bool {
        self.content_errors == 0
    }
}

/// Render counters.
#[derive(Debug, Default)]
pub struct RenderMetrics {
    /// Number of complete pages rendered
    pages_rendered: AtomicUsize,

    /// Number of pages with at least one content error
    pages_with_errors: AtomicUsize,

    /// Number of sections and frame values that failed to resolve
    content_errors: AtomicUsize,

    /// Number of fail-soft substitutions made while rendering
    cosmetic_fallbacks: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<RenderMetrics> = OnceLock::new();

impl RenderMetrics {
    /// Fresh, zeroed counters. Tests and one-off renders use their own.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide metrics instance used by the binaries.
    pub fn global() -> &'static RenderMetrics {
        METRICS.get_or_init(RenderMetrics::new)
    }

    /// Record one finished page.
    pub fn record_page(&self, tally: &PageTally) {
        self.pages_rendered.fetch_add(1, Ordering::Relaxed);
        if !tally.is_clean() {
            self.pages_with_errors.fetch_add(1, Ordering::Relaxed);
        }
        self.content_errors
            .fetch_add(tally.content_errors, Ordering::Relaxed);
        self.cosmetic_fallbacks
            .fetch_add(tally.cosmetic_fallbacks, Ordering::Relaxed);
    }

    pub fn pages_rendered(&self) -> usize {
        self.pages_rendered.load(Ordering::Relaxed)
    }

    pub fn pages_with_errors(&self) -> usize {
        self.pages_with_errors.load(Ordering::Relaxed)
    }

    pub fn content_errors(&self) -> usize {
        self.content_errors.load(Ordering::Relaxed)
    }

    pub fn cosmetic_fallbacks(&self) -> usize {
        self.cosmetic_fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let pages = self.pages_rendered();
        let unclean = self.pages_with_errors();
        let clean_page_rate = if pages > 0 {
            (pages.saturating_sub(unclean) as f64 / pages as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            pages_rendered: pages,
            pages_with_errors: unclean,
            content_errors: self.content_errors(),
            cosmetic_fallbacks: self.cosmetic_fallbacks(),
            clean_page_rate,
        }
    }
}

/// Snapshot of the render counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub pages_rendered: usize,

    pub pages_with_errors: usize,

    pub content_errors: usize,

    pub cosmetic_fallbacks: usize,

    /// Share of pages rendered without a content error, as a percentage (0-100)
    pub clean_page_rate: f64,
}
