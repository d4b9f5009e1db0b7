//! A single-user rendering session.
//!
//! The session owns the only mutable state of the pipeline: the active locale,
//! the current path and the entrance-animation latches. Rendering is pure
//! over that state, so the cached output is reused until the locale
//! generation or the path changes.

use crate::content::ContentStore;
use crate::error::ContentResult;
use crate::i18n::{Locale, LocaleChange, LocaleSelector};
use crate::metrics::RenderMetrics;
use crate::page::{build_page, render_page, ContentPolicy, ProfileSettings, RenderContext};
use crate::render::ViewportTracker;
use crate::router::{canonical_path, parse_location, Route};
use tracing::{debug, info};

#[derive(Debug)]
struct RenderedView {
    generation: u64,
    path: String,
    html: String,
}

pub struct Session<'a> {
    store: &'a ContentStore,
    profile: &'a ProfileSettings,
    metrics: &'a RenderMetrics,
    selector: LocaleSelector,
    /// Locale-free canonical path, see [`canonical_path`]
    path: String,
    policy: ContentPolicy,
    tracker: ViewportTracker,
    cache: Option<RenderedView>,
    /// Entrance state changed since the cached html was written
    marks_dirty: bool,
}

impl<'a> Session<'a> {
    pub fn new(
        store: &'a ContentStore,
        profile: &'a ProfileSettings,
        metrics: &'a RenderMetrics,
        locale: Locale,
        policy: ContentPolicy,
    ) -> Self {
        Self {
            store,
            profile,
            metrics,
            selector: LocaleSelector::new(locale),
            path: Route::Home.path().to_string(),
            policy,
            tracker: ViewportTracker::new(),
            cache: None,
            marks_dirty: false,
        }
    }

    /// Current path without a locale prefix. The locale is [`Session::locale`].
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn locale(&self) -> Locale {
        self.selector.current_locale()
    }

    pub fn route(&self) -> Option<Route> {
        Route::from_path(&self.path)
    }

    /// Move to another path. A locale prefix in the path selects that locale.
    ///
    /// Entrance latches belong to the page they were observed on, so they are
    /// reset when the canonical path changes.
    pub fn navigate(&mut self, path: &str) -> ContentResult<()> {
        if let Some(locale) = parse_location(path).locale {
            self.selector.set_locale(locale.code())?;
        }

        let path = canonical_path(path);
        if path != self.path {
            info!("Navigating from {} to {}", self.path, path);
            self.path = path;
            self.tracker = ViewportTracker::new();
        }

        Ok(())
    }

    /// Switch the active locale. The path and the entrance latches are kept.
    pub fn set_locale(&mut self, code: &str) -> ContentResult<LocaleChange> {
        self.selector.set_locale(code)
    }

    /// Feed a visibility observation for an animated element.
    pub fn report_visibility(&mut self, id: &str, visible_ratio: f32) -> bool {
        let fired = self.tracker.report_visibility(id, visible_ratio);
        if fired {
            self.marks_dirty = true;
        }
        fired
    }

    pub fn tracker(&self) -> &ViewportTracker {
        &self.tracker
    }

    /// Current document.
    ///
    /// A locale or path change renders a new page and counts it in the
    /// metrics. An entrance that fired since the last call only rewrites the
    /// cached html so played elements show their rest state.
    pub fn render(&mut self) -> ContentResult<&str> {
        let generation = self.selector.generation();
        let route = self.route();
        let stale = self
            .cache
            .as_ref()
            .map_or(true, |view| view.generation != generation || view.path != self.path);

        if stale {
            debug!("Rendering {} (generation {})", self.path, generation);
            let ctx = RenderContext::new(
                self.store,
                self.selector.current_locale(),
                self.policy,
                self.profile,
                self.metrics,
            )
            .with_entered(&self.tracker);
            let page = render_page(route, &ctx)?;
            drop(ctx);

            self.tracker.sync(&page.animations);
            self.marks_dirty = false;
            self.cache = Some(RenderedView {
                generation,
                path: self.path.clone(),
                html: page.html,
            });
        } else if self.marks_dirty {
            let ctx = RenderContext::new(
                self.store,
                self.selector.current_locale(),
                self.policy,
                self.profile,
                self.metrics,
            )
            .with_entered(&self.tracker);
            let page = build_page(route, &ctx)?;
            if let Some(view) = self.cache.as_mut() {
                view.html = page.html;
            }
            self.marks_dirty = false;
        }

        Ok(self.cache.as_ref().map_or("", |view| view.html.as_str()))
    }
}
