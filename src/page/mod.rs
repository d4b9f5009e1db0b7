//! Page composition.
//!
//! The composer resolves each section's content once per render and hands
//! the typed result to the presentation components. Sections resolve
//! independently: under [`ContentPolicy::Lenient`] one section's content error
//! blanks only that section.

mod home;
mod info;
mod layout;

pub use home::{compose_home, stagger, STAT_FIGURES};
pub use info::{compose_about, compose_not_found, compose_volunteer};
pub(crate) use layout::build_page;
pub use layout::{render_document, render_page, RenderedPage};

pub use crate::error::ContentPolicy;

use crate::content::ContentStore;
use crate::error::ContentResult;
use crate::i18n::Locale;
use crate::metrics::{PageTally, RenderMetrics};
use crate::render::{AnimatedElement, AnimationSpec, Motion, ViewportTracker};
use leptos::prelude::*;
use std::cell::RefCell;
use tracing::warn;

/// Researcher portrait settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSettings {
    pub image_url: String,
    /// Name the fallback avatar is generated from
    pub fallback_name: String,
    pub avatar_service: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            image_url: "https://chawin.hansasuta.com/assets/Chawin_image-og7OhW3Z.svg".to_string(),
            fallback_name: "Chawin H".to_string(),
            avatar_service: "https://ui-avatars.com/api/".to_string(),
        }
    }
}

/// What the page being rendered has run into so far.
#[derive(Debug, Default)]
struct PageState {
    tally: PageTally,
    animations: Vec<AnimatedElement>,
}

/// Everything a render pass reads, plus the tally of the page in progress.
#[derive(Debug)]
pub struct RenderContext<'a> {
    pub store: &'a ContentStore,
    pub locale: Locale,
    pub policy: ContentPolicy,
    pub profile: &'a ProfileSettings,
    pub metrics: &'a RenderMetrics,
    /// Entrance latches of the page when rendering for a live session
    entered: Option<&'a ViewportTracker>,
    page: RefCell<PageState>,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        store: &'a ContentStore,
        locale: Locale,
        policy: ContentPolicy,
        profile: &'a ProfileSettings,
        metrics: &'a RenderMetrics,
    ) -> Self {
        Self {
            store,
            locale,
            policy,
            profile,
            metrics,
            entered: None,
            page: RefCell::new(PageState::default()),
        }
    }

    /// Render elements whose entrance already played in their rest state.
    pub fn with_entered(mut self, tracker: &'a ViewportTracker) -> Self {
        self.entered = Some(tracker);
        self
    }

    /// Build one section, applying the content policy to its errors.
    pub fn section<F>(&self, name: &'static str, build: F) -> ContentResult<AnyView>
    where
        F: FnOnce(&RenderContext<'a>) -> ContentResult<AnyView>,
    {
        match build(self) {
            Ok(view) => Ok(view),
            Err(e) => {
                self.page.borrow_mut().tally.content_errors += 1;
                match self.policy {
                    ContentPolicy::Strict => Err(e),
                    ContentPolicy::Lenient => {
                        warn!("Section '{}' blanked for locale {}: {}", name, self.locale, e);
                        Ok(blank_section(name))
                    }
                }
            }
        }
    }

    /// Resolve a value the page frame needs, applying the content policy.
    pub(crate) fn soft<T: Default>(&self, what: &str, result: ContentResult<T>) -> ContentResult<T> {
        match result {
            Ok(value) => Ok(value),
            Err(e) => {
                self.page.borrow_mut().tally.content_errors += 1;
                match self.policy {
                    ContentPolicy::Strict => Err(e),
                    ContentPolicy::Lenient => {
                        warn!("{} left blank for locale {}: {}", what, self.locale, e);
                        Ok(T::default())
                    }
                }
            }
        }
    }

    /// Motion of an animated element, registered with the page in progress.
    ///
    /// Ids only need to be unique within a page and stable across locales.
    pub fn animate(&self, id: impl Into<String>, spec: AnimationSpec) -> Motion {
        let id = id.into();
        let entered = self.entered.is_some_and(|tracker| tracker.has_entered(&id));
        let motion = Motion::new(id, spec).entered(entered);
        self.page.borrow_mut().animations.push(AnimatedElement::from(&motion));
        motion
    }

    pub fn note_cosmetic_fallback(&self) {
        self.page.borrow_mut().tally.cosmetic_fallbacks += 1;
    }

    /// Start a fresh page tally. A context may render several pages in turn.
    pub(crate) fn begin_page(&self) {
        self.page.replace(PageState::default());
    }

    pub(crate) fn finish_page(&self) -> (PageTally, Vec<AnimatedElement>) {
        let state = self.page.take();
        (state.tally, state.animations)
    }
}

fn blank_section(name: &'static str) -> AnyView {
    view! { <div data-section=name data-content-error="true"></div> }.into_any()
}
