//! Entrance animations and their one-shot trigger state.
//!
//! An [`AnimationSpec`] only describes a transition; the browser script plays
//! it from the `data-*` attributes a [`Motion`] renders. Whether an element
//! has already entered the viewport is tracked by an explicit [`EntryLatch`]
//! so the "play once" rule can be tested without a real viewport.

use crate::render::{format_number, format_percent};
use tracing::debug;

/// Visible share of an element above which it counts as entered.
pub const VISIBILITY_THRESHOLD: f32 = 0.0;

/// What starts the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Plays as soon as the element is mounted
    Mount,
    /// Plays the first time the element scrolls into view
    EnterView,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::Mount => "mount",
            Trigger::EnterView => "enter-view",
        }
    }
}

/// Visual properties at one end of a transition. Unset fields are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualState {
    pub opacity: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub width_percent: Option<f64>,
}

impl VisualState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn width_percent(mut self, width: f64) -> Self {
        self.width_percent = Some(width);
        self
    }

    /// Compact `key:value;key:value` form used in data attributes.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(v) = self.opacity {
            parts.push(format!("opacity:{}", format_number(v)));
        }
        if let Some(v) = self.x {
            parts.push(format!("x:{}", format_number(v)));
        }
        if let Some(v) = self.y {
            parts.push(format!("y:{}", format_number(v)));
        }
        if let Some(v) = self.scale {
            parts.push(format!("scale:{}", format_number(v)));
        }
        if let Some(v) = self.width_percent {
            parts.push(format!("width:{}", format_percent(v)));
        }
        parts.join(";")
    }
}

/// One-shot visual transition for an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub initial: VisualState,
    pub rest: VisualState,
    pub trigger: Trigger,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl AnimationSpec {
    pub fn new(
        initial: VisualState,
        rest: VisualState,
        trigger: Trigger,
        delay_ms: u32,
        duration_ms: u32,
    ) -> Self {
        Self {
            initial,
            rest,
            trigger,
            delay_ms,
            duration_ms,
        }
    }

    /// Fade in while rising `rise` pixels into place.
    pub fn fade_up(rise: f64, trigger: Trigger, delay_ms: u32, duration_ms: u32) -> Self {
        Self::new(
            VisualState::new().opacity(0.0).y(rise),
            VisualState::new().opacity(1.0).y(0.0),
            trigger,
            delay_ms,
            duration_ms,
        )
    }
}

/// An animated element as rendered: its page-unique id, its transition and
/// whether its entrance already played.
///
/// Components render a `Motion` as `data-*` attributes on their root element.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    pub id: String,
    pub spec: AnimationSpec,
    pub entered: bool,
}

impl Motion {
    pub fn new(id: impl Into<String>, spec: AnimationSpec) -> Self {
        Self {
            id: id.into(),
            spec,
            entered: false,
        }
    }

    pub fn entered(mut self, entered: bool) -> Self {
        self.entered = entered;
        self
    }

    pub fn trigger_attr(&self) -> &'static str {
        self.spec.trigger.as_str()
    }

    pub fn delay_attr(&self) -> String {
        self.spec.delay_ms.to_string()
    }

    pub fn duration_attr(&self) -> String {
        self.spec.duration_ms.to_string()
    }

    pub fn initial_attr(&self) -> String {
        self.spec.initial.describe()
    }

    pub fn rest_attr(&self) -> String {
        self.spec.rest.describe()
    }

    pub fn id_attr(&self) -> String {
        self.id.clone()
    }

    /// `data-entered="true"` once played; absent before.
    pub fn entered_attr(&self) -> Option<&'static str> {
        self.entered.then_some("true")
    }
}

/// Id and trigger of an animated element, collected while a page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatedElement {
    pub id: String,
    pub trigger: Trigger,
}

impl From<&Motion> for AnimatedElement {
    fn from(motion: &Motion) -> Self {
        Self {
            id: motion.id.clone(),
            trigger: motion.spec.trigger,
        }
    }
}

/// "Has this element entered the view" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryLatch {
    entered: bool,
}

impl EntryLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one visibility observation.
    ///
    /// Returns `true` only for the first visible observation; the latch never
    /// resets, so the animation never replays.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.entered {
            self.entered = true;
            return true;
        }
        false
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }
}

/// Entry latches for every scroll-triggered element of a rendered page.
#[derive(Debug, Clone, Default)]
pub struct ViewportTracker {
    /// (animation id, latch) in document order
    latches: Vec<(String, EntryLatch)>,
}

impl ViewportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track every `EnterView` element of a rendered page.
    pub fn from_elements(elements: &[AnimatedElement]) -> Self {
        let mut tracker = Self::new();
        tracker.sync(elements);
        tracker
    }

    /// Re-collect tracked elements after a re-render.
    ///
    /// Latches of elements still present keep their state, so a locale switch
    /// does not replay entrance animations that already played.
    pub fn sync(&mut self, elements: &[AnimatedElement]) {
        let previous = std::mem::take(&mut self.latches);

        self.latches = elements
            .iter()
            .filter(|element| element.trigger == Trigger::EnterView)
            .map(|element| {
                let latch = previous
                    .iter()
                    .find(|(existing, _)| *existing == element.id)
                    .map(|(_, latch)| *latch)
                    .unwrap_or_default();
                (element.id.clone(), latch)
            })
            .collect();
    }

    /// Record how much of an element is visible (0.0 – 1.0).
    ///
    /// Returns `true` when this observation triggers the element's entrance.
    /// Unknown ids never trigger.
    pub fn report_visibility(&mut self, id: &str, visible_ratio: f32) -> bool {
        let Some((_, latch)) = self.latches.iter_mut().find(|(existing, _)| existing == id) else {
            return false;
        };

        let fired = latch.observe(visible_ratio > VISIBILITY_THRESHOLD);
        if fired {
            debug!("Element {} entered view", id);
        }
        fired
    }

    pub fn has_entered(&self, id: &str) -> bool {
        self.latches
            .iter()
            .any(|(existing, latch)| existing == id && latch.has_entered())
    }

    /// Ids that have not entered the view yet, in document order.
    pub fn pending(&self) -> Vec<&str> {
        self.latches
            .iter()
            .filter(|(_, latch)| !latch.has_entered())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.latches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latches.is_empty()
    }
}
