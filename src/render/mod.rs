//! View rendering: leptos presentation components and animation state.

mod animation;
mod components;
mod image;
mod markup;

#[cfg(test)]
pub(crate) mod inspect;

pub use animation::{
    AnimatedElement, AnimationSpec, EntryLatch, Motion, Trigger, ViewportTracker, VisualState,
    VISIBILITY_THRESHOLD,
};
pub use components::{
    fill_width_percent, format_number, format_percent, hero_badge_entrance, insight_card_entrance,
    insight_class, performance_bar_entrance, performance_fill_entrance, stat_card_entrance,
    status_badge_class, HeroBadge, Icon, IconGlyph, InsightCallout, PerformanceBar, StatCard,
    TechPill, REFERENCE_SCALE,
};
pub use image::{fallback_avatar_url, ImageSource, ProfileImage};
pub use markup::{parse_rich_text, RichSegment, RichText};
