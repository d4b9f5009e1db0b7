//! Presentation components.
//!
//! Each component takes already-resolved content and renders markup.
//! Components never fail: missing optional values render as empty slots and
//! unknown styling inputs fall back to a neutral default.

use crate::content::{InsightCard, InsightColor, Metric, MetricStatus};
use crate::render::{AnimationSpec, Motion, Trigger, VisualState};
use leptos::prelude::*;

/// Score at which a performance bar is completely filled.
pub const REFERENCE_SCALE: f64 = 3.0;

const BADGE_POSITIVE: &str = "bg-green-100 text-green-700 ring-1 ring-green-600/20";
const BADGE_NEGATIVE: &str = "bg-red-50 text-red-600 ring-1 ring-red-600/20";
const BADGE_NEUTRAL: &str = "bg-slate-100 text-slate-600";

const INSIGHT_BLUE: &str = "border-l-sky-500 bg-sky-50/50";
const INSIGHT_RED: &str = "border-l-rose-500 bg-rose-50/50";
const INSIGHT_AMBER: &str = "border-l-amber-500 bg-amber-50/50";
const INSIGHT_DEFAULT: &str = "border-l-slate-400 bg-slate-50/50";

/// Outline icons used on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Beaker,
    ChartBar,
    CheckBadge,
    CodeBracket,
    ShieldCheck,
    UserGroup,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::ArrowRight => "arrow-right",
            Icon::Beaker => "beaker",
            Icon::ChartBar => "chart-bar",
            Icon::CheckBadge => "check-badge",
            Icon::CodeBracket => "code-bracket",
            Icon::ShieldCheck => "shield-check",
            Icon::UserGroup => "user-group",
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon, extra: &'static str) -> impl IntoView {
    view! { <span class=format!("icon icon-{} {}", icon.name(), extra) aria-hidden="true"></span> }
}

/// Round to two decimals and drop trailing zeros (`95.666…` → `95.67`, `80.0` → `80`).
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}

/// Filled share of a performance bar, in percent.
///
/// `score / REFERENCE_SCALE * 100`, clamped to `0..=100`: scores at or above
/// the reference scale saturate at exactly 100 and never overflow the track.
pub fn fill_width_percent(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    (score / REFERENCE_SCALE * 100.0).clamp(0.0, 100.0)
}

pub fn status_badge_class(status: MetricStatus) -> &'static str {
    match status {
        MetricStatus::Winner => BADGE_POSITIVE,
        MetricStatus::Failed => BADGE_NEGATIVE,
        MetricStatus::Neutral => BADGE_NEUTRAL,
    }
}

fn status_key(status: MetricStatus) -> &'static str {
    match status {
        MetricStatus::Winner => "winner",
        MetricStatus::Failed => "failed",
        MetricStatus::Neutral => "neutral",
    }
}

pub fn insight_class(color: Option<InsightColor>) -> &'static str {
    match color {
        Some(InsightColor::Blue) => INSIGHT_BLUE,
        Some(InsightColor::Red) => INSIGHT_RED,
        Some(InsightColor::Amber) => INSIGHT_AMBER,
        None => INSIGHT_DEFAULT,
    }
}

fn insight_key(color: Option<InsightColor>) -> &'static str {
    match color {
        Some(InsightColor::Blue) => "blue",
        Some(InsightColor::Red) => "red",
        Some(InsightColor::Amber) => "amber",
        None => "default",
    }
}

// ==================== Hero ====================

pub fn hero_badge_entrance() -> AnimationSpec {
    AnimationSpec::fade_up(-10.0, Trigger::Mount, 0, 300)
}

#[component]
pub fn HeroBadge(text: String, motion: Motion) -> impl IntoView {
    view! {
        <div
            class="inline-flex items-center rounded-full border border-sky-200 bg-sky-50 px-3 py-1 text-sm font-medium text-sky-800 mb-6"
            data-component="hero-badge"
            data-animate=motion.trigger_attr()
            data-delay-ms=motion.delay_attr()
            data-duration-ms=motion.duration_attr()
            data-initial=motion.initial_attr()
            data-rest=motion.rest_attr()
            data-anim-id=motion.id_attr()
            data-entered=motion.entered_attr()
        >
            <IconGlyph icon=Icon::CheckBadge extra="mr-1.5 h-4 w-4 text-sky-600"/>
            {text}
        </div>
    }
}

// ==================== Stat Card ====================

pub fn stat_card_entrance(delay_ms: u32) -> AnimationSpec {
    AnimationSpec::fade_up(20.0, Trigger::EnterView, delay_ms, 500)
}

/// A headline statistic: icon, value and label.
#[component]
pub fn StatCard(
    label: Option<String>,
    value: Option<String>,
    icon: Icon,
    motion: Motion,
) -> impl IntoView {
    view! {
        <div
            class="flex flex-col items-center justify-center p-6 bg-white rounded-2xl shadow-sm border border-slate-100 hover:shadow-md transition-shadow"
            data-component="stat-card"
            data-animate=motion.trigger_attr()
            data-delay-ms=motion.delay_attr()
            data-duration-ms=motion.duration_attr()
            data-initial=motion.initial_attr()
            data-rest=motion.rest_attr()
            data-anim-id=motion.id_attr()
            data-entered=motion.entered_attr()
        >
            <div class="p-3 bg-indigo-50 rounded-full mb-3">
                <IconGlyph icon=icon extra="h-6 w-6 text-indigo-600"/>
            </div>
            <dt class="text-3xl font-bold text-slate-900" data-role="value">
                {value.unwrap_or_default()}
            </dt>
            <dd class="text-sm font-medium text-slate-500 uppercase tracking-wide mt-1" data-role="label">
                {label.unwrap_or_default()}
            </dd>
        </div>
    }
}

// ==================== Performance Bar ====================

pub fn performance_bar_entrance(delay_ms: u32) -> AnimationSpec {
    AnimationSpec::new(
        VisualState::new().opacity(0.0).x(-20.0),
        VisualState::new().opacity(1.0).x(0.0),
        Trigger::EnterView,
        delay_ms,
        500,
    )
}

/// The fill grows from empty once its bar has started entering.
pub fn performance_fill_entrance(delay_ms: u32, score: f64) -> AnimationSpec {
    AnimationSpec::new(
        VisualState::new().width_percent(0.0),
        VisualState::new().width_percent(fill_width_percent(score)),
        Trigger::EnterView,
        delay_ms.saturating_add(200),
        1000,
    )
}

/// A labelled progress bar against the reference scale, with a status badge.
///
/// The score and peak labels show the content values as written; only the
/// fill width is derived and rounded.
#[component]
pub fn PerformanceBar(
    metric: Metric,
    score_label: String,
    peak_label: String,
    motion: Motion,
    fill_motion: Motion,
) -> impl IntoView {
    let width = format_percent(fill_width_percent(metric.score));
    let badge_class = format!(
        "text-xs px-2 py-0.5 rounded-full font-medium {}",
        status_badge_class(metric.status)
    );

    view! {
        <div
            class="mb-6 last:mb-0"
            data-component="performance-bar"
            data-status=status_key(metric.status)
            data-fill=width.clone()
            data-animate=motion.trigger_attr()
            data-delay-ms=motion.delay_attr()
            data-duration-ms=motion.duration_attr()
            data-initial=motion.initial_attr()
            data-rest=motion.rest_attr()
            data-anim-id=motion.id_attr()
            data-entered=motion.entered_attr()
        >
            <div class="flex justify-between items-center mb-2">
                <span class="font-semibold text-slate-700" data-role="name">{metric.name}</span>
                <span class=badge_class data-role="status">{metric.status_label}</span>
            </div>
            <div class="w-full bg-slate-100 rounded-full h-3 mb-1 overflow-hidden">
                <div
                    class="bg-indigo-600 h-3 rounded-full"
                    data-role="fill"
                    style=format!("width: {}", width)
                    data-animate=fill_motion.trigger_attr()
                    data-delay-ms=fill_motion.delay_attr()
                    data-duration-ms=fill_motion.duration_attr()
                    data-initial=fill_motion.initial_attr()
                    data-rest=fill_motion.rest_attr()
                    data-anim-id=fill_motion.id_attr()
                    data-entered=fill_motion.entered_attr()
                ></div>
            </div>
            <div class="flex justify-between text-xs text-slate-500">
                <span data-role="score">{format!("{}: {}%", score_label, metric.score)}</span>
                <span data-role="peak">{format!("{}: {}%", peak_label, metric.peak)}</span>
            </div>
        </div>
    }
}

// ==================== Insight Card ====================

pub fn insight_card_entrance(delay_ms: u32) -> AnimationSpec {
    AnimationSpec::new(
        VisualState::new().opacity(0.0).scale(0.95),
        VisualState::new().opacity(1.0).scale(1.0),
        Trigger::EnterView,
        delay_ms,
        400,
    )
}

/// A titled callout with a coloured accent border.
#[component]
pub fn InsightCallout(card: InsightCard, motion: Motion) -> impl IntoView {
    let class = format!(
        "p-6 rounded-r-xl border-l-4 shadow-sm hover:shadow-md transition-all {}",
        insight_class(card.color)
    );

    view! {
        <div
            class=class
            data-component="insight-card"
            data-color=insight_key(card.color)
            data-animate=motion.trigger_attr()
            data-delay-ms=motion.delay_attr()
            data-duration-ms=motion.duration_attr()
            data-initial=motion.initial_attr()
            data-rest=motion.rest_attr()
            data-anim-id=motion.id_attr()
            data-entered=motion.entered_attr()
        >
            <h3 class="text-lg font-bold text-slate-800 mb-2">{card.title}</h3>
            <p class="text-slate-600 leading-relaxed text-sm">{card.content}</p>
        </div>
    }
}

// ==================== Tech Stack ====================

#[component]
pub fn TechPill(name: String) -> impl IntoView {
    view! {
        <span
            class="px-4 py-2 rounded-full bg-slate-800 border border-slate-700 text-sm font-mono text-indigo-200"
            data-component="tech-pill"
        >
            {name}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::inspect::{select_first, Tag};
    use proptest::prelude::*;

    fn metric(score: f64, status_label: &str) -> Metric {
        Metric {
            name: "Gradient Boosting".to_string(),
            score,
            peak: 8.26,
            status: MetricStatus::from_label(status_label),
            status_label: status_label.to_string(),
        }
    }

    fn bar(metric: Metric, delay_ms: u32) -> String {
        let score = metric.score;
        view! {
            <PerformanceBar
                metric=metric
                score_label="Avg F0.5".to_string()
                peak_label="Peak".to_string()
                motion=Motion::new("bar-0", performance_bar_entrance(delay_ms))
                fill_motion=Motion::new("bar-fill-0", performance_fill_entrance(delay_ms, score))
            />
        }
        .to_html()
    }

    fn role(html: &str, role: &str) -> Tag {
        select_first(html, "data-role", role).unwrap()
    }

    fn root(html: &str, component: &str) -> Tag {
        select_first(html, "data-component", component).unwrap()
    }

    // ==================== Number Formatting Tests ====================

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(80.0), "80");
        assert_eq!(format_number(95.666666), "95.67");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-20.0), "-20");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.001), "0");
    }

    // ==================== Fill Width Tests ====================

    #[test]
    fn test_fill_width_examples() {
        assert_eq!(fill_width_percent(0.0), 0.0);
        assert_eq!(fill_width_percent(1.5), 50.0);
        assert_eq!(fill_width_percent(3.0), 100.0);
        assert_eq!(fill_width_percent(4.2), 100.0);
    }

    #[test]
    fn test_fill_width_degenerate_inputs() {
        assert_eq!(fill_width_percent(-1.0), 0.0);
        assert_eq!(fill_width_percent(f64::NAN), 0.0);
        assert_eq!(fill_width_percent(f64::INFINITY), 100.0);
    }

    proptest! {
        #[test]
        fn test_fill_width_saturates_at_scale(score in 3.0f64..1.0e6) {
            prop_assert_eq!(fill_width_percent(score), 100.0);
        }

        #[test]
        fn test_fill_width_matches_formula_below_scale(score in 0.0f64..3.0) {
            let expected = score / 3.0 * 100.0;
            prop_assert!((fill_width_percent(score) - expected).abs() < 1e-9);
            prop_assert!(fill_width_percent(score) <= 100.0);
        }

        #[test]
        fn test_fill_width_is_monotone(a in 0.0f64..10.0, b in 0.0f64..10.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(fill_width_percent(lo) <= fill_width_percent(hi));
        }
    }

    // ==================== Status Badge Tests ====================

    #[test]
    fn test_winner_badge_is_locale_insensitive() {
        let en = bar(metric(2.0, "Winner"), 0);
        let th = bar(metric(2.0, "ชนะเลิศ"), 0);

        let en_badge = role(&en, "status");
        let th_badge = role(&th, "status");
        assert_eq!(en_badge.classes(), th_badge.classes());
        assert!(en_badge.has_class("bg-green-100"));
    }

    #[test]
    fn test_failed_badge_is_locale_insensitive() {
        let en = bar(metric(0.5, "Failed"), 0);
        let th = bar(metric(0.5, "ล้มเหลว"), 0);

        assert_eq!(role(&en, "status").classes(), role(&th, "status").classes());
        assert_eq!(root(&en, "performance-bar").attr("data-status"), Some("failed"));
    }

    #[test]
    fn test_unknown_status_renders_neutral() {
        let html = bar(metric(1.0, "Pending"), 0);
        let badge = role(&html, "status");

        assert!(badge.has_class("bg-slate-100"));
        assert_eq!(badge.text(), "Pending");
    }

    // ==================== Performance Bar Tests ====================

    #[test]
    fn test_performance_bar_fill_and_labels() {
        let html = bar(metric(2.4, "Winner"), 100);
        let bar_root = root(&html, "performance-bar");

        assert_eq!(bar_root.attr("data-fill"), Some("80%"));
        assert_eq!(bar_root.delay_ms(), Some(100));

        let fill = role(&html, "fill");
        assert_eq!(fill.attr("style"), Some("width: 80%"));
        assert_eq!(fill.delay_ms(), Some(300));
        assert_eq!(fill.attr("data-duration-ms"), Some("1000"));
        assert_eq!(fill.attr("data-rest"), Some("width:80%"));

        assert_eq!(role(&html, "score").text(), "Avg F0.5: 2.4%");
        assert_eq!(role(&html, "peak").text(), "Peak: 8.26%");
    }

    #[test]
    fn test_performance_bar_labels_keep_content_precision() {
        let mut precise = metric(2.875, "Winner");
        precise.peak = 8.264;
        let html = bar(precise, 0);

        assert_eq!(role(&html, "score").text(), "Avg F0.5: 2.875%");
        assert_eq!(role(&html, "peak").text(), "Peak: 8.264%");
        assert_eq!(root(&html, "performance-bar").attr("data-fill"), Some("95.83%"));
    }

    #[test]
    fn test_performance_bar_saturates() {
        let html = bar(metric(7.5, "Winner"), 0);
        assert_eq!(root(&html, "performance-bar").attr("data-fill"), Some("100%"));
    }

    // ==================== Insight Card Tests ====================

    fn card(color: &str) -> String {
        let card = InsightCard {
            title: "Bigger models overfit".to_string(),
            content: "Noise was memorised.".to_string(),
            color: InsightColor::from_name(color),
            color_name: color.to_string(),
        };
        view! { <InsightCallout card=card motion=Motion::new("insight-0", insight_card_entrance(200))/> }
            .to_html()
    }

    #[test]
    fn test_insight_card_known_color() {
        let html = card("red");
        let card = root(&html, "insight-card");
        assert!(card.has_class("border-l-rose-500"));
        assert_eq!(card.attr("data-color"), Some("red"));
    }

    #[test]
    fn test_insight_card_unknown_color_uses_default() {
        let html = card("purple");
        let card = root(&html, "insight-card");

        assert!(card.has_class("border-l-slate-400"));
        assert_eq!(card.attr("data-color"), Some("default"));
        assert_eq!(card.delay_ms(), Some(200));
    }

    // ==================== Stat Card Tests ====================

    #[test]
    fn test_stat_card_renders_value_and_label() {
        let html = view! {
            <StatCard
                label=Some("Models".to_string())
                value=Some("7".to_string())
                icon=Icon::Beaker
                motion=Motion::new("stat-0", stat_card_entrance(500))
            />
        }
        .to_html();

        assert_eq!(role(&html, "value").text(), "7");
        assert_eq!(role(&html, "label").text(), "Models");
        assert!(html.contains("icon-beaker"));
        assert_eq!(root(&html, "stat-card").attr("data-anim-id"), Some("stat-0"));
    }

    #[test]
    fn test_stat_card_missing_values_render_empty_slots() {
        let html = view! {
            <StatCard
                label=None
                value=None
                icon=Icon::UserGroup
                motion=Motion::new("stat-1", stat_card_entrance(600))
            />
        }
        .to_html();

        assert_eq!(role(&html, "value").text(), "");
        assert_eq!(role(&html, "label").text(), "");
    }

    #[test]
    fn test_entered_motion_is_marked() {
        let html = view! {
            <StatCard
                label=None
                value=None
                icon=Icon::Beaker
                motion=Motion::new("stat-0", stat_card_entrance(500)).entered(true)
            />
        }
        .to_html();

        assert_eq!(root(&html, "stat-card").attr("data-entered"), Some("true"));
    }

    // ==================== Misc Tests ====================

    #[test]
    fn test_hero_badge_mounts() {
        let html = view! {
            <HeroBadge
                text="Study complete".to_string()
                motion=Motion::new("hero-badge", hero_badge_entrance())
            />
        }
        .to_html();

        let badge = root(&html, "hero-badge");
        assert_eq!(badge.attr("data-animate"), Some("mount"));
        assert!(badge.text().contains("Study complete"));
    }

    #[test]
    fn test_tech_pill_escapes_text() {
        let html = view! { <TechPill name="C++ & <Rust>".to_string()/> }.to_html();
        assert!(html.contains("C++ &amp; &lt;Rust&gt;"));
    }
}
