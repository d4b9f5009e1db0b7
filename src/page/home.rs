//! Home page: hero, stats grid, performance and insights, tech stack,
//! researcher bio.

use crate::content::{
    HeroContent, InsightsContent, PerformanceContent, ResearcherContent, StatsContent,
    TechStackContent,
};
use crate::error::ContentResult;
use crate::page::RenderContext;
use crate::render::{
    hero_badge_entrance, insight_card_entrance, performance_bar_entrance,
    performance_fill_entrance, stat_card_entrance, AnimationSpec, HeroBadge, Icon, IconGlyph,
    InsightCallout, PerformanceBar, ProfileImage, RichText, StatCard, TechPill, Trigger,
};
use crate::router::{href, Route};
use leptos::prelude::*;
use tracing::debug;

/// Headline figures shown in the stats grid, in display order.
pub const STAT_FIGURES: [(&str, Icon); 4] = [
    ("7", Icon::Beaker),
    ("5", Icon::UserGroup),
    ("8.26%", Icon::ChartBar),
    ("17", Icon::ShieldCheck),
];

const STAT_BASE_DELAY_MS: u32 = 500;
const BAR_BASE_DELAY_MS: u32 = 0;
const INSIGHT_BASE_DELAY_MS: u32 = 200;
const STAGGER_STEP_MS: u32 = 100;

/// Entrance delay of the `idx`-th item of a list: `base + 100 * idx`.
pub fn stagger(base_ms: u32, idx: usize) -> u32 {
    let step = u32::try_from(idx).unwrap_or(u32::MAX).saturating_mul(STAGGER_STEP_MS);
    base_ms.saturating_add(step)
}

fn fade_in(delay_ms: u32, trigger: Trigger) -> AnimationSpec {
    AnimationSpec::fade_up(20.0, trigger, delay_ms, 600)
}

/// Compose the home page body. Each section resolves its own content.
pub fn compose_home(ctx: &RenderContext<'_>) -> ContentResult<AnyView> {
    debug!("Composing home page for locale {}", ctx.locale);

    let hero = ctx.section("hero", hero_section)?;
    let stats = ctx.section("stats", stats_section)?;
    let performance = ctx.section("performance", performance_section)?;
    let insights = ctx.section("insights", insights_section)?;
    let tech_stack = ctx.section("tech-stack", tech_stack_section)?;
    let researcher = ctx.section("researcher", researcher_section)?;

    Ok(view! {
        <div data-page="home">
            {hero}
            {stats}
            <section class="py-20 bg-white/60" id="performance">
                <div class="max-w-7xl mx-auto px-4 grid lg:grid-cols-2 gap-12">
                    {performance}
                    {insights}
                </div>
            </section>
            {tech_stack}
            {researcher}
        </div>
    }
    .into_any())
}

fn hero_section(ctx: &RenderContext<'_>) -> ContentResult<AnyView> {
    let hero = HeroContent::resolve(ctx.store, ctx.locale)?;
    let badge = ctx.animate("hero-badge", hero_badge_entrance());
    let title = ctx.animate("hero-title", fade_in(0, Trigger::Mount));
    let subtitle = ctx.animate("hero-subtitle", fade_in(200, Trigger::Mount));
    let actions = ctx.animate("hero-actions", fade_in(400, Trigger::Mount));

    Ok(view! {
        <section class="relative pt-32 pb-20 text-center px-4" data-section="hero">
            <HeroBadge text=hero.badge motion=badge/>
            <h1
                class="text-4xl md:text-6xl font-extrabold tracking-tight text-slate-900 mb-6"
                data-animate=title.trigger_attr()
                data-delay-ms=title.delay_attr()
                data-duration-ms=title.duration_attr()
                data-initial=title.initial_attr()
                data-rest=title.rest_attr()
                data-anim-id=title.id_attr()
                data-entered=title.entered_attr()
            >
                {hero.title}
            </h1>
            <p
                class="max-w-2xl mx-auto text-lg text-slate-600 mb-10"
                data-animate=subtitle.trigger_attr()
                data-delay-ms=subtitle.delay_attr()
                data-duration-ms=subtitle.duration_attr()
                data-initial=subtitle.initial_attr()
                data-rest=subtitle.rest_attr()
                data-anim-id=subtitle.id_attr()
                data-entered=subtitle.entered_attr()
            >
                {hero.subtitle}
            </p>
            <div
                class="flex flex-col sm:flex-row gap-4 justify-center"
                data-animate=actions.trigger_attr()
                data-delay-ms=actions.delay_attr()
                data-duration-ms=actions.duration_attr()
                data-initial=actions.initial_attr()
                data-rest=actions.rest_attr()
                data-anim-id=actions.id_attr()
                data-entered=actions.entered_attr()
            >
                <a
                    class="px-8 py-3 rounded-full bg-indigo-600 text-white font-semibold shadow-lg"
                    href="#performance"
                    data-role="cta-primary"
                >
                    {hero.cta_primary}
                </a>
                <a
                    class="px-8 py-3 rounded-full bg-white text-slate-700 font-semibold border border-slate-200 inline-flex items-center"
                    href=href(Route::AboutStudy, ctx.locale)
                    data-role="cta-secondary"
                >
                    {hero.cta_secondary}
                    <IconGlyph icon=Icon::ArrowRight extra="ml-2 h-4 w-4"/>
                </a>
            </div>
        </section>
    }
    .into_any())
}

fn stats_section(ctx: &RenderContext<'_>) -> ContentResult<AnyView> {
    let stats = StatsContent::resolve(ctx.store, ctx.locale)?;
    let labels = [stats.models, stats.volunteers, stats.accuracy, stats.duration];

    let cards = STAT_FIGURES
        .into_iter()
        .zip(labels)
        .enumerate()
        .map(|(idx, ((value, icon), label))| {
            let motion = ctx.animate(
                format!("stat-{}", idx),
                stat_card_entrance(stagger(STAT_BASE_DELAY_MS, idx)),
            );
            view! {
                <StatCard label=Some(label) value=Some(value.to_string()) icon=icon motion=motion/>
            }
        })
        .collect_view();

    Ok(view! {
        <section class="py-10 px-4" data-section="stats">
            <dl class="max-w-5xl mx-auto grid grid-cols-2 md:grid-cols-4 gap-6">{cards}</dl>
        </section>
    }
    .into_any())
}

fn performance_section(ctx: &RenderContext<'_>) -> ContentResult<AnyView> {
    let PerformanceContent {
        title,
        description,
        subtitle,
        note,
        score_label,
        peak_label,
        metrics,
    } = PerformanceContent::resolve(ctx.store, ctx.locale)?;

    let bars = metrics
        .into_iter()
        .enumerate()
        .map(|(idx, metric)| {
            let delay_ms = stagger(BAR_BASE_DELAY_MS, idx);
            let motion = ctx.animate(format!("bar-{}", idx), performance_bar_entrance(delay_ms));
            let fill_motion = ctx.animate(
                format!("bar-fill-{}", idx),
                performance_fill_entrance(delay_ms, metric.score),
            );
            view! {
                <PerformanceBar
                    metric=metric
                    score_label=score_label.clone()
                    peak_label=peak_label.clone()
                    motion=motion
                    fill_motion=fill_motion
                />
            }
        })
        .collect_view();

    Ok(view! {
        <div data-section="performance">
            <h2 class="text-3xl font-bold text-slate-900 mb-2">{title}</h2>
            <p class="text-slate-600 mb-2">{description}</p>
            <p class="text-sm text-slate-500 mb-8">{subtitle}</p>
            <div class="bg-white p-8 rounded-2xl shadow-sm border border-slate-100">{bars}</div>
            <p class="mt-4 text-xs text-slate-400 italic">{note}</p>
        </div>
    }
    .into_any())
}

fn insights_section(ctx: &RenderContext<'_>) -> ContentResult<AnyView> {
    let insights = InsightsContent::resolve(ctx.store, ctx.locale)?;

    let cards = insights
        .cards
        .into_iter()
        .enumerate()
        .map(|(idx, card)| {
            if card.color.is_none() {
                debug!(
                    "Insight card '{}' has unknown color '{}', using default style",
                    card.title, card.color_name
                );
                ctx.note_cosmetic_fallback();
            }
            let motion = ctx.animate(
                format!("insight-{}", idx),
                insight_card_entrance(stagger(INSIGHT_BASE_DELAY_MS, idx)),
            );
            view! { <InsightCallout card=card motion=motion/> }
        })
        .collect_view();

    Ok(view! {
        <div data-section="insights">
            <h2 class="text-3xl font-bold text-slate-900 mb-8">{insights.title}</h2>
            <div class="space-y-6">{cards}</div>
        </div>
    }
    .into_any())
}

fn tech_stack_section(ctx: &RenderContext<'_>) -> ContentResult<AnyView> {
    let tech = TechStackContent::resolve(ctx.store, ctx.locale)?;
    let pills = tech
        .stack
        .into_iter()
        .map(|name| view! { <TechPill name=name/> })
        .collect_view();

    Ok(view! {
        <section class="py-16 bg-slate-900 text-white px-4" data-section="tech-stack">
            <div class="max-w-5xl mx-auto text-center">
                <IconGlyph icon=Icon::CodeBracket extra="mx-auto h-8 w-8 text-indigo-300 mb-4"/>
                <h2 class="text-2xl font-bold mb-2">{tech.title}</h2>
                <p class="text-slate-400 mb-8">{tech.description}</p>
                <div class="flex flex-wrap justify-center gap-3">{pills}</div>
            </div>
        </section>
    }
    .into_any())
}

fn researcher_section(ctx: &RenderContext<'_>) -> ContentResult<AnyView> {
    let researcher = ResearcherContent::resolve(ctx.store, ctx.locale)?;
    let portrait = ProfileImage::new(
        &ctx.profile.image_url,
        &researcher.name,
        &ctx.profile.fallback_name,
        &ctx.profile.avatar_service,
    );
    let motion = ctx.animate("researcher", fade_in(0, Trigger::EnterView));

    Ok(view! {
        <section class="py-20 px-4" data-section="researcher">
            <div
                class="max-w-4xl mx-auto flex flex-col md:flex-row items-center gap-10"
                data-animate=motion.trigger_attr()
                data-delay-ms=motion.delay_attr()
                data-duration-ms=motion.duration_attr()
                data-initial=motion.initial_attr()
                data-rest=motion.rest_attr()
                data-anim-id=motion.id_attr()
                data-entered=motion.entered_attr()
            >
                <div class="relative w-40 h-40 rounded-full overflow-hidden ring-4 ring-white shadow-xl shrink-0">
                    {portrait.render()}
                </div>
                <div>
                    <h2 class="text-2xl font-bold text-slate-900">{researcher.name}</h2>
                    <p class="text-indigo-600 font-medium mb-4">{researcher.role}</p>
                    <p class="text-slate-600 leading-relaxed mb-6" data-role="bio">
                        <RichText text=researcher.bio/>
                    </p>
                    <p class="inline-flex items-center text-sm text-slate-500" data-role="trust">
                        <IconGlyph icon=Icon::ShieldCheck extra="mr-2 h-5 w-5 text-green-600"/>
                        {researcher.trust}
                    </p>
                </div>
            </div>
        </section>
    }
    .into_any())
}
