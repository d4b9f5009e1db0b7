//! Informational pages and the not-found page.

use crate::content::{InfoPageContent, NotFoundContent};
use crate::error::ContentResult;
use crate::page::{stagger, RenderContext};
use crate::render::{AnimationSpec, Trigger};
use crate::router::{href, Route};
use leptos::prelude::*;

pub fn compose_about(ctx: &RenderContext<'_>) -> ContentResult<AnyView> {
    ctx.section("about", |ctx| {
        InfoPageContent::about(ctx.store, ctx.locale).map(|page| info_page("about", page, ctx))
    })
}

pub fn compose_volunteer(ctx: &RenderContext<'_>) -> ContentResult<AnyView> {
    ctx.section("volunteer", |ctx| {
        InfoPageContent::volunteer(ctx.store, ctx.locale)
            .map(|page| info_page("volunteer", page, ctx))
    })
}

pub fn compose_not_found(ctx: &RenderContext<'_>) -> ContentResult<AnyView> {
    ctx.section("not-found", |ctx| {
        let content = NotFoundContent::resolve(ctx.store, ctx.locale)?;

        Ok(view! {
            <section
                class="pt-40 pb-20 px-4 text-center"
                data-page="not-found"
                data-section="not-found"
            >
                <h1 class="text-4xl font-bold text-slate-900 mb-4">{content.title}</h1>
                <p class="text-slate-600 mb-8">{content.body}</p>
                <a class="text-indigo-600 font-semibold" href=href(Route::Home, ctx.locale)>
                    {content.back}
                </a>
            </section>
        }
        .into_any())
    })
}

fn info_page(name: &'static str, page: InfoPageContent, ctx: &RenderContext<'_>) -> AnyView {
    let sections = page
        .sections
        .into_iter()
        .enumerate()
        .map(|(idx, section)| {
            let motion = ctx.animate(
                format!("{}-section-{}", name, idx),
                AnimationSpec::fade_up(20.0, Trigger::EnterView, stagger(0, idx), 500),
            );
            view! {
                <section
                    class="mb-10"
                    data-component="info-section"
                    data-animate=motion.trigger_attr()
                    data-delay-ms=motion.delay_attr()
                    data-duration-ms=motion.duration_attr()
                    data-initial=motion.initial_attr()
                    data-rest=motion.rest_attr()
                    data-anim-id=motion.id_attr()
                    data-entered=motion.entered_attr()
                >
                    <h2 class="text-2xl font-bold text-slate-900 mb-3" data-role="heading">
                        {section.heading}
                    </h2>
                    <p class="text-slate-600 leading-relaxed">{section.body}</p>
                </section>
            }
        })
        .collect_view();

    view! {
        <article class="max-w-3xl mx-auto pt-32 pb-20 px-4" data-page=name data-section=name>
            <h1 class="text-4xl font-extrabold text-slate-900 mb-6">{page.title}</h1>
            <p class="text-lg text-slate-600 mb-12">{page.intro}</p>
            {sections}
        </article>
    }
    .into_any()
}
