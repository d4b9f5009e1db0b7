//! Page frame: navbar, main content, footer and the HTML document.

use crate::content::{FooterContent, NavContent, SiteContent};
use crate::error::ContentResult;
use crate::i18n::{language_class_for, Locale};
use crate::metrics::PageTally;
use crate::page::{compose_about, compose_home, compose_not_found, compose_volunteer, RenderContext};
use crate::render::AnimatedElement;
use crate::router::{href, Route};
use leptos::prelude::*;
use tracing::debug;

/// A rendered HTML document and what its render ran into.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// `None` for the not-found page
    pub route: Option<Route>,
    pub html: String,
    /// Animated elements in document order
    pub animations: Vec<AnimatedElement>,
    pub tally: PageTally,
}

/// Build the document for a route without recording it in the metrics.
pub(crate) fn build_page(route: Option<Route>, ctx: &RenderContext<'_>) -> ContentResult<RenderedPage> {
    ctx.begin_page();

    let nav = ctx.section("nav", |ctx| navbar(route, ctx))?;
    let main = match route {
        Some(Route::Home) => compose_home(ctx)?,
        Some(Route::AboutStudy) => compose_about(ctx)?,
        Some(Route::VolunteerInformation) => compose_volunteer(ctx)?,
        None => compose_not_found(ctx)?,
    };
    let footer = ctx.section("footer", footer)?;
    let (title, description) = ctx.soft(
        "Site title",
        SiteContent::resolve(ctx.store, ctx.locale).map(|site| (site.title, site.description)),
    )?;

    let document = view! {
        <html lang=ctx.locale.code()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <meta name="description" content=description/>
            </head>
            <body>
                <div
                    class=format!("min-h-screen bg-transparent text-slate-800 {}", language_class_for(ctx.locale))
                    data-locale=ctx.locale.code()
                >
                    {nav}
                    <main>{main}</main>
                    {footer}
                </div>
            </body>
        </html>
    };
    let html = format!("<!DOCTYPE html>\n{}\n", document.to_html());

    let (tally, animations) = ctx.finish_page();
    Ok(RenderedPage {
        route,
        html,
        animations,
        tally,
    })
}

/// Render the full page for a route: navbar, main content, footer.
///
/// `None` renders the not-found page. Every call counts as one rendered page
/// in the metrics.
pub fn render_page(route: Option<Route>, ctx: &RenderContext<'_>) -> ContentResult<RenderedPage> {
    let page = build_page(route, ctx)?;
    ctx.metrics.record_page(&page.tally);
    debug!(
        "Rendered {:?} for locale {} ({} animated elements)",
        route,
        ctx.locale,
        page.animations.len()
    );
    Ok(page)
}

/// Render a complete HTML document for a route.
pub fn render_document(route: Option<Route>, ctx: &RenderContext<'_>) -> ContentResult<String> {
    render_page(route, ctx).map(|page| page.html)
}

fn navbar(route: Option<Route>, ctx: &RenderContext<'_>) -> ContentResult<AnyView> {
    let nav = NavContent::resolve(ctx.store, ctx.locale)?;

    let links = [
        (Route::Home, nav.home),
        (Route::AboutStudy, nav.about),
        (Route::VolunteerInformation, nav.volunteer),
    ]
    .into_iter()
    .map(|(target, label)| {
        let current = (route == Some(target)).then_some("page");
        view! {
            <a
                class="text-sm font-medium text-slate-600 hover:text-indigo-600"
                href=href(target, ctx.locale)
                aria-current=current
            >
                {label}
            </a>
        }
    })
    .collect_view();

    let alternates: Vec<Locale> = Locale::enabled()
        .into_iter()
        .filter(|locale| *locale != ctx.locale)
        .collect();
    let single = alternates.len() == 1;
    let switches = alternates
        .into_iter()
        .map(|locale| {
            let label = if single {
                nav.switch_language.clone()
            } else {
                locale.native_name().to_string()
            };
            view! {
                <a
                    class="ml-4 px-3 py-1 rounded-full border border-slate-200 text-sm"
                    href=href(route.unwrap_or(Route::Home), locale)
                    hreflang=locale.code()
                    data-role="language-switch"
                >
                    {label}
                </a>
            }
        })
        .collect_view();

    Ok(view! {
        <nav
            class="fixed top-0 inset-x-0 z-50 bg-white/80 backdrop-blur border-b border-slate-100"
            data-section="nav"
        >
            <div class="max-w-7xl mx-auto px-4 h-16 flex items-center justify-between">
                <a class="font-bold text-slate-900" href=href(Route::Home, ctx.locale)>
                    {nav.brand}
                </a>
                <div class="flex items-center gap-6">{links}{switches}</div>
            </div>
        </nav>
    }
    .into_any())
}

fn footer(ctx: &RenderContext<'_>) -> ContentResult<AnyView> {
    let footer = FooterContent::resolve(ctx.store, ctx.locale)?;

    Ok(view! {
        <footer
            class="py-10 text-center text-sm text-slate-500 border-t border-slate-100"
            data-section="footer"
        >
            <p>{footer.text}</p>
            <p class="mt-2">{footer.contact}</p>
        </footer>
    }
    .into_any())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::metrics::RenderMetrics;
    use crate::page::{ContentPolicy, ProfileSettings};
    use crate::render::inspect::{select_first, with_attr};

    fn render(route: Option<Route>, locale: Locale) -> (String, RenderMetrics) {
        let store = ContentStore::bundled().unwrap();
        let profile = ProfileSettings::default();
        let metrics = RenderMetrics::new();
        let ctx = RenderContext::new(&store, locale, ContentPolicy::Strict, &profile, &metrics);
        let html = render_document(route, &ctx).unwrap();
        (html, metrics)
    }

    // ==================== Document Tests ====================

    #[test]
    fn test_document_has_lang_and_title() {
        let (html, metrics) = render(Some(Route::Home), Locale::THAI);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(select_first(&html, "lang", "th").unwrap().name, "html");
        assert!(html.contains("lang-th"));
        assert!(html.contains("<title>การทำนายความเคลื่อนไหวของตลาดจากความรู้สึกบนโซเชียล</title>"));
        assert_eq!(metrics.pages_rendered(), 1);
    }

    #[test]
    fn test_not_found_for_unknown_route() {
        let (html, _) = render(None, Locale::ENGLISH);
        assert!(html.contains("Page not found"));
        assert!(select_first(&html, "data-page", "not-found").is_some());
    }

    #[test]
    fn test_no_register_link() {
        for route in Route::ALL {
            for locale in Locale::enabled() {
                let (html, _) = render(Some(route), locale);
                assert!(!html.contains("/register"));
            }
        }
    }

    // ==================== Navbar Tests ====================

    #[test]
    fn test_navbar_marks_current_route_and_switches_locale() {
        let (html, _) = render(Some(Route::AboutStudy), Locale::ENGLISH);

        let current = with_attr(&html, "aria-current");
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].attr("href"), Some("/en/about-the-study"));

        let switch = select_first(&html, "data-role", "language-switch").unwrap();
        assert_eq!(switch.attr("href"), Some("/th/about-the-study"));
        assert_eq!(switch.attr("hreflang"), Some("th"));
        assert_eq!(switch.text(), "ภาษาไทย");
    }

    // ==================== Page Tally Tests ====================

    #[test]
    fn test_every_animated_element_is_registered() {
        let store = ContentStore::bundled().unwrap();
        let profile = ProfileSettings::default();
        let metrics = RenderMetrics::new();
        let ctx = RenderContext::new(&store, Locale::ENGLISH, ContentPolicy::Strict, &profile, &metrics);
        let page = render_page(Some(Route::Home), &ctx).unwrap();

        let rendered: Vec<_> = with_attr(&page.html, "data-anim-id")
            .into_iter()
            .filter_map(|tag| tag.attr("data-anim-id").map(str::to_string))
            .collect();
        let registered: Vec<_> = page.animations.iter().map(|element| element.id.clone()).collect();
        assert!(!rendered.is_empty());
        assert_eq!(rendered, registered);
    }

    #[test]
    fn test_build_page_leaves_metrics_alone() {
        let store = ContentStore::bundled().unwrap();
        let profile = ProfileSettings::default();
        let metrics = RenderMetrics::new();
        let ctx = RenderContext::new(&store, Locale::ENGLISH, ContentPolicy::Strict, &profile, &metrics);

        build_page(Some(Route::Home), &ctx).unwrap();
        assert_eq!(metrics.pages_rendered(), 0);
        render_page(Some(Route::Home), &ctx).unwrap();
        assert_eq!(metrics.pages_rendered(), 1);
    }

    #[test]
    fn test_one_unclean_page_per_render_with_errors() {
        let mut dictionary: serde_json::Value =
            serde_json::from_str(include_str!("../../locales/en.json")).unwrap();
        let home = dictionary["homePage"].as_object_mut().unwrap();
        home.remove("stats");
        home.remove("hero");
        let store = ContentStore::from_dictionaries([(Locale::ENGLISH, dictionary)]);
        let profile = ProfileSettings::default();
        let metrics = RenderMetrics::new();
        let ctx = RenderContext::new(&store, Locale::ENGLISH, ContentPolicy::Lenient, &profile, &metrics);

        let page = render_page(Some(Route::Home), &ctx).unwrap();
        assert_eq!(page.tally.content_errors, 2);
        render_page(Some(Route::AboutStudy), &ctx).unwrap();

        assert_eq!(metrics.pages_rendered(), 2);
        assert_eq!(metrics.pages_with_errors(), 1);
        assert_eq!(metrics.content_errors(), 2);
    }
}
