//! Typed content sections.
//!
//! Each path family gets a struct and a resolver. The resolvers are the only
//! place that knows which fields a record list carries, so the renderers work
//! on plain Rust types and the validator can prove completeness by running
//! every resolver for every locale at load time.

use crate::content::{ContentStore, Record, Scalar, Shape};
use crate::error::{ContentError, ContentResult};
use crate::i18n::{Locale, LocaleRegistry};

/// Stable status of a performance metric, independent of locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricStatus {
    Winner,
    Failed,
    Neutral,
}

impl MetricStatus {
    /// Map a translated status label to its stable status.
    ///
    /// Labels are matched against the vocabulary of every registered locale,
    /// so the result does not depend on which locale is active. Unknown labels
    /// are `Neutral`.
    pub fn from_label(label: &str) -> MetricStatus {
        let label = label.trim();
        for config in LocaleRegistry::get().list_all() {
            if label == config.status_vocabulary.winner {
                return MetricStatus::Winner;
            }
            if label == config.status_vocabulary.failed {
                return MetricStatus::Failed;
            }
        }
        MetricStatus::Neutral
    }
}

/// Accent colour of an insight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightColor {
    Blue,
    Red,
    Amber,
}

impl InsightColor {
    pub fn from_name(name: &str) -> Option<InsightColor> {
        match name.trim() {
            "blue" => Some(InsightColor::Blue),
            "red" => Some(InsightColor::Red),
            "amber" => Some(InsightColor::Amber),
            _ => None,
        }
    }
}

// ==================== Record helpers ====================

/// Dotted path of a key below a section root.
fn at(root: &str, key: &str) -> String {
    format!("{}.{}", root, key)
}

fn missing(path: String, locale: Locale) -> ContentError {
    ContentError::MissingContent {
        path,
        locale: locale.code().to_string(),
    }
}

fn record_text(
    record: &Record,
    list: &str,
    idx: usize,
    field: &str,
    locale: Locale,
) -> ContentResult<String> {
    record
        .field(field)
        .map(Scalar::to_string)
        .ok_or_else(|| missing(format!("{}.{}.{}", list, idx, field), locale))
}

fn record_number(
    record: &Record,
    list: &str,
    idx: usize,
    field: &str,
    locale: Locale,
) -> ContentResult<f64> {
    let path = format!("{}.{}.{}", list, idx, field);
    let scalar = record.field(field).ok_or_else(|| missing(path.clone(), locale))?;

    match scalar.as_number() {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(ContentError::ShapeMismatch {
            path,
            locale: locale.code().to_string(),
            expected: Shape::Scalar,
            found: format!("non-numeric value '{}'", scalar),
        }),
    }
}

// ==================== Site frame ====================

#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub title: String,
    pub description: String,
}

impl SiteContent {
    pub const ROOT: &'static str = "site";

    pub fn resolve(store: &ContentStore, locale: Locale) -> ContentResult<Self> {
        Ok(Self {
            title: store.text(&at(Self::ROOT, "title"), locale)?,
            description: store.text(&at(Self::ROOT, "description"), locale)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavContent {
    pub brand: String,
    pub home: String,
    pub about: String,
    pub volunteer: String,
    pub switch_language: String,
}

impl NavContent {
    pub const ROOT: &'static str = "nav";

    pub fn resolve(store: &ContentStore, locale: Locale) -> ContentResult<Self> {
        Ok(Self {
            brand: store.text(&at(Self::ROOT, "brand"), locale)?,
            home: store.text(&at(Self::ROOT, "home"), locale)?,
            about: store.text(&at(Self::ROOT, "about"), locale)?,
            volunteer: store.text(&at(Self::ROOT, "volunteer"), locale)?,
            switch_language: store.text(&at(Self::ROOT, "switchLanguage"), locale)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterContent {
    pub text: String,
    pub contact: String,
}

impl FooterContent {
    pub const ROOT: &'static str = "footer";

    pub fn resolve(store: &ContentStore, locale: Locale) -> ContentResult<Self> {
        Ok(Self {
            text: store.text(&at(Self::ROOT, "text"), locale)?,
            contact: store.text(&at(Self::ROOT, "contact"), locale)?,
        })
    }
}

// ==================== Home page ====================

#[derive(Debug, Clone, PartialEq)]
pub struct HeroContent {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub cta_primary: String,
    pub cta_secondary: String,
}

impl HeroContent {
    pub const ROOT: &'static str = "homePage.hero";

    pub fn resolve(store: &ContentStore, locale: Locale) -> ContentResult<Self> {
        Ok(Self {
            badge: store.text(&at(Self::ROOT, "badge"), locale)?,
            title: store.text(&at(Self::ROOT, "title"), locale)?,
            subtitle: store.text(&at(Self::ROOT, "subtitle"), locale)?,
            cta_primary: store.text(&at(Self::ROOT, "ctaPrimary"), locale)?,
            cta_secondary: store.text(&at(Self::ROOT, "ctaSecondary"), locale)?,
        })
    }
}

/// Labels for the headline statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsContent {
    pub models: String,
    pub volunteers: String,
    pub accuracy: String,
    pub duration: String,
}

impl StatsContent {
    pub const ROOT: &'static str = "homePage.stats";

    pub fn resolve(store: &ContentStore, locale: Locale) -> ContentResult<Self> {
        Ok(Self {
            models: store.text(&at(Self::ROOT, "models"), locale)?,
            volunteers: store.text(&at(Self::ROOT, "volunteers"), locale)?,
            accuracy: store.text(&at(Self::ROOT, "accuracy"), locale)?,
            duration: store.text(&at(Self::ROOT, "duration"), locale)?,
        })
    }
}

/// One row of the performance chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub name: String,
    pub score: f64,
    pub peak: f64,
    pub status: MetricStatus,
    /// Translated label shown in the badge
    pub status_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceContent {
    pub title: String,
    pub description: String,
    pub subtitle: String,
    pub note: String,
    pub score_label: String,
    pub peak_label: String,
    pub metrics: Vec<Metric>,
}

impl PerformanceContent {
    pub const ROOT: &'static str = "homePage.performanceSection";
    const METRICS: &'static str = "homePage.performanceSection.metrics";

    pub fn resolve(store: &ContentStore, locale: Locale) -> ContentResult<Self> {
        let metrics = store
            .records(Self::METRICS, locale)?
            .iter()
            .enumerate()
            .map(|(idx, record)| -> ContentResult<Metric> {
                let status_label = record_text(record, Self::METRICS, idx, "status", locale)?;
                Ok(Metric {
                    name: record_text(record, Self::METRICS, idx, "name", locale)?,
                    score: record_number(record, Self::METRICS, idx, "score", locale)?,
                    peak: record_number(record, Self::METRICS, idx, "peak", locale)?,
                    status: MetricStatus::from_label(&status_label),
                    status_label,
                })
            })
            .collect::<ContentResult<Vec<_>>>()?;

        Ok(Self {
            title: store.text(&at(Self::ROOT, "title"), locale)?,
            description: store.text(&at(Self::ROOT, "description"), locale)?,
            subtitle: store.text(&at(Self::ROOT, "subtitle"), locale)?,
            note: store.text(&at(Self::ROOT, "note"), locale)?,
            score_label: store.text(&at(Self::ROOT, "scoreLabel"), locale)?,
            peak_label: store.text(&at(Self::ROOT, "peakLabel"), locale)?,
            metrics,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightCard {
    pub title: String,
    pub content: String,
    /// `None` when the colour name is not one of the known accents
    pub color: Option<InsightColor>,
    pub color_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightsContent {
    pub title: String,
    pub cards: Vec<InsightCard>,
}

impl InsightsContent {
    pub const ROOT: &'static str = "homePage.insightsSection";
    const CARDS: &'static str = "homePage.insightsSection.cards";

    pub fn resolve(store: &ContentStore, locale: Locale) -> ContentResult<Self> {
        let cards = store
            .records(Self::CARDS, locale)?
            .iter()
            .enumerate()
            .map(|(idx, record)| -> ContentResult<InsightCard> {
                let color_name = record_text(record, Self::CARDS, idx, "color", locale)?;
                Ok(InsightCard {
                    title: record_text(record, Self::CARDS, idx, "title", locale)?,
                    content: record_text(record, Self::CARDS, idx, "content", locale)?,
                    color: InsightColor::from_name(&color_name),
                    color_name,
                })
            })
            .collect::<ContentResult<Vec<_>>>()?;

        Ok(Self {
            title: store.text(&at(Self::ROOT, "title"), locale)?,
            cards,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TechStackContent {
    pub title: String,
    pub description: String,
    pub stack: Vec<String>,
}

impl TechStackContent {
    pub const ROOT: &'static str = "homePage.techStack";

    pub fn resolve(store: &ContentStore, locale: Locale) -> ContentResult<Self> {
        Ok(Self {
            title: store.text(&at(Self::ROOT, "title"), locale)?,
            description: store.text(&at(Self::ROOT, "description"), locale)?,
            stack: store.text_list(&at(Self::ROOT, "stack"), locale)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResearcherContent {
    pub name: String,
    pub role: String,
    /// Bio with numbered emphasis tags, e.g. `<1>five volunteers</1>`
    pub bio: String,
    pub trust: String,
}

impl ResearcherContent {
    pub const ROOT: &'static str = "homePage.researcher";
    /// The trust line lives beside the researcher block, not inside it
    const TRUST_ROOT: &'static str = "homePage.trust";

    pub fn resolve(store: &ContentStore, locale: Locale) -> ContentResult<Self> {
        Ok(Self {
            name: store.text(&at(Self::ROOT, "name"), locale)?,
            role: store.text(&at(Self::ROOT, "role"), locale)?,
            bio: store.text(&at(Self::ROOT, "bio"), locale)?,
            trust: store.text(&at(Self::TRUST_ROOT, "text"), locale)?,
        })
    }
}

// ==================== Informational pages ====================

#[derive(Debug, Clone, PartialEq)]
pub struct InfoSection {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoPageContent {
    pub title: String,
    pub intro: String,
    pub sections: Vec<InfoSection>,
}

impl InfoPageContent {
    pub const ABOUT_ROOT: &'static str = "aboutPage";
    pub const VOLUNTEER_ROOT: &'static str = "volunteerPage";

    pub fn about(store: &ContentStore, locale: Locale) -> ContentResult<Self> {
        Self::resolve(store, locale, Self::ABOUT_ROOT)
    }

    pub fn volunteer(store: &ContentStore, locale: Locale) -> ContentResult<Self> {
        Self::resolve(store, locale, Self::VOLUNTEER_ROOT)
    }

    fn resolve(store: &ContentStore, locale: Locale, root: &str) -> ContentResult<Self> {
        let list = at(root, "sections");
        let sections = store
            .records(&list, locale)?
            .iter()
            .enumerate()
            .map(|(idx, record)| -> ContentResult<InfoSection> {
                Ok(InfoSection {
                    heading: record_text(record, &list, idx, "heading", locale)?,
                    body: record_text(record, &list, idx, "body", locale)?,
                })
            })
            .collect::<ContentResult<Vec<_>>>()?;

        Ok(Self {
            title: store.text(&at(root, "title"), locale)?,
            intro: store.text(&at(root, "intro"), locale)?,
            sections,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotFoundContent {
    pub title: String,
    pub body: String,
    pub back: String,
}

impl NotFoundContent {
    pub const ROOT: &'static str = "notFound";

    pub fn resolve(store: &ContentStore, locale: Locale) -> ContentResult<Self> {
        Ok(Self {
            title: store.text(&at(Self::ROOT, "title"), locale)?,
            body: store.text(&at(Self::ROOT, "body"), locale)?,
            back: store.text(&at(Self::ROOT, "back"), locale)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_with_home(home: serde_json::Value) -> ContentStore {
        ContentStore::from_dictionaries([(Locale::ENGLISH, json!({ "homePage": home }))])
    }

    // ==================== MetricStatus Tests ====================

    #[test]
    fn test_status_winner_in_both_locales() {
        assert_eq!(MetricStatus::from_label("Winner"), MetricStatus::Winner);
        assert_eq!(MetricStatus::from_label("ชนะเลิศ"), MetricStatus::Winner);
    }

    #[test]
    fn test_status_failed_in_both_locales() {
        assert_eq!(MetricStatus::from_label("Failed"), MetricStatus::Failed);
        assert_eq!(MetricStatus::from_label("ล้มเหลว"), MetricStatus::Failed);
    }

    #[test]
    fn test_status_unknown_is_neutral() {
        assert_eq!(MetricStatus::from_label("Pending"), MetricStatus::Neutral);
        assert_eq!(MetricStatus::from_label(""), MetricStatus::Neutral);
    }

    #[test]
    fn test_status_match_is_exact() {
        assert_eq!(MetricStatus::from_label("winner"), MetricStatus::Neutral);
        assert_eq!(MetricStatus::from_label(" Winner "), MetricStatus::Winner);
    }

    // ==================== InsightColor Tests ====================

    #[test]
    fn test_insight_color_known_names() {
        assert_eq!(InsightColor::from_name("blue"), Some(InsightColor::Blue));
        assert_eq!(InsightColor::from_name("red"), Some(InsightColor::Red));
        assert_eq!(InsightColor::from_name("amber"), Some(InsightColor::Amber));
    }

    #[test]
    fn test_insight_color_unknown_name() {
        assert_eq!(InsightColor::from_name("purple"), None);
    }

    // ==================== Section Resolver Tests ====================

    #[test]
    fn test_performance_resolves_metrics_in_order() {
        let store = store_with_home(json!({
            "performanceSection": {
                "title": "t", "description": "d", "subtitle": "s", "note": "n",
                "scoreLabel": "Avg F0.5", "peakLabel": "Peak",
                "metrics": [
                    {"name": "B", "score": "2.5", "peak": 4, "status": "Failed"},
                    {"name": "A", "score": 1, "peak": 2, "status": "Winner"}
                ]
            }
        }));

        let perf = PerformanceContent::resolve(&store, Locale::ENGLISH).unwrap();
        let names: Vec<_> = perf.metrics.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(perf.metrics[0].score, 2.5);
        assert_eq!(perf.metrics[0].status, MetricStatus::Failed);
        assert_eq!(perf.metrics[1].status_label, "Winner");
    }

    #[test]
    fn test_performance_missing_field_reports_indexed_path() {
        let store = store_with_home(json!({
            "performanceSection": {
                "metrics": [{"name": "A", "score": 1, "status": "Winner"}]
            }
        }));

        let err = PerformanceContent::resolve(&store, Locale::ENGLISH).unwrap_err();
        assert_eq!(
            err,
            ContentError::MissingContent {
                path: "homePage.performanceSection.metrics.0.peak".to_string(),
                locale: "en".to_string(),
            }
        );
    }

    #[test]
    fn test_performance_non_numeric_score_is_shape_mismatch() {
        let store = store_with_home(json!({
            "performanceSection": {
                "metrics": [{"name": "A", "score": "high", "peak": 1, "status": "x"}]
            }
        }));

        let err = PerformanceContent::resolve(&store, Locale::ENGLISH).unwrap_err();
        assert!(matches!(err, ContentError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_insights_keep_unknown_color_name() {
        let store = store_with_home(json!({
            "insightsSection": {
                "title": "Insights",
                "cards": [{"title": "T", "content": "C", "color": "purple"}]
            }
        }));

        let insights = InsightsContent::resolve(&store, Locale::ENGLISH).unwrap();
        assert_eq!(insights.cards[0].color, None);
        assert_eq!(insights.cards[0].color_name, "purple");
    }

    #[test]
    fn test_tech_stack_must_be_plain_values() {
        let store = store_with_home(json!({
            "techStack": {"title": "t", "description": "d", "stack": [{"name": "Rust"}]}
        }));

        assert!(TechStackContent::resolve(&store, Locale::ENGLISH).is_err());
    }

    #[test]
    fn test_missing_paths_are_reported_below_section_root() {
        let store = ContentStore::from_dictionaries([(Locale::ENGLISH, json!({}))]);
        let path_of = |err: ContentError| match err {
            ContentError::MissingContent { path, .. } => path,
            other => panic!("unexpected error: {:?}", other),
        };

        let hero = path_of(HeroContent::resolve(&store, Locale::ENGLISH).unwrap_err());
        assert!(hero.starts_with(HeroContent::ROOT));
        let nav = path_of(NavContent::resolve(&store, Locale::ENGLISH).unwrap_err());
        assert!(nav.starts_with(NavContent::ROOT));
        let tech = path_of(TechStackContent::resolve(&store, Locale::ENGLISH).unwrap_err());
        assert!(tech.starts_with(TechStackContent::ROOT));
    }

    #[test]
    fn test_researcher_trust_line_lives_beside_researcher() {
        let store = store_with_home(json!({
            "researcher": {"name": "N", "role": "R", "bio": "B"}
        }));

        let err = ResearcherContent::resolve(&store, Locale::ENGLISH).unwrap_err();
        assert_eq!(
            err,
            ContentError::MissingContent {
                path: "homePage.trust.text".to_string(),
                locale: "en".to_string(),
            }
        );
    }

    #[test]
    fn test_bundled_sections_resolve_for_every_locale() {
        let store = ContentStore::bundled().unwrap();
        for locale in Locale::enabled() {
            assert!(HeroContent::resolve(&store, locale).is_ok());
            assert!(StatsContent::resolve(&store, locale).is_ok());
            assert!(PerformanceContent::resolve(&store, locale).is_ok());
            assert!(InsightsContent::resolve(&store, locale).is_ok());
            assert!(TechStackContent::resolve(&store, locale).is_ok());
            assert!(ResearcherContent::resolve(&store, locale).is_ok());
            assert!(InfoPageContent::about(&store, locale).is_ok());
            assert!(InfoPageContent::volunteer(&store, locale).is_ok());
            assert!(NotFoundContent::resolve(&store, locale).is_ok());
        }
    }

    #[test]
    fn test_bundled_statuses_agree_across_locales() {
        let store = ContentStore::bundled().unwrap();
        let en = PerformanceContent::resolve(&store, Locale::ENGLISH).unwrap();
        let th = PerformanceContent::resolve(&store, Locale::THAI).unwrap();

        let en_status: Vec<_> = en.metrics.iter().map(|m| m.status).collect();
        let th_status: Vec<_> = th.metrics.iter().map(|m| m.status).collect();
        assert_eq!(en_status, th_status);
        assert_eq!(en_status[0], MetricStatus::Winner);
    }
}
