//! Content schema validation.
//!
//! Runs every typed section resolver for every enabled locale so a missing
//! key or a mis-shaped list fails the content load instead of a render. It
//! also compares each translation against the default locale and warns when
//! the two drift apart (different list lengths, lost emphasis tags).

use crate::content::{
    ContentStore, FooterContent, HeroContent, InfoPageContent, InsightsContent, NavContent,
    NotFoundContent, PerformanceContent, ResearcherContent, SiteContent, StatsContent,
    TechStackContent,
};
use crate::error::ContentResult;
use crate::i18n::Locale;
use crate::render::REFERENCE_SCALE;
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Hard content errors: the site cannot render with these
    pub errors: Vec<String>,

    /// Fail-soft issues that render with a default presentation
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for dictionary completeness and consistency.
pub struct ContentValidator;

static MARKUP_TAG_REGEX: OnceLock<Regex> = OnceLock::new();

/// Section sizes of one locale, compared against the default locale.
struct ListSizes {
    metrics: usize,
    insights: usize,
    stack: usize,
}

impl ContentValidator {
    /// Validate every section for every locale the registry enables.
    pub fn validate(store: &ContentStore) -> ValidationReport {
        let mut report = ValidationReport::new();
        let default_locale = Locale::default_locale();
        let default_sizes = Self::validate_locale(store, default_locale, &mut report);
        let default_bio = ResearcherContent::resolve(store, default_locale)
            .ok()
            .map(|r| r.bio);

        for locale in Locale::enabled() {
            if locale == default_locale {
                continue;
            }

            let sizes = Self::validate_locale(store, locale, &mut report);
            if let (Some(expected), Some(actual)) = (&default_sizes, &sizes) {
                Self::compare_sizes(locale, expected, actual, &mut report);
            }

            if let (Some(expected), Ok(researcher)) =
                (&default_bio, ResearcherContent::resolve(store, locale))
            {
                let expected_tags = Self::extract_markup_tags(expected);
                let actual_tags = Self::extract_markup_tags(&researcher.bio);
                if expected_tags != actual_tags {
                    report.warnings.push(format!(
                        "[{}] homePage.researcher.bio: emphasis tags {:?} differ from default {:?}",
                        locale, actual_tags, expected_tags
                    ));
                }
            }
        }

        report
    }

    /// Resolve every section for one locale, recording errors and warnings.
    ///
    /// Returns the list sizes when all list sections resolved.
    fn validate_locale(
        store: &ContentStore,
        locale: Locale,
        report: &mut ValidationReport,
    ) -> Option<ListSizes> {
        Self::check(report, locale, SiteContent::resolve(store, locale));
        Self::check(report, locale, NavContent::resolve(store, locale));
        Self::check(report, locale, FooterContent::resolve(store, locale));
        Self::check(report, locale, HeroContent::resolve(store, locale));
        Self::check(report, locale, StatsContent::resolve(store, locale));
        Self::check(report, locale, ResearcherContent::resolve(store, locale));
        Self::check(report, locale, InfoPageContent::about(store, locale));
        Self::check(report, locale, InfoPageContent::volunteer(store, locale));
        Self::check(report, locale, NotFoundContent::resolve(store, locale));

        let performance = Self::check(report, locale, PerformanceContent::resolve(store, locale));
        let insights = Self::check(report, locale, InsightsContent::resolve(store, locale));
        let tech = Self::check(report, locale, TechStackContent::resolve(store, locale));

        if let Some(performance) = &performance {
            for metric in &performance.metrics {
                if metric.score > REFERENCE_SCALE {
                    report.warnings.push(format!(
                        "[{}] metric '{}' score {} exceeds the {} reference scale and will saturate",
                        locale, metric.name, metric.score, REFERENCE_SCALE
                    ));
                }
            }
        }

        if let Some(insights) = &insights {
            for card in insights.cards.iter().filter(|card| card.color.is_none()) {
                report.warnings.push(format!(
                    "[{}] insight '{}' has unknown color '{}', default style will be used",
                    locale, card.title, card.color_name
                ));
            }
        }

        Some(ListSizes {
            metrics: performance?.metrics.len(),
            insights: insights?.cards.len(),
            stack: tech?.stack.len(),
        })
    }

    fn check<T>(report: &mut ValidationReport, locale: Locale, result: ContentResult<T>) -> Option<T> {
        match result {
            Ok(section) => Some(section),
            Err(e) => {
                report.errors.push(format!("[{}] {}", locale, e));
                None
            }
        }
    }

    fn compare_sizes(
        locale: Locale,
        expected: &ListSizes,
        actual: &ListSizes,
        report: &mut ValidationReport,
    ) {
        let pairs = [
            ("homePage.performanceSection.metrics", expected.metrics, actual.metrics),
            ("homePage.insightsSection.cards", expected.insights, actual.insights),
            ("homePage.techStack.stack", expected.stack, actual.stack),
        ];

        for (path, expected, actual) in pairs {
            if expected != actual {
                report.warnings.push(format!(
                    "[{}] {} has {} entries, default locale has {}",
                    locale, path, actual, expected
                ));
            }
        }
    }

    /// Extract numbered emphasis tags (`<1>`, `</1>`) in order of appearance
    fn extract_markup_tags(text: &str) -> Vec<String> {
        let regex = MARKUP_TAG_REGEX.get_or_init(|| Regex::new(r"</?\d+>").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
