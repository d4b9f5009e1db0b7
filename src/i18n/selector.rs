//! Active locale selection for a rendering session.
//!
//! The selector is an explicit context value threaded into the composer, not
//! ambient global state. Every successful change bumps a generation counter;
//! views compare generations to know they must re-resolve their content.

use crate::error::ContentResult;
use crate::i18n::Locale;
use tracing::{debug, info};

/// Code prefix that switches the page to Thai typography.
const THAI_PREFIX: &str = "th";

/// A completed locale change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleChange {
    pub from: Locale,
    pub to: Locale,
    pub generation: u64,
}

impl LocaleChange {
    /// Whether the change actually switched locales.
    pub fn is_switch(&self) -> bool {
        self.from != self.to
    }
}

/// Holds the single active locale.
#[derive(Debug, Clone)]
pub struct LocaleSelector {
    current: Locale,
    generation: u64,
}

impl LocaleSelector {
    pub fn new(initial: Locale) -> Self {
        Self {
            current: initial,
            generation: 0,
        }
    }

    /// Switch the active locale.
    ///
    /// Fails with `UnsupportedLocale` for unknown or disabled codes and leaves
    /// the selector untouched. Re-selecting the active locale is accepted but
    /// does not bump the generation.
    pub fn set_locale(&mut self, code: &str) -> ContentResult<LocaleChange> {
        let next = Locale::from_code(code)?;
        let from = self.current;

        if next != from {
            self.current = next;
            self.generation += 1;
            info!("Locale changed from {} to {}", from, next);
        } else {
            debug!("Locale {} already active", next);
        }

        Ok(LocaleChange {
            from,
            to: next,
            generation: self.generation,
        })
    }

    pub fn current_locale(&self) -> Locale {
        self.current
    }

    /// Number of locale switches so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Presentation class for the active locale.
    pub fn language_class(&self) -> &'static str {
        language_class_for(self.current)
    }
}

impl Default for LocaleSelector {
    fn default() -> Self {
        Self::new(Locale::default_locale())
    }
}

/// Presentation class selecting directional/typographic styling.
pub fn language_class_for(locale: Locale) -> &'static str {
    if locale.code().starts_with(THAI_PREFIX) {
        "lang-th"
    } else {
        "lang-en"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;

    #[test]
    fn test_default_selector_starts_in_english() {
        let selector = LocaleSelector::default();
        assert_eq!(selector.current_locale(), Locale::ENGLISH);
        assert_eq!(selector.generation(), 0);
        assert_eq!(selector.language_class(), "lang-en");
    }

    #[test]
    fn test_set_locale_switches_and_bumps_generation() {
        let mut selector = LocaleSelector::default();
        let change = selector.set_locale("th").unwrap();

        assert!(change.is_switch());
        assert_eq!(change.from, Locale::ENGLISH);
        assert_eq!(change.to, Locale::THAI);
        assert_eq!(selector.current_locale(), Locale::THAI);
        assert_eq!(selector.generation(), 1);
        assert_eq!(selector.language_class(), "lang-th");
    }

    #[test]
    fn test_set_same_locale_keeps_generation() {
        let mut selector = LocaleSelector::default();
        let change = selector.set_locale("en").unwrap();

        assert!(!change.is_switch());
        assert_eq!(selector.generation(), 0);
    }

    #[test]
    fn test_set_unsupported_locale_is_rejected() {
        let mut selector = LocaleSelector::new(Locale::THAI);
        let err = selector.set_locale("de").unwrap_err();

        assert_eq!(err, ContentError::UnsupportedLocale("de".to_string()));
        assert_eq!(selector.current_locale(), Locale::THAI);
        assert_eq!(selector.generation(), 0);
    }

    #[test]
    fn test_language_class_for_is_pure() {
        assert_eq!(language_class_for(Locale::THAI), "lang-th");
        assert_eq!(language_class_for(Locale::ENGLISH), "lang-en");
    }
}
