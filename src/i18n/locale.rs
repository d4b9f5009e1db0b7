//! Locale type: validated handle into the locale registry.

use crate::error::{ContentError, ContentResult};
use crate::i18n::{LocaleConfig, LocaleRegistry};
use std::fmt;

/// A validated locale.
///
/// Only supported, enabled locales can be constructed, so every `Locale` in
/// circulation has a registry entry and (once the store is loaded) a
/// dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };

    pub const THAI: Locale = Locale { code: "th" };

    /// Create a Locale from a language code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered and enabled
    /// * `Err(ContentError::UnsupportedLocale)` otherwise
    pub fn from_code(code: &str) -> ContentResult<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            _ => Err(ContentError::UnsupportedLocale(code.to_string())),
        }
    }

    /// The default locale the site opens in.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    /// All enabled locales, in registry order.
    pub fn enabled() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// `Locale` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
