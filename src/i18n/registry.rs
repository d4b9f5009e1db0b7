//! Locale registry: Single source of truth for all supported locales.
//!
//! The site ships in a default locale (English) and one alternate (Thai).
//! The registry is initialized once with `OnceLock` and is immutable
//! thereafter; adding a locale means adding an entry here plus its dictionary.

use std::sync::OnceLock;

/// Translated labels that identify a metric's status in one locale.
///
/// Content authors write the translated label; the store maps it back to a
/// stable [`MetricStatus`](crate::content::MetricStatus) using the
/// vocabularies of every registered locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusVocabulary {
    /// Label used for the best-performing entry (e.g. "Winner")
    pub winner: &'static str,

    /// Label used for an entry that did not work (e.g. "Failed")
    pub failed: &'static str,
}

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Language code (e.g., "en", "th")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Thai")
    pub name: &'static str,

    /// Native name of the locale (e.g., "English", "ไทย")
    pub native_name: &'static str,

    /// Whether this is the default locale (exactly one should be true)
    pub is_default: bool,

    /// Whether this locale is enabled for rendering
    pub enabled: bool,

    /// Status labels as they appear in this locale's dictionary
    pub status_vocabulary: StatusVocabulary,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if no default locale is found or if several are defined
    /// (this indicates a registry configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations: English (default) and Thai.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
            status_vocabulary: StatusVocabulary {
                winner: "Winner",
                failed: "Failed",
            },
        },
        LocaleConfig {
            code: "th",
            name: "Thai",
            native_name: "ไทย",
            is_default: false,
            enabled: true,
            status_vocabulary: StatusVocabulary {
                winner: "ชนะเลิศ",
                failed: "ล้มเหลว",
            },
        },
    ]
}
