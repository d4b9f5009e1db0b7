use crate::i18n::Locale;
use crate::page::{ContentPolicy, ProfileSettings};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Content
    /// Directory of `<code>.json` dictionaries; bundled content when unset
    pub content_dir: Option<PathBuf>,
    pub default_locale: Locale,
    pub content_policy: ContentPolicy,

    // Export
    pub output_dir: PathBuf,

    // Researcher portrait
    pub profile: ProfileSettings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ProfileSettings::default();

        Ok(Self {
            // Content
            content_dir: lookup("SITE_CONTENT_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            default_locale: match lookup("SITE_DEFAULT_LOCALE") {
                Some(code) => Locale::from_code(code.trim())
                    .with_context(|| format!("SITE_DEFAULT_LOCALE '{}' is not supported", code))?,
                None => Locale::default_locale(),
            },
            content_policy: lookup("SITE_CONTENT_POLICY")
                .map(|v| v.parse::<ContentPolicy>())
                .transpose()
                .context("SITE_CONTENT_POLICY is invalid")?
                .unwrap_or_default(),

            // Export
            output_dir: lookup("SITE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dist")),

            // Researcher portrait
            profile: ProfileSettings {
                image_url: lookup("PROFILE_IMAGE_URL").unwrap_or(defaults.image_url),
                fallback_name: lookup("PROFILE_NAME").unwrap_or(defaults.fallback_name),
                avatar_service: lookup("AVATAR_SERVICE_URL").unwrap_or(defaults.avatar_service),
            },
        })
    }
}
