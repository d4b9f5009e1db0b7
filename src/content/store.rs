//! Content store: locale-keyed dictionaries addressed by dotted path.
//!
//! Dictionaries are nested JSON documents, one per locale. The store is
//! read-only once loaded; every loader runs the schema validator exactly once
//! so shape problems surface at load time instead of mid-render. Under the
//! lenient policy validation errors are logged and rendering blanks the
//! affected sections instead.

use crate::content::{ContentNode, Record, Scalar, Shape};
use crate::error::{ContentError, ContentPolicy, ContentResult};
use crate::i18n::{ContentValidator, Locale};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

const BUNDLED_EN: &str = include_str!("../../locales/en.json");
const BUNDLED_TH: &str = include_str!("../../locales/th.json");

/// Dictionary text compiled into the binary for a locale.
fn bundled_dictionary(locale: Locale) -> Option<&'static str> {
    match locale.code() {
        "en" => Some(BUNDLED_EN),
        "th" => Some(BUNDLED_TH),
        _ => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    dictionaries: HashMap<Locale, Value>,
}

impl ContentStore {
    /// Build a store from already-parsed dictionaries without validating.
    ///
    /// Loaders go through [`ContentStore::validated`]; this is the raw
    /// constructor for tooling and tests that need to inspect broken content.
    pub fn from_dictionaries<I>(dictionaries: I) -> Self
    where
        I: IntoIterator<Item = (Locale, Value)>,
    {
        Self {
            dictionaries: dictionaries.into_iter().collect(),
        }
    }

    /// Load the dictionaries compiled into the binary.
    pub fn bundled() -> Result<Self> {
        let mut dictionaries = HashMap::new();
        for locale in Locale::enabled() {
            let raw = bundled_dictionary(locale)
                .with_context(|| format!("No bundled dictionary for locale '{}'", locale))?;
            let value: Value = serde_json::from_str(raw)
                .with_context(|| format!("Bundled dictionary for '{}' is not valid JSON", locale))?;
            dictionaries.insert(locale, value);
        }

        info!("Loaded {} bundled dictionaries", dictionaries.len());
        Self::from_dictionaries(dictionaries).validated()
    }

    /// Load `<code>.json` for every enabled locale from a directory.
    pub fn from_dir(dir: &Path, policy: ContentPolicy) -> Result<Self> {
        let mut dictionaries = HashMap::new();
        for locale in Locale::enabled() {
            let path = dir.join(format!("{}.json", locale.code()));
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
            let value: Value = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse dictionary {}", path.display()))?;
            debug!("Read dictionary {}", path.display());
            dictionaries.insert(locale, value);
        }

        info!(
            "Loaded {} dictionaries from {}",
            dictionaries.len(),
            dir.display()
        );
        Self::from_dictionaries(dictionaries).checked(policy)
    }

    /// Validate according to the content policy.
    ///
    /// Strict stores must be error free; lenient stores only log the problems.
    pub fn checked(self, policy: ContentPolicy) -> Result<Self> {
        match policy {
            ContentPolicy::Strict => self.validated(),
            ContentPolicy::Lenient => {
                let report = ContentValidator::validate(&self);
                for problem in report.errors.iter().chain(&report.warnings) {
                    warn!("Content problem: {}", problem);
                }
                Ok(self)
            }
        }
    }

    /// Run the schema validator; errors abort, warnings are logged.
    pub fn validated(self) -> Result<Self> {
        let report = ContentValidator::validate(&self);

        for warning in &report.warnings {
            warn!("Content warning: {}", warning);
        }

        if report.has_errors() {
            bail!(
                "Content validation failed with {} error(s):\n  {}",
                report.errors.len(),
                report.errors.join("\n  ")
            );
        }

        Ok(self)
    }

    /// Locales this store holds a dictionary for, in registry order.
    pub fn locales(&self) -> Vec<Locale> {
        Locale::enabled()
            .into_iter()
            .filter(|locale| self.dictionaries.contains_key(locale))
            .collect()
    }

    /// Resolve a dotted path in a locale's dictionary and check its shape.
    ///
    /// There is no fallback to the default locale: a key missing from the
    /// requested locale is `MissingContent`.
    pub fn resolve(&self, path: &str, locale: Locale, shape: Shape) -> ContentResult<ContentNode> {
        if path.is_empty() || path.split('.').any(str::is_empty) {
            return Err(ContentError::InvalidPath(path.to_string()));
        }

        let missing = || ContentError::MissingContent {
            path: path.to_string(),
            locale: locale.code().to_string(),
        };

        let mut value = self.dictionaries.get(&locale).ok_or_else(missing)?;
        for segment in path.split('.') {
            value = match value {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            }
            .ok_or_else(missing)?;
        }

        let mismatch = |found: String| ContentError::ShapeMismatch {
            path: path.to_string(),
            locale: locale.code().to_string(),
            expected: shape,
            found,
        };

        let node = ContentNode::from_json(value).map_err(mismatch)?;
        if node.shape() != shape {
            return Err(mismatch(node.shape().to_string()));
        }

        Ok(node)
    }

    /// Resolve a scalar and render it as text.
    pub fn text(&self, path: &str, locale: Locale) -> ContentResult<String> {
        match self.resolve(path, locale, Shape::Scalar)? {
            ContentNode::Scalar(scalar) => Ok(scalar.to_string()),
            ContentNode::RecordList(_) => unreachable!("resolve checked the shape"),
        }
    }

    /// Resolve a scalar that must be numeric.
    pub fn number(&self, path: &str, locale: Locale) -> ContentResult<f64> {
        match self.resolve(path, locale, Shape::Scalar)? {
            ContentNode::Scalar(scalar) => {
                scalar
                    .as_number()
                    .ok_or_else(|| ContentError::ShapeMismatch {
                        path: path.to_string(),
                        locale: locale.code().to_string(),
                        expected: Shape::Scalar,
                        found: format!("non-numeric text '{}'", scalar),
                    })
            }
            ContentNode::RecordList(_) => unreachable!("resolve checked the shape"),
        }
    }

    /// Resolve an ordered record list.
    pub fn records(&self, path: &str, locale: Locale) -> ContentResult<Vec<Record>> {
        match self.resolve(path, locale, Shape::RecordList)? {
            ContentNode::RecordList(records) => Ok(records),
            ContentNode::Scalar(_) => unreachable!("resolve checked the shape"),
        }
    }

    /// Resolve a list of plain values as text, in order.
    pub fn text_list(&self, path: &str, locale: Locale) -> ContentResult<Vec<String>> {
        self.records(path, locale)?
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                record
                    .value()
                    .map(Scalar::to_string)
                    .ok_or_else(|| ContentError::ShapeMismatch {
                        path: format!("{}.{}", path, idx),
                        locale: locale.code().to_string(),
                        expected: Shape::Scalar,
                        found: "record".to_string(),
                    })
            })
            .collect()
    }
}
