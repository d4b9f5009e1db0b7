//! Content error taxonomy.
//!
//! These are the hard failures raised at the content store boundary. They
//! describe authoring bugs (a missing headline, a mis-shaped metrics list, an
//! unknown locale) rather than runtime conditions, so callers either abort the
//! render or, under the lenient policy, blank out the affected section.
//! Cosmetic degradations (unknown colours, unknown status labels, broken
//! images) never produce a `ContentError`.

use crate::content::Shape;
use anyhow::bail;
use std::str::FromStr;
use thiserror::Error;

/// Result type alias for content operations
pub type ContentResult<T> = std::result::Result<T, ContentError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    /// The path does not exist in the locale's dictionary
    #[error("missing content '{path}' for locale '{locale}'")]
    MissingContent { path: String, locale: String },

    /// The path exists but holds a value of a different structure
    #[error("content '{path}' for locale '{locale}' should be a {expected}, found {found}")]
    ShapeMismatch {
        path: String,
        locale: String,
        expected: Shape,
        found: String,
    },

    /// The locale code is unknown or disabled
    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),

    /// The dotted path is empty or has an empty segment
    #[error("invalid content path '{0}'")]
    InvalidPath(String),
}

/// How content errors are treated once content is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentPolicy {
    /// Abort with the error (development)
    #[default]
    Strict,
    /// Log, count and render the failing section blank (production)
    Lenient,
}

impl FromStr for ContentPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ContentPolicy::Strict),
            "lenient" => Ok(ContentPolicy::Lenient),
            other => bail!("Unknown content policy '{}'. Expected strict or lenient", other),
        }
    }
}

impl ContentError {
    /// The content path this error refers to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            ContentError::MissingContent { path, .. }
            | ContentError::ShapeMismatch { path, .. }
            | ContentError::InvalidPath(path) => Some(path),
            ContentError::UnsupportedLocale(_) => None,
        }
    }
}
