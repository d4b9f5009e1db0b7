//! Internationalization (i18n): supported locales, locale selection and
//! dictionary validation.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Validated `Locale` handle
//! - `selector`: The active locale of a rendering session
//! - `validator`: Load-time completeness and consistency checks for dictionaries
//!
//! # Example
//!
//! ```rust,ignore
//! use study_site::i18n::{Locale, LocaleSelector};
//!
//! let mut selector = LocaleSelector::new(Locale::default_locale());
//! selector.set_locale("th")?;
//! assert_eq!(selector.language_class(), "lang-th");
//! ```

mod locale;
mod registry;
mod selector;
mod validator;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry, StatusVocabulary};
pub use selector::{language_class_for, LocaleChange, LocaleSelector};
pub use validator::{ContentValidator, ValidationReport};
