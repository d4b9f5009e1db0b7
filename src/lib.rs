//! Localized landing pages for a research study.
//!
//! Content lives in per-locale dictionaries addressed by dotted paths. The
//! [`content::ContentStore`] resolves them into typed sections, the
//! [`page`] composer renders those through leptos views and the
//! [`session`] keeps the active locale, path and animation state between
//! renders. [`export::export_site`] writes every page as static HTML.

pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod i18n;
pub mod metrics;
pub mod page;
pub mod render;
pub mod router;
pub mod session;

pub use config::Config;
pub use content::ContentStore;
pub use error::{ContentError, ContentResult};
pub use session::Session;
