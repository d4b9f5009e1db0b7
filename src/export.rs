//! Static export of every page in every enabled locale.

use crate::config::Config;
use crate::content::ContentStore;
use crate::i18n::Locale;
use crate::metrics::{MetricsReport, RenderMetrics};
use crate::page::{render_document, RenderContext};
use crate::router::Route;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the render report written next to the pages.
pub const REPORT_FILE: &str = "render-report.json";

#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Every file written, in write order
    pub files: Vec<PathBuf>,
    pub report: MetricsReport,
}

impl ExportSummary {
    pub fn pages_written(&self) -> usize {
        self.files
            .iter()
            .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
            .count()
    }
}

/// Relative output path of a route's page within a locale directory.
pub fn page_file(route: Option<Route>) -> PathBuf {
    match route {
        Some(Route::Home) => PathBuf::from("index.html"),
        Some(other) => Path::new(other.path().trim_start_matches('/')).join("index.html"),
        None => PathBuf::from("404.html"),
    }
}

/// Render every route (and the not-found page) for every enabled locale into
/// `config.output_dir`, plus a root `index.html` in the default locale.
pub fn export_site(
    store: &ContentStore,
    config: &Config,
    metrics: &RenderMetrics,
) -> Result<ExportSummary> {
    let out = &config.output_dir;
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory {}", out.display()))?;

    let routes: Vec<Option<Route>> = Route::ALL
        .into_iter()
        .map(Some)
        .chain(std::iter::once(None))
        .collect();

    let mut files = Vec::new();

    for locale in Locale::enabled() {
        let ctx = RenderContext::new(store, locale, config.content_policy, &config.profile, metrics);
        info!("Exporting {} pages for locale {}", routes.len(), locale);

        for route in &routes {
            let html = render_document(*route, &ctx)
                .with_context(|| format!("Failed to render {:?} for locale {}", route, locale))?;
            let path = out.join(locale.code()).join(page_file(*route));
            write_file(&path, &html)?;
            files.push(path);
        }
    }

    let ctx = RenderContext::new(
        store,
        config.default_locale,
        config.content_policy,
        &config.profile,
        metrics,
    );
    let html = render_document(Some(Route::Home), &ctx)
        .context("Failed to render the root index page")?;
    let index = out.join("index.html");
    write_file(&index, &html)?;
    files.push(index);

    let report = metrics.report();
    let report_path = out.join(REPORT_FILE);
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize render report")?;
    write_file(&report_path, &json)?;
    files.push(report_path);

    info!(
        "Export finished: {} pages ({} with content errors), {} content errors, {} cosmetic fallbacks",
        report.pages_rendered, report.pages_with_errors, report.content_errors, report.cosmetic_fallbacks
    );

    Ok(ExportSummary { files, report })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_file_layout() {
        assert_eq!(page_file(Some(Route::Home)), PathBuf::from("index.html"));
        assert_eq!(
            page_file(Some(Route::AboutStudy)),
            PathBuf::from("about-the-study/index.html")
        );
        assert_eq!(
            page_file(Some(Route::VolunteerInformation)),
            PathBuf::from("volunteer-information/index.html")
        );
        assert_eq!(page_file(None), PathBuf::from("404.html"));
    }
}
