use anyhow::{Context, Result};
use study_site::export::export_site;
use study_site::metrics::RenderMetrics;
use study_site::{Config, ContentStore};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("study_site=info".parse()?),
        )
        .init();

    info!("Starting static site export");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Step 1: Load and validate content
    let store = match &config.content_dir {
        Some(dir) => {
            info!("Loading dictionaries from {}", dir.display());
            ContentStore::from_dir(dir, config.content_policy)
                .context("Failed to load site content")?
        }
        None => {
            info!("Using bundled dictionaries");
            ContentStore::bundled()?
        }
    };

    // Step 2: Render every page
    let summary = export_site(&store, &config, RenderMetrics::global())?;

    info!(
        "Wrote {} pages to {} ({:.1}% clean)",
        summary.pages_written(),
        config.output_dir.display(),
        summary.report.clean_page_rate
    );
    Ok(())
}
