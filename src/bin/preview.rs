//! Preview binary - renders one page and prints the HTML to stdout
//!
//! Usage:
//!   cargo run --bin preview                               # English home page
//!   cargo run --bin preview -- /th/about-the-study        # Locale from the path
//!   cargo run --bin preview -- /volunteer-information --locale th
//!   cargo run --bin preview -- / --lenient                # Blank broken sections
//!
//! Honors the same environment variables as the export binary
//! (SITE_CONTENT_DIR, SITE_DEFAULT_LOCALE, SITE_CONTENT_POLICY, PROFILE_*).

use anyhow::{bail, Context, Result};
use study_site::metrics::RenderMetrics;
use study_site::page::ContentPolicy;
use study_site::{Config, ContentStore, Session};
use tracing::info;

struct PreviewArgs {
    path: String,
    locale: Option<String>,
    lenient: bool,
}

impl PreviewArgs {
    fn parse(args: &[String]) -> Result<Self> {
        let mut parsed = Self {
            path: "/".to_string(),
            locale: None,
            lenient: false,
        };

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--locale" => {
                    let code = iter.next().context("--locale needs a value")?;
                    parsed.locale = Some(code.clone());
                }
                "--lenient" => parsed.lenient = true,
                other if other.starts_with("--") => bail!("Unknown option {}", other),
                path => parsed.path = path.to_string(),
            }
        }

        Ok(parsed)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so the page can be piped
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("study_site=info".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = PreviewArgs::parse(&args)?;

    info!("Loading configuration...");
    let config = Config::from_env()?;
    let policy = if args.lenient {
        ContentPolicy::Lenient
    } else {
        config.content_policy
    };

    let store = match &config.content_dir {
        Some(dir) => ContentStore::from_dir(dir, policy)?,
        None => ContentStore::bundled()?,
    };

    let metrics = RenderMetrics::new();
    let mut session = Session::new(&store, &config.profile, &metrics, config.default_locale, policy);
    session.navigate(&args.path)?;
    if let Some(code) = &args.locale {
        session.set_locale(code)?;
    }

    info!("Rendering {} in {}", session.path(), session.locale());
    let html = session.render()?;
    println!("{}", html);

    let report = metrics.report();
    info!(
        "{} content errors, {} cosmetic fallbacks",
        report.content_errors, report.cosmetic_fallbacks
    );
    Ok(())
}
