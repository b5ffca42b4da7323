//! Banner preview renderer
//!
//! Renders the banners described in a config file to static HTML.

use anyhow::Context;
use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use page_banner::config::AppConfig;
use page_banner::render::write_output;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--output -` stays clean (M-LOG-STRUCTURED)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load .env (if present)
    let _ = dotenv();

    let config = AppConfig::load().context("Failed to load banner configuration")?;

    info!(
        name: "config.loaded",
        banners = config.banners.len(),
        output = %config.output.path,
        document = config.output.document,
        "Banner configuration loaded"
    );

    let summary = write_output(&config).context("Failed to render banners")?;

    info!(
        name: "render.completed",
        destination = %summary.destination,
        bytes = summary.bytes,
        "Done"
    );

    Ok(())
}
