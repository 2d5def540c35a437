//! Converts one saved documentation page into a frontmatter-markdown
//! file with locally mirrored images.
//!
//! Save a rendered page (browser "Save As", or any headless fetch that
//! runs the page's scripts) and point this at it:
//!
//! ```text
//! cargo run --example convert_page -- page.html https://docs.example.com [output-dir]
//! ```

use anyhow::{Context, Result};
use docport::{ConvertConfig, convert_and_write_page};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: convert_page <page.html> <origin-url> [output-dir]";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let html_path = args.next().context(USAGE)?;
    let origin = args.next().context(USAGE)?;
    let output_dir = args.next().unwrap_or_else(|| "converted".to_string());

    let html = tokio::fs::read_to_string(&html_path)
        .await
        .with_context(|| format!("failed to read {html_path}"))?;

    let config = ConvertConfig::builder()
        .origin(origin)
        .content_root(&output_dir)
        .build()?;

    let report = convert_and_write_page(&html, &config).await?;

    tracing::info!("Page written to {}", report.outcome.path().display());
    for failure in &report.failed_images {
        tracing::warn!(
            "Image kept its remote reference: {} ({})",
            failure.url,
            failure.reason
        );
    }

    Ok(())
}
