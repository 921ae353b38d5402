mod drawable_parser;
mod error;
mod output;
mod path;
mod png_writer;
mod rasterizer;
mod svg_writer;

use crate::output::{OutputLayout, generate_icons};
use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let layout = OutputLayout::new(".");
    let report = generate_icons(&layout)
        .with_context(|| format!("generating icons from {}", layout.input().display()))?;

    info!(
        svg = %report.svg_path.display(),
        skipped_paths = report.skipped_paths,
        "all {} icons generated",
        report.artifacts.len()
    );
    for artifact in &report.artifacts {
        debug!(path = %artifact.path.display(), size = artifact.size, "artifact");
    }
    info!("for Play Store use {}", layout.play_store_icon().display());
    Ok(())
}
