//! mdpress CLI - mirrored Markdown-to-HTML converter.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use mdpress_static::{collect_targets, Converter, SiteRoots};

mod config;

#[derive(Parser)]
#[command(name = "mdpress")]
#[command(about = "Convert a tree of Markdown documents into mirrored standalone HTML pages")]
#[command(version)]
struct Cli {
    /// Markdown files or directories to convert; defaults to the configured
    /// source directory when omitted
    paths: Vec<PathBuf>,

    /// Path to mdpress.toml config file
    #[arg(short, long, default_value = "mdpress.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let file_config = config::load_config(&cli.config)?;

    let base = std::fs::canonicalize(&file_config.paths.base)
        .with_context(|| format!("Base root not found: {}", file_config.paths.base))?;
    let output = absolute_under(&base, &file_config.paths.output);
    let default_source = absolute_under(&base, &file_config.paths.default_source);

    let roots = SiteRoots::new(base, output);

    let targets = collect_targets(&roots, &cli.paths, &default_source);
    if targets.is_empty() {
        bail!("No markdown files found");
    }

    tracing::info!("Converting {} files...", targets.len());

    let converter = Converter::new(roots.clone());
    for source in &targets {
        let output = converter.convert(source)?;
        tracing::info!(
            "{} -> {}",
            display_relative(roots.base(), source),
            display_relative(roots.base(), &output)
        );
    }

    tracing::info!("Done.");

    Ok(())
}

/// Join a configured path under the base root unless it is already absolute.
fn absolute_under(base: &Path, configured: &str) -> PathBuf {
    let path = PathBuf::from(configured);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Render a path relative to the base root for progress output.
fn display_relative(base: &Path, path: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}
