//! Main entry point for the feedzip CLI application.
//!
//! Parses command-line arguments, configures logging and runs the
//! feed-to-archive pipeline once. The process exits zero on a completed
//! run (individual entries may still have been skipped) and non-zero on
//! any fatal precondition or feed failure.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

use feedzip::{logging, pipeline, Cli, ElementLocator, Error};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.logfile.as_deref(), cli.no_color)
        .context("failed to initialize logging")?;
    info!("feedzip {}", env!("CARGO_PKG_VERSION"));

    let output_dir = resolve_output_dir(&cli.output_folder)?;
    info!("output dir: {}", output_dir.display());

    let locator = ElementLocator::article()?;
    let archive = pipeline::run(&cli.url, &output_dir, cli.limit, &locator).await?;
    info!("archive written: {}", archive.display());

    Ok(())
}

/// Resolve the output directory to an absolute path.
///
/// Relative paths are resolved against the current working directory;
/// a path that does not exist fails here, before anything else runs.
fn resolve_output_dir(path: &Path) -> Result<PathBuf> {
    let resolved = path
        .canonicalize()
        .map_err(|_| Error::NotADirectory(path.to_path_buf()))?;
    if !resolved.is_dir() {
        return Err(Error::NotADirectory(resolved).into());
    }
    Ok(resolved)
}
