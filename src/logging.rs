//! Logging configuration and initialization.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Initialize the logging system.
///
/// Output goes to stdout, or is appended to `logfile` when one is given.
/// File logging always disables ANSI colors; console logging keeps them
/// unless `no_color` is set. The level defaults to `info` and can be
/// overridden via `RUST_LOG`.
pub fn init(logfile: Option<&Path>, no_color: bool) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());

    match logfile {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let file = Arc::new(file);
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(file)
                        .with_ansi(false)
                        .with_target(false),
                )
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stdout)
                        .with_ansi(!no_color)
                        .with_target(false),
                )
                .with(filter)
                .init();
        }
    }

    Ok(())
}
