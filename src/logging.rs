// src/logging.rs
// =============================================================================
// Diagnostic logging with `tracing`.
//
// Progress lines ("Step1 - ...: OK.") are printed to stdout by the pipeline
// and are always shown. The tracing subscriber set up here is separate: it
// writes debug details (pages requested, bytes written) to stderr, filtered
// by RUST_LOG or the --log-level flag.
// =============================================================================

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

// Installs the global subscriber
//
// RUST_LOG wins over `level` when it is set and valid.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log filter '{}'", level))?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr));

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    Ok(())
}
