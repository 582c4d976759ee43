use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Filter directives, in `EnvFilter` syntax.
pub const LOG_ENV: &str = "QRDESK_LOG";

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// CLI mode: human-readable lines on stderr, `warn` unless `QRDESK_LOG` says
/// otherwise.
pub fn init_cli() {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter("warn"))
        .with(layer)
        .try_init();
}

/// TUI mode: stderr belongs to the terminal, so logs go to `log_file` as JSON
/// lines, or nowhere.
pub fn init_tui(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let layer = fmt::layer()
        .json()
        .with_writer(std::sync::Mutex::new(file))
        .with_target(false);
    let _ = tracing_subscriber::registry()
        .with(filter("info"))
        .with(layer)
        .try_init();
    Ok(())
}

#[cfg(test)]
#[path = "tests/logging_tests.rs"]
mod tests;
