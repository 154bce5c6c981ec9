//! Tracing setup
//!
//! Filter comes from `RUST_LOG` (default `warn`). Logs go to a file when one
//! is given, otherwise to stderr. While the TUI owns the terminal, stderr
//! output would corrupt the screen, so without a file logs are discarded.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Where log lines end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Discard,
}

impl<'a> LogTarget<'a> {
    /// Pick a target for a front end; `owns_terminal` is true for the TUI
    #[must_use]
    pub fn choose(log_file: Option<&'a Path>, owns_terminal: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if owns_terminal => Self::Discard,
            None => Self::Stderr,
        }
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match target {
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!(e))
}
