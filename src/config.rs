//! Game and word-service settings
//!
//! Populated from the command line in `main`; defaults point at the public
//! daily-word API.

use std::path::PathBuf;

/// Default endpoint returning `{ "word": ... }`
pub const DEFAULT_WORD_URL: &str = "https://words.dev-apis.com/word-of-the-day";

/// Default endpoint accepting `{ "word": ... }` and returning `{ "validWord": ... }`
pub const DEFAULT_VALIDATE_URL: &str = "https://words.dev-apis.com/validate-word";

/// Number of guesses a player gets
pub const DEFAULT_ROWS: usize = 6;

/// Largest board the front ends will draw
pub const MAX_ROWS: usize = 20;

/// Where the word service lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub word_url: String,
    pub validate_url: String,
    /// Request timeout; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            word_url: DEFAULT_WORD_URL.to_string(),
            validate_url: DEFAULT_VALIDATE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Everything needed to start a session
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub rows: Option<usize>,
    pub service: ServiceConfig,
    /// Offline mode: validate against (and draw targets from) this file
    pub dictionary: Option<PathBuf>,
    /// Force the target instead of asking the provider
    pub target: Option<String>,
}

impl GameConfig {
    /// Row count, clamped to `1..=MAX_ROWS`
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.unwrap_or(DEFAULT_ROWS).clamp(1, MAX_ROWS)
    }
}
