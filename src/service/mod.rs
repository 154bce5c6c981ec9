//! Remote collaborators: where the target comes from and who decides what a
//! real word is
//!
//! The game only talks to these traits. `HttpWordService` is the daily-word
//! API; `WordList` and `FixedTarget` cover offline play.

mod http;
mod local;

pub use http::{HttpWordService, ValidateRequest, ValidateResponse, WordOfTheDay};
pub use local::{FixedTarget, WordList};

use crate::core::{Word, WordError};
use thiserror::Error;

/// Failures talking to a word source or validator
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Word service returned an unusable target {word:?}: {source}")]
    InvalidTarget { word: String, source: WordError },

    #[error("Word list is empty")]
    EmptyWordList,

    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Supplies the target word for a session
pub trait WordProvider {
    /// Fetch the word the player has to find
    ///
    /// # Errors
    /// Returns `ServiceError` if the source is unreachable or yields something
    /// that is not a 5-letter word.
    fn fetch_target(&self) -> Result<Word, ServiceError>;
}

/// Decides whether a complete guess is a real word
pub trait WordValidator {
    /// # Errors
    /// Returns `ServiceError` if the validator cannot be reached.
    fn is_valid(&self, word: &Word) -> Result<bool, ServiceError>;
}
