//! Offline classification command
//!
//! Scores a guess against a target without touching the word service.

use crate::core::{MatchResult, Word, WordError, classify};

/// A classified guess, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub target: Word,
    pub guess: Word,
    pub result: MatchResult,
}

/// Normalize both words and classify the guess
///
/// # Errors
///
/// Returns an error if either word is not exactly 5 ASCII letters.
pub fn check_guess(target: &str, guess: &str) -> Result<CheckReport, WordError> {
    let target = Word::new(target)?;
    let guess = Word::new(guess)?;
    let result = classify(&target, &guess);

    Ok(CheckReport {
        target,
        guess,
        result,
    })
}
