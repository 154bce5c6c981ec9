//! Letter-by-letter feedback for a guess
//!
//! Each position of a guess is classified as:
//! - Matching (green): right letter, right position
//! - Close (yellow): letter appears elsewhere in the target
//! - `NotMatching` (gray): letter absent, or every occurrence already credited
//!
//! Duplicate letters are capped at the number of occurrences in the target.
//! Exact matches are credited first; remaining occurrences go to Close
//! positions from left to right.

use super::{WORD_LEN, Word, WordError};
use std::collections::BTreeSet;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterClassification {
    NotMatching,
    Close,
    Matching,
}

impl LetterClassification {
    /// Emoji square used in share lines
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Matching => '🟩',
            Self::Close => '🟨',
            Self::NotMatching => '⬜',
        }
    }
}

/// Outcome of comparing a guess against the target
///
/// The three index sets partition `0..WORD_LEN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub player_has_won: bool,
    pub matching_indexes: BTreeSet<usize>,
    pub close_indexes: BTreeSet<usize>,
    pub not_matching_indexes: BTreeSet<usize>,
}

/// Classify every letter of `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact position matches and remove them from the
///    per-letter pool of target occurrences
/// 2. Second pass (left to right): a remaining letter is Close while the pool
///    still holds an occurrence of it, otherwise `NotMatching`
///
/// # Examples
/// ```
/// use wordle_daily::core::{Word, classify};
///
/// let target = Word::new("abide").unwrap();
/// let guess = Word::new("error").unwrap();
/// let result = classify(&target, &guess);
///
/// assert!(result.close_indexes.contains(&0));
/// assert_eq!(result.not_matching_indexes.len(), 4);
/// assert!(!result.player_has_won);
/// ```
#[must_use]
pub fn classify(target: &Word, guess: &Word) -> MatchResult {
    let mut remaining = target.char_counts();
    let mut matching_indexes = BTreeSet::new();
    let mut close_indexes = BTreeSet::new();
    let mut not_matching_indexes = BTreeSet::new();

    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            matching_indexes.insert(i);
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, &letter) in guess.chars().iter().enumerate() {
        if matching_indexes.contains(&i) {
            continue;
        }
        match remaining.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                close_indexes.insert(i);
            }
            _ => {
                not_matching_indexes.insert(i);
            }
        }
    }

    MatchResult {
        player_has_won: matching_indexes.len() == WORD_LEN,
        matching_indexes,
        close_indexes,
        not_matching_indexes,
    }
}

impl MatchResult {
    /// Normalize, validate and classify two raw strings
    ///
    /// # Errors
    /// Returns `WordError` if either string is not a valid 5-letter word.
    pub fn from_strs(target: &str, guess: &str) -> Result<Self, WordError> {
        Ok(classify(&Word::new(target)?, &Word::new(guess)?))
    }

    /// Classification at a single position
    ///
    /// Positions outside the word report `NotMatching`.
    #[must_use]
    pub fn classification_at(&self, index: usize) -> LetterClassification {
        if self.matching_indexes.contains(&index) {
            LetterClassification::Matching
        } else if self.close_indexes.contains(&index) {
            LetterClassification::Close
        } else {
            LetterClassification::NotMatching
        }
    }

    /// Classification of every position, in order
    #[must_use]
    pub fn classifications(&self) -> [LetterClassification; WORD_LEN] {
        std::array::from_fn(|i| self.classification_at(i))
    }

    /// Share-line form, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.classifications()
            .iter()
            .map(|c| c.emoji())
            .collect()
    }
}
