//! Core domain types for Wordle
//!
//! This module contains the guess-evaluation core: normalization, the word
//! type, and letter classification. Everything here is pure and has no I/O.

mod feedback;
mod normalize;
mod word;

pub use feedback::{LetterClassification, MatchResult, classify};
pub use normalize::normalize;
pub use word::{WORD_LEN, Word, WordError};
