//! Wordle word representation
//!
//! A Word stores a normalized 5-letter word as uppercase ASCII bytes.

use super::normalize;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every target and guess
pub const WORD_LEN: usize = 5;

/// A 5-letter Wordle word, uppercased for case-insensitive comparison
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is normalized first, so `"pools"` and `"POOLS"` produce the
    /// same word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    ///
    /// let word = Word::new("pools").unwrap();
    /// assert_eq!(word.text(), "POOLS");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let raw = text.as_ref().trim();

        // Checked before uppercasing: some non-ASCII letters uppercase to ASCII
        if !raw.is_ascii() {
            return Err(WordError::NonAscii);
        }
        let text = normalize(raw);

        // ASCII from here on, so bytes == chars
        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { chars })
    }

    /// Build a word from already-collected letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an ASCII letter.
    pub fn from_letters(letters: [u8; WORD_LEN]) -> Result<Self, WordError> {
        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }
        Ok(Self {
            chars: letters.map(|b| b.to_ascii_uppercase()),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Only uppercase ASCII letters are ever stored
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used for duplicate-letter accounting during classification.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("POOLS").unwrap();
        assert_eq!(word.text(), "POOLS");
        assert_eq!(word.chars(), b"POOLS");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("pools").unwrap();
        assert_eq!(word.text(), "POOLS");

        let word2 = Word::new("PoOlS").unwrap();
        assert_eq!(word2.text(), "POOLS");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  abide\n").unwrap();
        assert_eq!(word.text(), "ABIDE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
        // Letters whose uppercase form is ASCII
        assert_eq!(Word::new("ſtorm"), Err(WordError::NonAscii));
        assert_eq!(Word::new("ıdeal"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_from_letters() {
        let word = Word::from_letters(*b"abide").unwrap();
        assert_eq!(word.text(), "ABIDE");
        assert!(Word::from_letters(*b"ab1de").is_err());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("abide").unwrap();
        assert_eq!(word.char_at(0), b'A');
        assert_eq!(word.char_at(4), b'E');
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("pools").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.get(&b'O'), Some(&2));
        assert_eq!(counts.get(&b'P'), Some(&1));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "error".parse().unwrap();
        assert_eq!(format!("{word}"), "ERROR");
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("pools").unwrap(), Word::new("POOLS").unwrap());
        assert_ne!(Word::new("pools").unwrap(), Word::new("spool").unwrap());
    }
}
