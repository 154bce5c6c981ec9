//! Offline word sources
//!
//! Word list loading for playing without the daily-word API.

use super::{ServiceError, WordProvider, WordValidator};
use crate::core::Word;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A dictionary of playable words
///
/// Acts as both validator (membership) and provider (random pick).
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl WordList {
    /// Load words from a file, one per line
    ///
    /// Blank and invalid lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Io` if the file cannot be read, or
    /// `ServiceError::EmptyWordList` if no line holds a valid word.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_daily::service::WordList;
    ///
    /// let words = WordList::load("data/words.txt").unwrap();
    /// println!("Loaded {} words", words.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let list = Self::from_lines(content.lines());
        debug!(path = %path.display(), words = list.len(), "loaded word list");

        if list.is_empty() {
            return Err(ServiceError::EmptyWordList);
        }
        Ok(list)
    }

    /// Build a list from string slices, skipping anything that is not a word
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::service::WordList;
    ///
    /// let words = WordList::from_lines(["pools", "toolong", "spool"]);
    /// assert_eq!(words.len(), 2);
    /// ```
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut list = Self::default();
        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Ok(word) = Word::new(trimmed)
                && list.lookup.insert(word.clone())
            {
                list.words.push(word);
            }
        }
        list
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }
}

impl WordProvider for WordList {
    fn fetch_target(&self) -> Result<Word, ServiceError> {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(ServiceError::EmptyWordList)
    }
}

impl WordValidator for WordList {
    fn is_valid(&self, word: &Word) -> Result<bool, ServiceError> {
        Ok(self.contains(word))
    }
}

/// Provider that always answers with the same word
#[derive(Debug, Clone)]
pub struct FixedTarget(pub Word);

impl WordProvider for FixedTarget {
    fn fetch_target(&self) -> Result<Word, ServiceError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn from_lines_skips_invalid_and_blank() {
        let list = WordList::from_lines(["pools", "", "  ", "toolong", "ab1de", " abide "]);

        assert_eq!(list.len(), 2);
        assert!(list.contains(&word("POOLS")));
        assert!(list.contains(&word("abide")));
    }

    #[test]
    fn from_lines_deduplicates_case_insensitively() {
        let list = WordList::from_lines(["pools", "POOLS", "Pools"]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn validator_checks_membership() {
        let list = WordList::from_lines(["pools", "spool"]);
        assert!(list.is_valid(&word("spool")).unwrap());
        assert!(!list.is_valid(&word("error")).unwrap());
    }

    #[test]
    fn provider_picks_from_list() {
        let list = WordList::from_lines(["pools", "spool", "abide"]);
        for _ in 0..20 {
            let target = list.fetch_target().unwrap();
            assert!(list.contains(&target));
        }
    }

    #[test]
    fn empty_list_cannot_provide() {
        let list = WordList::from_lines(std::iter::empty());
        assert!(list.is_empty());
        assert!(matches!(
            list.fetch_target(),
            Err(ServiceError::EmptyWordList)
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        assert!(matches!(
            WordList::load("/nonexistent/wordle_daily/words.txt"),
            Err(ServiceError::Io(_))
        ));
    }

    #[test]
    fn fixed_target_returns_its_word() {
        let provider = FixedTarget(word("pools"));
        assert_eq!(provider.fetch_target().unwrap(), word("POOLS"));
    }
}
