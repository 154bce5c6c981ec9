//! A single row of the board

use crate::core::{MatchResult, WORD_LEN, Word};

/// Letters typed into one row, plus its score once checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    letters: [Option<u8>; WORD_LEN],
    result: Option<MatchResult>,
}

impl Row {
    #[must_use]
    pub const fn letters(&self) -> &[Option<u8>; WORD_LEN] {
        &self.letters
    }

    #[must_use]
    pub const fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Letter at `cell` as a char, if filled
    #[must_use]
    pub fn letter_at(&self, cell: usize) -> Option<char> {
        self.letters.get(cell).copied().flatten().map(char::from)
    }

    /// Filled letters in order
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().flatten().map(|&b| char::from(b)).collect()
    }

    pub(crate) fn is_last_filled(&self) -> bool {
        self.letters[WORD_LEN - 1].is_some()
    }

    /// The row as a word, once every cell is filled
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let mut letters = [0u8; WORD_LEN];
        for (slot, letter) in letters.iter_mut().zip(self.letters) {
            *slot = letter?;
        }
        Word::from_letters(letters).ok()
    }

    pub(crate) fn set(&mut self, cell: usize, letter: u8) {
        self.letters[cell] = Some(letter.to_ascii_uppercase());
    }

    pub(crate) fn clear(&mut self, cell: usize) {
        self.letters[cell] = None;
    }

    pub(crate) fn score(&mut self, result: MatchResult) {
        self.result = Some(result);
    }
}
