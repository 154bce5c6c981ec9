//! Game session state machine
//!
//! A session owns the target word and the grid of rows. Input flows through
//! explicit transitions:
//!
//! ```text
//! Entering(row, cell) --submit--> Checking --valid, won------> Won
//!        ^                           |     --valid, rows left-> Entering(row + 1, 0)
//!        |                           |     --valid, no rows---> Lost
//!        +-------- invalid word -----+
//! ```
//!
//! `Won` and `Lost` accept no further input. While `Checking`, input is
//! rejected so a second submit cannot race the validator.

mod row;

pub use row::Row;

use crate::core::{LetterClassification, MatchResult, WORD_LEN, Word, classify};
use crate::service::{ServiceError, WordValidator};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info};

/// Where the session is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Entering { row: usize, cell: usize },
    Checking,
    Won,
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Input the session refused
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("The game is over")]
    GameOver,
    #[error("A guess is already being checked")]
    Busy,
    #[error("{0:?} is not a letter")]
    NotALetter(char),
    #[error("Fill all 5 letters before submitting")]
    RowIncomplete,
    #[error("Guesses must be 5 letters, got {0}")]
    WrongLength(usize),
    #[error("No guess is being checked")]
    NotChecking,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// What a finished check did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The validator rejected the guess; the row stays editable
    InvalidWord(Word),
    /// The guess was scored
    Scored { guess: Word, result: MatchResult },
}

/// One game against one target word
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    rows: Vec<Row>,
    state: SessionState,
    /// Cell to return to if the check fails
    resume_cell: usize,
}

impl Session {
    /// Start a session with `rows` guesses (at least one)
    #[must_use]
    pub fn new(target: Word, rows: usize) -> Self {
        Self {
            target,
            rows: vec![Row::default(); rows.max(1)],
            state: SessionState::Entering { row: 0, cell: 0 },
            resume_cell: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The target, for revealing after a loss
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Index of the row currently being filled or checked
    #[must_use]
    pub fn current_row(&self) -> usize {
        match self.state {
            SessionState::Entering { row, .. } => row,
            SessionState::Checking => self.guesses_used(),
            SessionState::Won | SessionState::Lost => self.guesses_used().saturating_sub(1),
        }
    }

    /// Rows already scored
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.rows.iter().filter(|row| row.result().is_some()).count()
    }

    fn entering(&self) -> Result<(usize, usize), SessionError> {
        match self.state {
            SessionState::Entering { row, cell } => Ok((row, cell)),
            SessionState::Checking => Err(SessionError::Busy),
            SessionState::Won | SessionState::Lost => Err(SessionError::GameOver),
        }
    }

    /// Write a letter at the cursor and advance it, stopping at the last cell
    ///
    /// # Errors
    /// Returns `SessionError::NotALetter` for anything but ASCII letters, and
    /// `Busy`/`GameOver` outside of `Entering`.
    pub fn type_letter(&mut self, ch: char) -> Result<(), SessionError> {
        let (row, cell) = self.entering()?;
        if !ch.is_ascii_alphabetic() {
            return Err(SessionError::NotALetter(ch));
        }

        self.rows[row].set(cell, ch as u8);
        let cell = (cell + 1).min(WORD_LEN - 1);
        self.state = SessionState::Entering { row, cell };
        Ok(())
    }

    /// Erase a letter
    ///
    /// On the first cell, or when the row is full, the cell under the cursor is
    /// cleared. Otherwise the cursor steps back first.
    ///
    /// # Errors
    /// Returns `Busy`/`GameOver` outside of `Entering`.
    pub fn backspace(&mut self) -> Result<(), SessionError> {
        let (row, mut cell) = self.entering()?;

        if cell > 0 && !self.rows[row].is_last_filled() {
            cell -= 1;
        }
        self.rows[row].clear(cell);
        self.state = SessionState::Entering { row, cell };
        Ok(())
    }

    /// Replace the current row with `word`, letter by letter
    ///
    /// Line-mode front ends use this instead of individual key presses.
    ///
    /// # Errors
    /// Returns `SessionError::NotALetter` on the first non-letter and
    /// `WrongLength` unless `word` has exactly `WORD_LEN` letters; either way
    /// the row is left cleared. `Busy`/`GameOver` outside of `Entering`.
    pub fn enter_word(&mut self, word: &str) -> Result<(), SessionError> {
        let (row, _) = self.entering()?;
        for cell in 0..WORD_LEN {
            self.rows[row].clear(cell);
        }
        self.state = SessionState::Entering { row, cell: 0 };

        if let Some(bad) = word.chars().find(|ch| !ch.is_ascii_alphabetic()) {
            return Err(SessionError::NotALetter(bad));
        }
        let len = word.chars().count();
        if len != WORD_LEN {
            return Err(SessionError::WrongLength(len));
        }
        for ch in word.chars() {
            self.type_letter(ch)?;
        }
        Ok(())
    }

    /// Lock the current row for validation and hand back the guess
    ///
    /// # Errors
    /// Returns `SessionError::RowIncomplete` unless every cell is filled, and
    /// `Busy`/`GameOver` outside of `Entering`.
    pub fn begin_check(&mut self) -> Result<Word, SessionError> {
        let (row, cell) = self.entering()?;
        let guess = self.rows[row].word().ok_or(SessionError::RowIncomplete)?;

        debug!(row, guess = %guess, "checking guess");
        self.resume_cell = cell;
        self.state = SessionState::Checking;
        Ok(guess)
    }

    /// Apply the validator's verdict to the row being checked
    ///
    /// # Errors
    /// Returns `SessionError::NotChecking` unless `begin_check` succeeded first.
    pub fn finish_check(&mut self, valid: bool) -> Result<CheckOutcome, SessionError> {
        if self.state != SessionState::Checking {
            return Err(SessionError::NotChecking);
        }
        let row = self.guesses_used();
        let guess = self.rows[row].word().ok_or(SessionError::RowIncomplete)?;

        if !valid {
            debug!(row, guess = %guess, "guess rejected");
            self.abort_check();
            return Ok(CheckOutcome::InvalidWord(guess));
        }

        let result = classify(&self.target, &guess);
        self.rows[row].score(result.clone());

        self.state = if result.player_has_won {
            info!(guesses = row + 1, "player won");
            SessionState::Won
        } else if row + 1 < self.rows.len() {
            SessionState::Entering {
                row: row + 1,
                cell: 0,
            }
        } else {
            info!("player lost");
            SessionState::Lost
        };

        Ok(CheckOutcome::Scored { guess, result })
    }

    /// Drop back to editing the current row without scoring it
    pub fn abort_check(&mut self) {
        if self.state == SessionState::Checking {
            self.state = SessionState::Entering {
                row: self.guesses_used(),
                cell: self.resume_cell,
            };
        }
    }

    /// Validate and score the current row in one step
    ///
    /// A validator failure leaves the row editable and is returned as
    /// `SessionError::Service`.
    ///
    /// # Errors
    /// Any error from `begin_check`, or the validator's `ServiceError`.
    pub fn submit<V: WordValidator + ?Sized>(
        &mut self,
        validator: &V,
    ) -> Result<CheckOutcome, SessionError> {
        let guess = self.begin_check()?;
        match validator.is_valid(&guess) {
            Ok(valid) => self.finish_check(valid),
            Err(e) => {
                self.abort_check();
                Err(e.into())
            }
        }
    }

    /// Best classification seen so far for each guessed letter
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, LetterClassification> {
        let mut hints = FxHashMap::default();
        for row in &self.rows {
            let Some(result) = row.result() else {
                continue;
            };
            for (&letter, class) in row.letters().iter().flatten().zip(result.classifications()) {
                let best = hints.entry(letter).or_insert(class);
                *best = (*best).max(class);
            }
        }
        hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct AcceptAll;

    impl WordValidator for AcceptAll {
        fn is_valid(&self, _word: &Word) -> Result<bool, ServiceError> {
            Ok(true)
        }
    }

    struct RejectAll;

    impl WordValidator for RejectAll {
        fn is_valid(&self, _word: &Word) -> Result<bool, ServiceError> {
            Ok(false)
        }
    }

    struct Unreachable;

    impl WordValidator for Unreachable {
        fn is_valid(&self, _word: &Word) -> Result<bool, ServiceError> {
            Err(ServiceError::EmptyWordList)
        }
    }

    /// Counts calls so tests can see the validator was skipped
    #[derive(Default)]
    struct Counting(Cell<usize>);

    impl WordValidator for Counting {
        fn is_valid(&self, _word: &Word) -> Result<bool, ServiceError> {
            self.0.set(self.0.get() + 1);
            Ok(true)
        }
    }

    fn session(target: &str) -> Session {
        Session::new(Word::new(target).unwrap(), 6)
    }

    fn type_word(session: &mut Session, word: &str) {
        for ch in word.chars() {
            session.type_letter(ch).unwrap();
        }
    }

    #[test]
    fn starts_entering_first_row() {
        let s = session("pools");
        assert_eq!(s.state(), SessionState::Entering { row: 0, cell: 0 });
        assert_eq!(s.rows().len(), 6);
        assert_eq!(s.guesses_used(), 0);
    }

    #[test]
    fn typing_uppercases_and_stops_at_last_cell() {
        let mut s = session("pools");
        type_word(&mut s, "spool");
        assert_eq!(s.state(), SessionState::Entering { row: 0, cell: 4 });
        assert_eq!(s.rows()[0].text(), "SPOOL");

        // Extra letters overwrite the last cell
        s.type_letter('x').unwrap();
        assert_eq!(s.rows()[0].text(), "SPOOX");
        assert_eq!(s.state(), SessionState::Entering { row: 0, cell: 4 });
    }

    #[test]
    fn non_letters_rejected() {
        let mut s = session("pools");
        assert!(matches!(s.type_letter('3'), Err(SessionError::NotALetter('3'))));
        assert!(matches!(s.type_letter('é'), Err(SessionError::NotALetter(_))));
        assert_eq!(s.state(), SessionState::Entering { row: 0, cell: 0 });
    }

    #[test]
    fn backspace_on_full_row_clears_last_cell_in_place() {
        let mut s = session("pools");
        type_word(&mut s, "spool");

        s.backspace().unwrap();
        assert_eq!(s.state(), SessionState::Entering { row: 0, cell: 4 });
        assert_eq!(s.rows()[0].text(), "SPOO");

        s.backspace().unwrap();
        assert_eq!(s.state(), SessionState::Entering { row: 0, cell: 3 });
        assert_eq!(s.rows()[0].text(), "SPO");
    }

    #[test]
    fn backspace_on_partial_row_steps_back() {
        let mut s = session("pools");
        type_word(&mut s, "sp");

        s.backspace().unwrap();
        assert_eq!(s.state(), SessionState::Entering { row: 0, cell: 1 });
        assert_eq!(s.rows()[0].text(), "S");

        s.backspace().unwrap();
        s.backspace().unwrap();
        assert_eq!(s.state(), SessionState::Entering { row: 0, cell: 0 });
        assert_eq!(s.rows()[0].text(), "");
    }

    #[test]
    fn submit_requires_full_row() {
        let mut s = session("pools");
        let validator = Counting::default();
        type_word(&mut s, "spoo");

        assert!(matches!(
            s.submit(&validator),
            Err(SessionError::RowIncomplete)
        ));
        assert_eq!(validator.0.get(), 0);
        assert_eq!(s.state(), SessionState::Entering { row: 0, cell: 4 });
    }

    #[test]
    fn valid_guess_advances_row() {
        let mut s = session("pools");
        type_word(&mut s, "spool");

        let outcome = s.submit(&AcceptAll).unwrap();
        let CheckOutcome::Scored { guess, result } = outcome else {
            panic!("expected a scored guess");
        };
        assert_eq!(guess.text(), "SPOOL");
        assert!(!result.player_has_won);
        assert_eq!(s.rows()[0].result(), Some(&result));
        assert_eq!(s.state(), SessionState::Entering { row: 1, cell: 0 });
        assert_eq!(s.guesses_used(), 1);
    }

    #[test]
    fn invalid_guess_keeps_row_and_cursor() {
        let mut s = session("pools");
        type_word(&mut s, "xxxxx");

        let outcome = s.submit(&RejectAll).unwrap();
        assert!(matches!(outcome, CheckOutcome::InvalidWord(_)));
        assert_eq!(s.state(), SessionState::Entering { row: 0, cell: 4 });
        assert_eq!(s.rows()[0].text(), "XXXXX");
        assert!(s.rows()[0].result().is_none());

        // Still editable
        s.backspace().unwrap();
        assert_eq!(s.rows()[0].text(), "XXXX");
    }

    #[test]
    fn validator_failure_returns_to_entering() {
        let mut s = session("pools");
        type_word(&mut s, "spool");

        assert!(matches!(
            s.submit(&Unreachable),
            Err(SessionError::Service(_))
        ));
        assert_eq!(s.state(), SessionState::Entering { row: 0, cell: 4 });
    }

    #[test]
    fn correct_guess_wins_and_locks() {
        let mut s = session("pools");
        type_word(&mut s, "Pools");

        let outcome = s.submit(&AcceptAll).unwrap();
        assert!(matches!(
            outcome,
            CheckOutcome::Scored { ref result, .. } if result.player_has_won
        ));
        assert_eq!(s.state(), SessionState::Won);
        assert!(s.state().is_over());

        assert!(matches!(s.type_letter('a'), Err(SessionError::GameOver)));
        assert!(matches!(s.backspace(), Err(SessionError::GameOver)));
        assert!(matches!(s.submit(&AcceptAll), Err(SessionError::GameOver)));
    }

    #[test]
    fn running_out_of_rows_loses() {
        let mut s = Session::new(Word::new("pools").unwrap(), 2);
        type_word(&mut s, "spool");
        s.submit(&AcceptAll).unwrap();
        type_word(&mut s, "abide");
        s.submit(&AcceptAll).unwrap();

        assert_eq!(s.state(), SessionState::Lost);
        assert_eq!(s.target().text(), "POOLS");
        assert_eq!(s.current_row(), 1);
        assert!(matches!(s.type_letter('a'), Err(SessionError::GameOver)));
    }

    #[test]
    fn input_rejected_while_checking() {
        let mut s = session("pools");
        type_word(&mut s, "spool");

        let guess = s.begin_check().unwrap();
        assert_eq!(guess.text(), "SPOOL");
        assert_eq!(s.state(), SessionState::Checking);

        assert!(matches!(s.type_letter('a'), Err(SessionError::Busy)));
        assert!(matches!(s.backspace(), Err(SessionError::Busy)));
        assert!(matches!(s.begin_check(), Err(SessionError::Busy)));

        s.finish_check(true).unwrap();
        assert_eq!(s.state(), SessionState::Entering { row: 1, cell: 0 });
    }

    #[test]
    fn finish_without_begin_is_rejected() {
        let mut s = session("pools");
        assert!(matches!(
            s.finish_check(true),
            Err(SessionError::NotChecking)
        ));
    }

    #[test]
    fn enter_word_replaces_row() {
        let mut s = session("pools");
        type_word(&mut s, "xyz");

        s.enter_word("spool").unwrap();
        assert_eq!(s.rows()[0].text(), "SPOOL");
        assert_eq!(s.state(), SessionState::Entering { row: 0, cell: 4 });

        assert!(matches!(
            s.enter_word("ab"),
            Err(SessionError::WrongLength(2))
        ));
        assert_eq!(s.rows()[0].text(), "");

        assert!(matches!(
            s.enter_word("ab1de"),
            Err(SessionError::NotALetter('1'))
        ));
        assert_eq!(s.rows()[0].text(), "");
    }

    #[test]
    fn enter_word_rejects_long_guess() {
        let mut s = session("pools");
        let validator = Counting::default();

        assert!(matches!(
            s.enter_word("spools"),
            Err(SessionError::WrongLength(6))
        ));
        assert_eq!(s.rows()[0].text(), "");
        assert!(matches!(
            s.submit(&validator),
            Err(SessionError::RowIncomplete)
        ));
        assert_eq!(validator.0.get(), 0);
        assert_eq!(s.guesses_used(), 0);
        assert_eq!(s.state(), SessionState::Entering { row: 0, cell: 0 });
    }

    #[test]
    fn minimum_one_row() {
        let s = Session::new(Word::new("pools").unwrap(), 0);
        assert_eq!(s.rows().len(), 1);
    }

    #[test]
    fn letter_hints_keep_best_classification() {
        let mut s = session("pools");
        // S P O O L -> O at 2 matches, everything else close
        type_word(&mut s, "spool");
        s.submit(&AcceptAll).unwrap();
        // A B I D E -> nothing
        type_word(&mut s, "abide");
        s.submit(&AcceptAll).unwrap();

        let hints = s.letter_hints();
        assert_eq!(hints.get(&b'O'), Some(&LetterClassification::Matching));
        assert_eq!(hints.get(&b'S'), Some(&LetterClassification::Close));
        assert_eq!(hints.get(&b'A'), Some(&LetterClassification::NotMatching));
        assert_eq!(hints.get(&b'Z'), None);
    }
}
