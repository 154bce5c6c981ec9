//! Formatting utilities for terminal output

use crate::core::{LetterClassification, MatchResult, WORD_LEN, Word};
use colored::{ColoredString, Colorize};

/// Color a single letter tile by its classification
#[must_use]
pub fn colored_tile(letter: char, class: LetterClassification) -> ColoredString {
    let tile = format!(" {letter} ");
    match class {
        LetterClassification::Matching => tile.black().on_green().bold(),
        LetterClassification::Close => tile.black().on_yellow().bold(),
        LetterClassification::NotMatching => tile.white().on_bright_black(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, result: &MatchResult) -> String {
    guess
        .text()
        .chars()
        .zip(result.classifications())
        .map(|(letter, class)| colored_tile(letter, class).to_string())
        .collect()
}

/// Plain-text marker line: `=` matching, `~` close, `.` not matching
#[must_use]
pub fn marker_line(result: &MatchResult) -> String {
    let mut line = String::with_capacity(WORD_LEN);
    for class in result.classifications() {
        line.push(match class {
            LetterClassification::Matching => '=',
            LetterClassification::Close => '~',
            LetterClassification::NotMatching => '.',
        });
    }
    line
}

/// Share text for a finished game, e.g. "Wordle 3/6" followed by emoji rows
#[must_use]
pub fn share_text(results: &[&MatchResult], won: bool, rows: usize) -> String {
    let score = if won {
        results.len().to_string()
    } else {
        "X".to_string()
    };
    let mut text = format!("Wordle {score}/{rows}");
    for result in results {
        text.push('\n');
        text.push_str(&result.to_emoji());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(target: &str, guess: &str) -> MatchResult {
        MatchResult::from_strs(target, guess).unwrap()
    }

    #[test]
    fn marker_line_all_matching() {
        assert_eq!(marker_line(&result("pools", "pools")), "=====");
    }

    #[test]
    fn marker_line_mixed() {
        assert_eq!(marker_line(&result("pools", "spool")), "~~=~~");
        assert_eq!(marker_line(&result("abide", "error")), "~....");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let guess = Word::new("spool").unwrap();
        let tiles = colored_guess(&guess, &result("pools", "spool"));
        assert_eq!(tiles, " S  P  O  O  L ");
    }

    #[test]
    fn share_text_win_and_loss() {
        let first = result("pools", "spool");
        let second = result("pools", "pools");

        assert_eq!(
            share_text(&[&first, &second], true, 6),
            "Wordle 2/6\n🟨🟨🟩🟨🟨\n🟩🟩🟩🟩🟩"
        );
        assert_eq!(share_text(&[&first], false, 1), "Wordle X/1\n🟨🟨🟩🟨🟨");
    }
}
