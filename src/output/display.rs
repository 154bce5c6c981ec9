//! Display functions for game results

use super::formatters::{colored_guess, marker_line};
use crate::commands::CheckReport;
use crate::game::Session;
use colored::Colorize;

/// Print the result of classifying one guess against a target
pub fn print_check_result(report: &CheckReport) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        report.target.text().bright_yellow().bold(),
        report.guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_guess(&report.guess, &report.result));
    println!("  {}", report.result.to_emoji());
    println!("  {}", marker_line(&report.result).bright_black());

    let indexes = |set: &std::collections::BTreeSet<usize>| {
        set.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    };
    println!("\n   Matching:     [{}]", indexes(&report.result.matching_indexes));
    println!("   Close:        [{}]", indexes(&report.result.close_indexes));
    println!(
        "   Not matching: [{}]",
        indexes(&report.result.not_matching_indexes)
    );

    println!();
    if report.result.player_has_won {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print every scored row of a session
pub fn print_board(session: &Session) {
    for (i, row) in session.rows().iter().enumerate() {
        let (Some(result), Some(guess)) = (row.result(), row.word()) else {
            continue;
        };
        println!(
            "    {}. {}  {}",
            (i + 1).to_string().bright_black(),
            colored_guess(&guess, result),
            result.to_emoji()
        );
    }
}
