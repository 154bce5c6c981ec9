//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a whole word per turn.

use crate::game::{CheckOutcome, Session, SessionError, SessionState};
use crate::output::formatters::share_text;
use crate::output::print_board;
use crate::service::{WordProvider, WordValidator};
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;
use tracing::warn;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// target word cannot be fetched.
pub fn run_simple(
    provider: &dyn WordProvider,
    validator: &dyn WordValidator,
    rows: usize,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Daily Word                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the 5-letter word in {rows} tries. After each guess:\n");
    println!("  - {} letter is in the right spot", "green".green().bold());
    println!("  - {} letter is in the word elsewhere", "yellow".yellow().bold());
    println!("  - {} letter is not in the word\n", "gray".bright_black().bold());
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut session = new_session(provider, rows)?;

    loop {
        let turn = session.guesses_used() + 1;
        let input = get_user_input(&format!("Guess {turn}/{rows}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = new_session(provider, rows)?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        if let Err(e) = session.enter_word(&input) {
            println!("❌ {e}\n");
            continue;
        }

        let spinner = checking_spinner();
        let outcome = session.submit(validator);
        spinner.finish_and_clear();

        match outcome {
            Ok(CheckOutcome::InvalidWord(guess)) => {
                println!("❌ {} is not in the word list\n", guess.text().red().bold());
            }
            Ok(CheckOutcome::Scored { .. }) => {
                println!();
                print_board(&session);
                println!();
            }
            Err(SessionError::Service(e)) => {
                warn!(error = %e, "validator unavailable");
                println!("❌ Could not check the word: {e}\n");
            }
            Err(e) => println!("❌ {e}\n"),
        }

        if session.state().is_over() {
            print_game_over(&session);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session = new_session(provider, rows)?;
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn new_session(provider: &dyn WordProvider, rows: usize) -> Result<Session> {
    let spinner = checking_spinner();
    spinner.set_message("Fetching today's word...");
    let target = provider.fetch_target();
    spinner.finish_and_clear();

    Ok(Session::new(
        target.context("Failed to fetch the target word")?,
        rows,
    ))
}

fn checking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Checking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn print_game_over(session: &Session) {
    let results: Vec<_> = session.rows().iter().filter_map(|row| row.result()).collect();
    let won = session.state() == SessionState::Won;

    println!("{}", "═".repeat(70).bright_cyan());
    if won {
        println!(
            "{}",
            "    🎉 🎊 ✨  Y O U   W O N !  ✨ 🎊 🎉    "
                .bright_green()
                .bold()
        );
        let turns = results.len();
        println!(
            "\n  Solved in {} {}",
            turns.to_string().bright_cyan().bold(),
            if turns == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!("{}", "    You lost!".bright_red().bold());
        println!(
            "\n  The word was: {}",
            session.target().text().bright_yellow().bold()
        );
    }
    println!("\n{}", share_text(&results, won, session.rows().len()));
    println!("{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        // EOF: treat as quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
