//! Wordle Daily - CLI
//!
//! Play the daily Wordle in a TUI or in plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::RangedU64ValueParser};
use std::path::PathBuf;
use tracing::info;
use wordle_daily::{
    commands::{check_guess, run_simple},
    config::{DEFAULT_VALIDATE_URL, DEFAULT_WORD_URL, GameConfig, MAX_ROWS, ServiceConfig},
    core::Word,
    logging::{self, LogTarget},
    output::print_check_result,
    service::{FixedTarget, HttpWordService, WordList, WordProvider, WordValidator},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Guess the daily word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Endpoint returning the word of the day
    #[arg(long, global = true, env = "WORDLE_WORD_URL", default_value = DEFAULT_WORD_URL)]
    word_url: String,

    /// Endpoint validating guesses
    #[arg(long, global = true, env = "WORDLE_VALIDATE_URL", default_value = DEFAULT_VALIDATE_URL)]
    validate_url: String,

    /// HTTP timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Number of guesses per game
    #[arg(
        short,
        long,
        global = true,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_ROWS as u64)
    )]
    rows: Option<usize>,

    /// Play offline: draw targets from and validate against this word list
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Force the target word
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Write logs to this file (the TUI discards them otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one word per line, no TUI)
    Simple,

    /// Score a guess against a target without contacting the word service
    Check {
        /// The target word
        target: String,

        /// The guessed word
        guess: String,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            service: ServiceConfig {
                word_url: self.word_url.clone(),
                validate_url: self.validate_url.clone(),
                timeout_secs: self.timeout,
            },
            dictionary: self.dictionary.clone(),
            target: self.target.clone(),
        }
    }
}

/// Provider and validator chosen from the config
struct Services {
    provider: Box<dyn WordProvider>,
    validator: Box<dyn WordValidator>,
}

/// Build the word source and validator
///
/// - `--dictionary`: offline, both come from the word list
/// - otherwise: the HTTP word service
/// - `--target` overrides only the provider
fn build_services(config: &GameConfig) -> Result<Services> {
    let mut services = if let Some(path) = &config.dictionary {
        let words = WordList::load(path)
            .with_context(|| format!("Failed to load word list {}", path.display()))?;
        info!(words = words.len(), "playing offline");
        Services {
            provider: Box::new(words.clone()),
            validator: Box::new(words),
        }
    } else {
        let service = HttpWordService::new(config.service.clone())
            .context("Failed to set up the word service client")?;
        Services {
            provider: Box::new(service.clone()),
            validator: Box::new(service),
        }
    };

    if let Some(target) = &config.target {
        let word = Word::new(target).with_context(|| format!("Invalid target {target:?}"))?;
        services.provider = Box::new(FixedTarget(word));
    }

    Ok(services)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let owns_terminal = matches!(cli.command, None | Some(Commands::Play));
    logging::init(LogTarget::choose(cli.log_file.as_deref(), owns_terminal))?;

    let config = cli.game_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { target, guess } => run_check_command(&target, &guess),
    }
}

fn run_check_command(target: &str, guess: &str) -> Result<()> {
    let report = check_guess(target, guess).context("Cannot check words")?;
    print_check_result(&report);
    Ok(())
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let services = build_services(config)?;
    run_simple(
        services.provider.as_ref(),
        services.validator.as_ref(),
        config.rows(),
    )
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let services = build_services(config)?;
    let app = App::new(
        services.provider.as_ref(),
        services.validator.as_ref(),
        config.rows(),
    )?;
    run_tui(app)
}
