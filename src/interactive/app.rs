//! TUI application state and logic

use crate::game::{CheckOutcome, Session, SessionError, SessionState};
use crate::service::{WordProvider, WordValidator};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long a rejected row stays flagged
pub const INVALID_FLASH: Duration = Duration::from_secs(1);

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application state
pub struct App<'a> {
    pub provider: &'a dyn WordProvider,
    pub validator: &'a dyn WordValidator,
    pub session: Session,
    pub rows: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Set while the current row is flagged as not-a-word
    pub invalid_until: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by guesses taken
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            guess_distribution: vec![0; rows.saturating_add(1)],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Fetch a target and set up the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot supply a target word.
    pub fn new(
        provider: &'a dyn WordProvider,
        validator: &'a dyn WordValidator,
        rows: usize,
    ) -> Result<Self> {
        let target = provider
            .fetch_target()
            .context("Failed to fetch the target word")?;

        Ok(Self {
            provider,
            validator,
            session: Session::new(target, rows),
            rows,
            messages: vec![Message {
                text: "Welcome! Type a 5-letter word and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::new(rows),
            should_quit: false,
            invalid_until: None,
        })
    }

    /// Whether the current row is flagged as rejected
    #[must_use]
    pub fn row_is_invalid(&self) -> bool {
        self.invalid_until
            .is_some_and(|until| Instant::now() < until)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.session.state().is_over() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        let result = match key.code {
            KeyCode::Char(c) => self.session.type_letter(c),
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Enter => self.session.begin_check().map(|_| ()),
            _ => Ok(()),
        };

        match result {
            Ok(()) => self.invalid_until = None,
            Err(SessionError::RowIncomplete) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            // Non-letters and input during a check are ignored
            Err(e) => debug!(error = %e, "input ignored"),
        }
    }

    /// Ask the validator about the row locked by `begin_check`
    ///
    /// Called after the "checking" frame has been drawn.
    pub fn complete_check(&mut self) {
        if self.session.state() != SessionState::Checking {
            return;
        }
        let Some(guess) = self.session.rows()[self.session.current_row()].word() else {
            self.session.abort_check();
            return;
        };

        let verdict = self.validator.is_valid(&guess);
        let outcome = match verdict {
            Ok(valid) => self.session.finish_check(valid),
            Err(e) => {
                warn!(error = %e, "validator unavailable");
                self.session.abort_check();
                self.add_message(&format!("Could not check word: {e}"), MessageStyle::Error);
                return;
            }
        };

        match outcome {
            Ok(CheckOutcome::InvalidWord(guess)) => {
                self.invalid_until = Some(Instant::now() + INVALID_FLASH);
                self.add_message(
                    &format!("{} is not a valid word", guess.text()),
                    MessageStyle::Error,
                );
            }
            Ok(CheckOutcome::Scored { result, .. }) => {
                if result.player_has_won {
                    let celebration = match self.session.guesses_used() {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        6 => "😅 PHEW! Got it in six! 😅",
                        _ => "🎊 YOU WON! 🎊",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.record_game(true);
                } else if self.session.state() == SessionState::Lost {
                    let text = format!("You lost! The word was: {}", self.session.target());
                    self.add_message(&text, MessageStyle::Error);
                    self.record_game(false);
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn record_game(&mut self, won: bool) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            let guesses = self.session.guesses_used();
            let distribution = &mut self.stats.guess_distribution;
            if distribution.len() <= guesses {
                distribution.resize(guesses + 1, 0);
            }
            distribution[guesses] += 1;
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match self.provider.fetch_target() {
            Ok(target) => {
                self.session = Session::new(target, self.rows);
                self.invalid_until = None;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => {
                warn!(error = %e, "could not start new game");
                self.add_message(&format!("Could not fetch a word: {e}"), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        if app.invalid_until.is_some() && !app.row_is_invalid() {
            app.invalid_until = None;
        }

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // The checking indicator is on screen now; run the blocking call
        if app.session.state() == SessionState::Checking {
            app.complete_check();
            continue;
        }

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
