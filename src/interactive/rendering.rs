//! TUI rendering with ratatui
//!
//! Board, keyboard strip and status panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{LetterClassification, WORD_LEN};
use crate::game::SessionState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board_height = u16::try_from(app.session.rows().len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(5),         // Keyboard
            Constraint::Length(3),         // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE - Daily Word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(class: LetterClassification) -> Style {
    let bg = match class {
        LetterClassification::Matching => Color::Green,
        LetterClassification::Close => Color::Yellow,
        LetterClassification::NotMatching => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let (active_row, active_cell) = match session.state() {
        SessionState::Entering { row, cell } => (Some(row), Some(cell)),
        SessionState::Checking => (Some(session.current_row()), None),
        SessionState::Won | SessionState::Lost => (None, None),
    };
    let flagged = app.row_is_invalid();

    let lines: Vec<Line> = session
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let is_active = active_row == Some(i);
            let spans = (0..WORD_LEN).map(|cell| {
                let letter = row.letter_at(cell).unwrap_or('·');
                let style = if let Some(result) = row.result() {
                    tile_style(result.classification_at(cell))
                } else if is_active && flagged {
                    Style::new().fg(Color::White).bg(Color::Red)
                } else if is_active && active_cell == Some(cell) {
                    Style::new()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else if is_active {
                    Style::new().fg(Color::White)
                } else {
                    Style::new().fg(Color::DarkGray)
                };
                Span::styled(format!(" {letter} "), style)
            });

            let mut line: Vec<Span> = vec![Span::raw("  ")];
            for span in spans {
                line.push(span);
                line.push(Span::raw(" "));
            }
            Line::from(line)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints: FxHashMap<u8, LetterClassification> = app.session.letter_hints();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|key| {
                    let style = hints
                        .get(&key)
                        .map_or_else(|| Style::new().fg(Color::White), |&c| tile_style(c));
                    Span::styled(format!(" {} ", char::from(key)), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let (mode_text, mode_color) = match app.session.state() {
        SessionState::Entering { .. } => ("Guessing".to_string(), Color::White),
        SessionState::Checking => ("⏳ Checking...".to_string(), Color::Yellow),
        SessionState::Won => ("🎉 Solved!".to_string(), Color::Green),
        SessionState::Lost => (format!("Answer: {}", app.session.target()), Color::Red),
    };
    let mode = Paragraph::new(mode_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(mode_color).add_modifier(Modifier::BOLD));
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let guesses_text = format!(
        "Guesses: {}/{}",
        app.session.guesses_used(),
        app.session.rows().len()
    );
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[2]);

    let help_text = if app.session.state().is_over() {
        "q: Quit | n: New Game"
    } else {
        "Enter: Submit | Backspace: Erase | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
