//! Interactive TUI interface
//!
//! Full-screen game board built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, INVALID_FLASH, Message, MessageStyle, Statistics, run_tui};
