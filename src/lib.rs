//! Wordle Daily
//!
//! A terminal Wordle client: guess the daily word fetched from a remote word
//! service, with every guess checked by a remote validator.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{Word, classify};
//!
//! let target = Word::new("pools").unwrap();
//! let guess = Word::new("spool").unwrap();
//!
//! let result = classify(&target, &guess);
//! assert_eq!(result.to_emoji(), "🟨🟨🟩🟨🟨");
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word source and validator
pub mod service;

// Settings
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
