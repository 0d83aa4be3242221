//! Wordle Daily
//!
//! A single-player Wordle: six guesses at a hidden five-letter word, a daily
//! challenge derived from the calendar date, and player statistics computed from
//! a persisted log of finished games.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_daily::core::{Feedback, Word};
//!
//! let guess = Word::new("eerie").unwrap();
//! let target = Word::new("river").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word lists and the word bank
pub mod wordlists;

// Session state machine and controller
pub mod game;

// Daily challenge selection
pub mod daily;

// Result log and statistics
pub mod stats;

// Runtime configuration
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
