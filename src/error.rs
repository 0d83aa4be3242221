//! Error types for gameplay and persistence

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced by the game core
///
/// Every variant is recoverable and meant to be shown to the player as a short message.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Guess must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("'{0}' is not in the word list")]
    NotInWordBank(String),

    #[error("'{0}' has already been guessed")]
    DuplicateGuess(String),

    #[error("The game is already over")]
    GameAlreadyOver,

    #[error("The daily challenge for {0} has already been played")]
    DailyAlreadyPlayed(NaiveDate),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Failed to save game result: {0}")]
    Store(#[from] StoreError),
}

/// Errors from a statistics store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupted record on line {line}: {message}")]
    Corrupted { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, GameError>;
