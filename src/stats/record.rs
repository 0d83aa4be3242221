//! Persisted outcome of one finished game

use crate::core::Word;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the target word was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    #[default]
    Normal,
    Daily,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "NORMAL",
            Self::Daily => "DAILY",
        })
    }
}

/// One line of the append-only statistics log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResultRecord {
    pub word: Word,
    pub won: bool,
    pub attempts: u8,
    pub mode: GameMode,
    pub date: NaiveDate,
}

impl GameResultRecord {
    /// Short verdict for the result screen
    #[must_use]
    pub const fn verdict(&self) -> &'static str {
        if !self.won {
            return "Failed";
        }
        match self.attempts {
            1 => "Genius",
            2 => "Magnificent",
            3 => "Impressive",
            4 => "Splendid",
            5 => "Great",
            6 => "Phew",
            _ => "Unknown",
        }
    }
}
