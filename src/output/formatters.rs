//! Formatting utilities for terminal output

use crate::core::{CharacterGuess, GuessRow, LetterState};
use colored::{ColoredString, Colorize};

/// Render one board cell as a colored letter tile
#[must_use]
pub fn cell_tile(cell: CharacterGuess) -> ColoredString {
    match cell {
        CharacterGuess::Empty => " _ ".bright_black(),
        CharacterGuess::Evaluated { letter, state } => {
            let tile = format!(" {letter} ");
            match state {
                LetterState::Correct => tile.black().on_green().bold(),
                LetterState::Present => tile.black().on_yellow().bold(),
                LetterState::Absent => tile.white().on_bright_black(),
            }
        }
    }
}

/// Render a row as colored tiles
#[must_use]
pub fn row_tiles(row: &GuessRow) -> String {
    row.cells().into_iter().map(|c| cell_tile(c).to_string()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
