//! Core domain types for Wordle
//!
//! Words, per-letter feedback and board rows. Everything here is pure.

mod feedback;
mod row;
mod word;

pub use feedback::{Feedback, LetterState};
pub use row::{CharacterGuess, GuessRow};
pub use word::{WORD_LENGTH, Word, WordError, normalize};
