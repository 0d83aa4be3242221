//! Board rows
//!
//! A `GuessRow` is either blank (not yet submitted) or evaluated. Rows are
//! immutable values; a session replaces a blank row with an evaluated one.

use super::word::WORD_LENGTH;
use super::{Feedback, LetterState, Word};
use serde::{Deserialize, Serialize};

/// One letter cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CharacterGuess {
    #[default]
    Empty,
    Evaluated { letter: char, state: LetterState },
}

impl CharacterGuess {
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Evaluated { letter, .. } => Some(letter),
        }
    }

    #[must_use]
    pub const fn state(self) -> Option<LetterState> {
        match self {
            Self::Empty => None,
            Self::Evaluated { state, .. } => Some(state),
        }
    }
}

/// A row of five cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessRow {
    Blank,
    Evaluated { word: Word, feedback: Feedback },
}

impl GuessRow {
    /// Evaluate `guess` against `target` into a finished row
    #[must_use]
    pub fn evaluate(guess: Word, target: &Word) -> Self {
        let feedback = Feedback::evaluate(&guess, target);
        Self::Evaluated {
            word: guess,
            feedback,
        }
    }

    #[must_use]
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Whether every letter in the row is in the correct place
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        match self {
            Self::Blank => false,
            Self::Evaluated { feedback, .. } => feedback.is_perfect(),
        }
    }

    /// The guessed word, `None` for blank rows
    #[must_use]
    pub const fn word(&self) -> Option<&Word> {
        match self {
            Self::Blank => None,
            Self::Evaluated { word, .. } => Some(word),
        }
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        match self {
            Self::Blank => None,
            Self::Evaluated { feedback, .. } => Some(feedback),
        }
    }

    /// The five cells of the row
    #[must_use]
    pub fn cells(&self) -> [CharacterGuess; WORD_LENGTH] {
        let mut cells = [CharacterGuess::Empty; WORD_LENGTH];
        if let Self::Evaluated { word, feedback } = self {
            for (i, cell) in cells.iter_mut().enumerate() {
                *cell = CharacterGuess::Evaluated {
                    letter: char::from(word.char_at(i)),
                    state: feedback.states()[i],
                };
            }
        }
        cells
    }
}
