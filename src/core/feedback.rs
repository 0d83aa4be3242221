//! Guess evaluation and per-letter feedback
//!
//! Feedback holds one `LetterState` per guess position:
//! - Absent (letter not in word, or all its occurrences already matched)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)

use super::Word;
use super::word::WORD_LENGTH;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterState {
    Correct,
    Present,
    Absent,
}

impl LetterState {
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a Wordle guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterState::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(states: [LetterState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Evaluate `guess` against `target`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters. Total over well-formed words; there is no failure path.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, LetterState::*, Word};
    ///
    /// let guess = Word::new("eerie").unwrap();
    /// let target = Word::new("river").unwrap();
    ///
    /// let feedback = Feedback::evaluate(&guess, &target);
    /// assert_eq!(feedback.states(), &[Present, Absent, Present, Present, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterState::Absent; WORD_LENGTH];
        let mut target_available = target.char_counts();

        // First pass: greens consume their target letter
        for (i, state) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == target.char_at(i) {
                *state = LetterState::Correct;
                if let Some(count) = target_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from whatever is left, left to right
        for (i, state) in result.iter_mut().enumerate() {
            if *state == LetterState::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *state = LetterState::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterState::{Absent, Correct, Present};
    use super::*;

    fn eval(guess: &str, target: &str) -> [LetterState; WORD_LENGTH] {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        *Feedback::evaluate(&guess, &target).states()
    }

    #[test]
    fn feedback_all_absent() {
        assert_eq!(eval("abcde", "fghij"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn feedback_self_is_perfect() {
        for word in ["crane", "slate", "river", "eerie", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::evaluate(&w, &w).is_perfect(), "{word}");
        }
    }

    #[test]
    fn feedback_eerie_against_river() {
        assert_eq!(
            eval("eerie", "river"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_duplicate_letters_all_present() {
        // ERASE has two E's, so both E's in SPEED are marked
        assert_eq!(
            eval("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_green_takes_priority_over_earlier_yellow() {
        // The second O in ROBOT is green, so the first O only gets FLOOR's other O
        assert_eq!(
            eval("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn feedback_green_consumes_only_occurrence() {
        // Both L's in HELLO are taken by greens, nothing left for the leading L
        assert_eq!(
            eval("lolly", "hello"),
            [Absent, Present, Correct, Correct, Absent]
        );
        // One L in SOLID: only the first guessed L is marked
        assert_eq!(
            eval("llama", "solid"),
            [Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn feedback_marks_never_exceed_target_multiplicity() {
        let targets = ["river", "erase", "floor", "hello", "speed", "eerie"];
        let guesses = ["eerie", "geese", "level", "error", "ooooo", "rarer"];

        for target in targets {
            let t = Word::new(target).unwrap();
            let counts = t.char_counts();
            for guess in guesses {
                let g = Word::new(guess).unwrap();
                let feedback = Feedback::evaluate(&g, &t);
                for (&letter, &available) in &counts {
                    let marked = g
                        .chars()
                        .iter()
                        .zip(feedback.states())
                        .filter(|&(&c, &s)| c == letter && s != Absent)
                        .count();
                    assert!(
                        marked <= usize::from(available),
                        "{guess} vs {target}: {} marked {marked} times",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn feedback_to_emoji() {
        let p = Feedback::new([Correct, Present, Absent, Correct, Present]);
        assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(p.to_string(), "🟩🟨⬜🟩🟨");
    }
}
