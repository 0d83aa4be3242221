//! Game session state machine
//!
//! ```text
//! Ongoing --(all-correct row)--> Won
//! Ongoing --(6th row, not all correct)--> Lost
//! ```
//!
//! Won and Lost are terminal. The session is owned by its caller and mutated only
//! through `submit_guess`; each call hands back an immutable snapshot.

use crate::core::{GuessRow, Word, normalize};
use crate::error::{GameError, Result};
use crate::stats::{GameMode, GameResultRecord};
use crate::wordlists::WordBank;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

/// Maximum number of guesses per game
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameStatus {
    Ongoing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Board state handed to the UI after every operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Always `MAX_ATTEMPTS` rows, evaluated rows first then blanks
    pub rows: Vec<GuessRow>,
    pub attempts: usize,
    pub status: GameStatus,
    pub mode: GameMode,
    /// The target, only once the game is over
    pub revealed: Option<Word>,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub snapshot: SessionSnapshot,
    /// Set exactly once, by the guess that ends the game
    pub record: Option<GameResultRecord>,
}

/// One game: a target word and the guesses made against it
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    mode: GameMode,
    rows: Vec<GuessRow>,
    status: GameStatus,
}

impl GameSession {
    /// Begin a game against `target`
    #[must_use]
    pub fn start(target: Word, mode: GameMode) -> Self {
        debug!(target = %target, %mode, "starting game");
        Self {
            target,
            mode,
            rows: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::Ongoing,
        }
    }

    /// Discard the current game and begin another
    pub fn restart(&mut self, target: Word, mode: GameMode) {
        *self = Self::start(target, mode);
    }

    /// Submit a raw guess
    ///
    /// The guess is trimmed and uppercased, then checked in this order: the game
    /// must still be ongoing, the guess must have five characters, be in `bank`,
    /// and not repeat an earlier guess. `date` is stamped on the result record
    /// if this guess ends the game.
    ///
    /// # Errors
    ///
    /// `GameAlreadyOver`, `InvalidLength`, `NotInWordBank` or `DuplicateGuess`.
    /// A rejected guess leaves the session unchanged.
    pub fn submit_guess(
        &mut self,
        raw: &str,
        bank: &WordBank,
        date: NaiveDate,
    ) -> Result<GuessOutcome> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }

        let normalized = normalize(raw);
        let len = normalized.chars().count();
        if len != crate::core::WORD_LENGTH {
            return Err(GameError::InvalidLength(len));
        }

        let guess = Word::new(&normalized)
            .ok()
            .filter(|w| bank.contains_word(w))
            .ok_or_else(|| GameError::NotInWordBank(normalized.clone()))?;

        if self.rows.iter().any(|row| row.word() == Some(&guess)) {
            return Err(GameError::DuplicateGuess(normalized));
        }

        let row = GuessRow::evaluate(guess, &self.target);
        let solved = row.is_all_correct();
        self.rows.push(row);

        if solved {
            self.status = GameStatus::Won;
        } else if self.rows.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        let record = self.status.is_terminal().then(|| {
            info!(
                word = %self.target,
                status = ?self.status,
                attempts = self.attempts(),
                mode = %self.mode,
                "game finished"
            );
            GameResultRecord {
                word: self.target.clone(),
                won: self.status == GameStatus::Won,
                attempts: self.attempts() as u8,
                mode: self.mode,
                date,
            }
        });

        Ok(GuessOutcome {
            snapshot: self.snapshot(),
            record,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            rows: self.rows(),
            attempts: self.attempts(),
            status: self.status,
            mode: self.mode,
            revealed: self.status.is_terminal().then(|| self.target.clone()),
        }
    }

    /// All six rows, blank-padded
    #[must_use]
    pub fn rows(&self) -> Vec<GuessRow> {
        let mut rows = self.rows.clone();
        rows.resize(MAX_ATTEMPTS, GuessRow::Blank);
        rows
    }

    /// Number of evaluated rows
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::wordlists::loader::words_from_slice;

    const WORDS: &[&str] = &[
        "river", "eerie", "crane", "slate", "audio", "floor", "robot", "speed",
    ];

    fn bank() -> WordBank {
        WordBank::new(words_from_slice(WORDS)).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn session(target: &str) -> GameSession {
        GameSession::start(Word::new(target).unwrap(), GameMode::Normal)
    }

    #[test]
    fn new_session_is_blank() {
        let s = session("river");
        let snap = s.snapshot();
        assert_eq!(snap.rows.len(), MAX_ATTEMPTS);
        assert!(snap.rows.iter().all(GuessRow::is_blank));
        assert_eq!(snap.attempts, 0);
        assert_eq!(snap.status, GameStatus::Ongoing);
        assert!(snap.revealed.is_none());
    }

    #[test]
    fn guess_is_evaluated_and_appended() {
        let mut s = session("river");
        let outcome = s.submit_guess("eerie", &bank(), today()).unwrap();

        assert!(outcome.record.is_none());
        assert_eq!(outcome.snapshot.attempts, 1);
        assert_eq!(outcome.snapshot.status, GameStatus::Ongoing);

        let first = &outcome.snapshot.rows[0];
        assert_eq!(first.word().map(Word::text), Some("EERIE"));
        assert_eq!(
            first.feedback().map(|f| *f.states()),
            Some([
                LetterState::Present,
                LetterState::Absent,
                LetterState::Present,
                LetterState::Present,
                LetterState::Absent,
            ])
        );
        assert!(outcome.snapshot.rows[1..].iter().all(GuessRow::is_blank));
    }

    #[test]
    fn lowercase_and_padded_input_is_normalized() {
        let mut s = session("river");
        assert!(s.submit_guess("  CrAnE ", &bank(), today()).is_ok());
        assert_eq!(s.rows()[0].word().map(Word::text), Some("CRANE"));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let mut s = session("river");
        assert!(matches!(
            s.submit_guess("rive", &bank(), today()),
            Err(GameError::InvalidLength(4))
        ));
        assert!(matches!(
            s.submit_guess("rivers", &bank(), today()),
            Err(GameError::InvalidLength(6))
        ));
        assert_eq!(s.attempts(), 0);
    }

    #[test]
    fn unknown_word_is_rejected() {
        let mut s = session("river");
        assert!(matches!(
            s.submit_guess("zzzzz", &bank(), today()),
            Err(GameError::NotInWordBank(w)) if w == "ZZZZZ"
        ));
        assert!(matches!(
            s.submit_guess("r1ver", &bank(), today()),
            Err(GameError::NotInWordBank(_))
        ));
        assert_eq!(s.attempts(), 0);
    }

    #[test]
    fn repeated_guess_is_rejected() {
        let mut s = session("river");
        s.submit_guess("crane", &bank(), today()).unwrap();

        let err = s.submit_guess("CRANE", &bank(), today()).unwrap_err();
        assert!(matches!(err, GameError::DuplicateGuess(w) if w == "CRANE"));
        assert_eq!(s.attempts(), 1);
    }

    #[test]
    fn correct_guess_wins_and_emits_record() {
        let mut s = session("river");
        s.submit_guess("crane", &bank(), today()).unwrap();
        let outcome = s.submit_guess("river", &bank(), today()).unwrap();

        assert_eq!(outcome.snapshot.status, GameStatus::Won);
        assert_eq!(outcome.snapshot.revealed.as_ref().map(Word::text), Some("RIVER"));

        let record = outcome.record.unwrap();
        assert!(record.won);
        assert_eq!(record.attempts, 2);
        assert_eq!(record.word.text(), "RIVER");
        assert_eq!(record.mode, GameMode::Normal);
        assert_eq!(record.date, today());
    }

    #[test]
    fn sixth_miss_loses() {
        let mut s = session("river");
        let misses = ["eerie", "crane", "slate", "audio", "floor"];
        for guess in misses {
            let outcome = s.submit_guess(guess, &bank(), today()).unwrap();
            assert!(outcome.record.is_none());
            assert_eq!(outcome.snapshot.status, GameStatus::Ongoing);
        }

        let outcome = s.submit_guess("robot", &bank(), today()).unwrap();
        assert_eq!(outcome.snapshot.status, GameStatus::Lost);
        assert_eq!(outcome.snapshot.attempts, MAX_ATTEMPTS);

        let record = outcome.record.unwrap();
        assert!(!record.won);
        assert_eq!(record.attempts, 6);
    }

    #[test]
    fn win_on_sixth_guess_is_a_win() {
        let mut s = session("river");
        for guess in ["eerie", "crane", "slate", "audio", "floor"] {
            s.submit_guess(guess, &bank(), today()).unwrap();
        }
        let outcome = s.submit_guess("river", &bank(), today()).unwrap();
        assert_eq!(outcome.snapshot.status, GameStatus::Won);
        assert_eq!(outcome.record.map(|r| r.won), Some(true));
    }

    #[test]
    fn no_seventh_guess() {
        let mut s = session("river");
        for guess in ["eerie", "crane", "slate", "audio", "floor", "robot"] {
            s.submit_guess(guess, &bank(), today()).unwrap();
        }
        assert!(matches!(
            s.submit_guess("speed", &bank(), today()),
            Err(GameError::GameAlreadyOver)
        ));
        assert_eq!(s.attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn won_game_accepts_nothing_more() {
        let mut s = session("river");
        s.submit_guess("river", &bank(), today()).unwrap();

        // Checked before anything else, even for malformed input
        assert!(matches!(
            s.submit_guess("x", &bank(), today()),
            Err(GameError::GameAlreadyOver)
        ));
        assert!(matches!(
            s.submit_guess("crane", &bank(), today()),
            Err(GameError::GameAlreadyOver)
        ));
    }

    #[test]
    fn restart_resets_everything() {
        let mut s = session("river");
        s.submit_guess("river", &bank(), today()).unwrap();

        s.restart(Word::new("crane").unwrap(), GameMode::Daily);
        assert_eq!(s.status(), GameStatus::Ongoing);
        assert_eq!(s.attempts(), 0);
        assert_eq!(s.mode(), GameMode::Daily);
        assert_eq!(s.target().text(), "CRANE");
        assert!(s.submit_guess("river", &bank(), today()).is_ok());
    }

    #[test]
    fn exactly_one_record_per_game() {
        let mut s = session("crane");
        let mut records = 0;
        for guess in ["river", "eerie", "crane", "slate"] {
            if let Ok(outcome) = s.submit_guess(guess, &bank(), today()) {
                records += usize::from(outcome.record.is_some());
            }
        }
        assert_eq!(records, 1);
    }
}
