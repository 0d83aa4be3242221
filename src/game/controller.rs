//! Couples a session to the word bank and the statistics store
//!
//! The controller awaits the store before reporting a finished game; a failed
//! save is returned to the caller and the record is kept for `save_pending`.

use super::session::{GameSession, GuessOutcome, SessionSnapshot};
use crate::daily;
use crate::error::{GameError, Result};
use crate::stats::{GameMode, GameResultRecord, StatisticsStore};
use crate::wordlists::WordBank;
use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};

pub struct GameController<'a, S: StatisticsStore> {
    bank: &'a WordBank,
    store: &'a S,
    session: GameSession,
    /// Calendar date a daily game belongs to; its record is stamped with it
    daily_date: Option<NaiveDate>,
    unsaved: Option<GameResultRecord>,
}

impl<'a, S: StatisticsStore> GameController<'a, S> {
    /// Start a normal game with a random target
    #[must_use]
    pub fn normal(bank: &'a WordBank, store: &'a S) -> Self {
        let session = GameSession::start(bank.random_word().clone(), GameMode::Normal);
        Self {
            bank,
            store,
            session,
            daily_date: None,
            unsaved: None,
        }
    }

    /// Start the daily challenge for `date`
    ///
    /// # Errors
    ///
    /// `DailyAlreadyPlayed` if a daily result exists for `date`, or `Store` if the
    /// log cannot be read.
    pub async fn daily(bank: &'a WordBank, store: &'a S, date: NaiveDate) -> Result<Self> {
        if daily::already_played_today(store, date).await? {
            return Err(GameError::DailyAlreadyPlayed(date));
        }

        let session = GameSession::start(daily::word_for_date(bank, date).clone(), GameMode::Daily);
        Ok(Self {
            bank,
            store,
            session,
            daily_date: Some(date),
            unsaved: None,
        })
    }

    /// Abandon the current game and start a normal one
    ///
    /// A finished game still waiting in `pending_record` is dropped.
    pub fn new_game(&mut self) {
        if let Some(record) = self.unsaved.take() {
            warn!(word = %record.word, mode = %record.mode, "discarding unsaved game result");
        }
        self.session
            .restart(self.bank.random_word().clone(), GameMode::Normal);
        self.daily_date = None;
    }

    /// Submit a guess dated today
    ///
    /// # Errors
    ///
    /// See [`GameController::submit_guess_on`].
    pub async fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome> {
        self.submit_guess_on(raw, Local::now().date_naive()).await
    }

    /// Submit a guess; a game-ending guess is saved before this returns
    ///
    /// `date` stamps normal games only. A daily game is always recorded under
    /// the date it was opened for, even if it ends on a later day.
    ///
    /// # Errors
    ///
    /// Any validation error from [`GameSession::submit_guess`], or `Store` if the
    /// finished game could not be saved. In the latter case the guess has been
    /// applied and the record waits in `pending_record`.
    pub async fn submit_guess_on(&mut self, raw: &str, date: NaiveDate) -> Result<GuessOutcome> {
        let date = self.daily_date.unwrap_or(date);
        let outcome = self.session.submit_guess(raw, self.bank, date)?;

        if let Some(record) = &outcome.record {
            self.unsaved = Some(record.clone());
            self.save_pending().await?;
        }

        Ok(outcome)
    }

    /// Retry saving a finished game whose save failed
    ///
    /// # Errors
    ///
    /// `Store` if the append fails again.
    pub async fn save_pending(&mut self) -> Result<()> {
        let Some(record) = self.unsaved.clone() else {
            return Ok(());
        };

        match self.store.append(record).await {
            Ok(()) => {
                info!(word = %self.session.target(), "game result saved");
                self.unsaved = None;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to save game result");
                Err(e.into())
            }
        }
    }

    #[must_use]
    pub const fn pending_record(&self) -> Option<&GameResultRecord> {
        self.unsaved.as_ref()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }
}
