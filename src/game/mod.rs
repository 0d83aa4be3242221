//! Gameplay: the session state machine and its async controller

mod controller;
mod session;

pub use controller::GameController;
pub use session::{GameSession, GameStatus, GuessOutcome, MAX_ATTEMPTS, SessionSnapshot};
pub use crate::stats::GameMode;
