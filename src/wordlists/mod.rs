//! Word lists for the game
//!
//! Provides the embedded word list compiled into the binary and the `WordBank`
//! built from it (or from a file).

mod bank;
mod embedded;
pub mod loader;

pub use bank::WordBank;
pub use embedded::{WORDS, WORDS_COUNT};
