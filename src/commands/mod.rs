//! Command implementations

pub mod play;
pub mod stats;

pub use play::{run_daily, run_normal};
pub use stats::{show_statistics, show_word_for_date};
