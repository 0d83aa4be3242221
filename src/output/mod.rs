//! Terminal output formatting
//!
//! Display utilities for the board, results and statistics.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_result, print_statistics};
