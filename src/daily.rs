//! Daily challenge selection
//!
//! Every calendar date maps to one word of the bank. The mapping only depends on
//! the date and the bank's order, so every player with the same word list gets
//! the same daily word.

use crate::core::Word;
use crate::error::StoreError;
use crate::stats::{GameMode, StatisticsStore};
use crate::wordlists::WordBank;
use chrono::{Datelike, NaiveDate};

/// 32-bit hash of a calendar date
///
/// `(year & 0xFFFFF800) ^ ((year << 11) + (month << 6) + day)`
#[must_use]
pub fn date_hash(date: NaiveDate) -> i32 {
    let year = date.year();
    let month = date.month() as i32;
    let day = date.day() as i32;
    (year & !0x7FF) ^ (year << 11).wrapping_add(month << 6).wrapping_add(day)
}

/// Index into a list of `len` words for `date`, always in `0..len`
///
/// # Panics
/// Panics if `len` is zero
#[must_use]
pub fn index_for_date(date: NaiveDate, len: usize) -> usize {
    assert!(len > 0, "cannot pick from an empty word list");
    i64::from(date_hash(date)).rem_euclid(len as i64) as usize
}

/// The daily word for `date`
#[must_use]
pub fn word_for_date(bank: &WordBank, date: NaiveDate) -> &Word {
    &bank.words()[index_for_date(date, bank.len())]
}

/// Whether a daily game has already been recorded for `date`
///
/// # Errors
///
/// Returns the store's error if the log cannot be read.
pub async fn already_played_today<S: StatisticsStore>(
    store: &S,
    date: NaiveDate,
) -> Result<bool, StoreError> {
    Ok(store.record_for_date(date, GameMode::Daily).await?.is_some())
}
