//! Statistics and daily word lookups

use crate::daily;
use crate::output::print_statistics;
use crate::stats::{StatisticsReport, StatisticsStore, load_statistics};
use crate::wordlists::WordBank;
use chrono::NaiveDate;

/// Load statistics from `store` and print them
pub async fn show_statistics<S: StatisticsStore>(store: &S) -> StatisticsReport {
    let report = load_statistics(store).await;
    print_statistics(&report);
    report
}

/// Print the daily word for `date`
pub fn show_word_for_date(bank: &WordBank, date: NaiveDate) {
    println!("{date}: {}", daily::word_for_date(bank, date));
}
