//! Player statistics derived from the result log
//!
//! All functions take records most recent first, as returned by
//! `StatisticsStore::all_records`.

use super::{GameResultRecord, StatisticsStore};
use crate::game::MAX_ATTEMPTS;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Coarse skill label derived from total wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum Rank {
    #[default]
    Newbie,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Master,
}

impl Rank {
    /// Minimum wins for each rank, highest first
    const THRESHOLDS: [(usize, Self); 6] = [
        (100, Self::Master),
        (50, Self::Expert),
        (30, Self::Advanced),
        (15, Self::Intermediate),
        (5, Self::Beginner),
        (0, Self::Newbie),
    ];

    /// Highest rank whose threshold `wins` meets
    #[must_use]
    pub fn for_wins(wins: usize) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|&&(min, _)| wins >= min)
            .map_or(Self::Newbie, |&(_, rank)| rank)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newbie => "Newbie",
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
            Self::Master => "Master",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[must_use]
pub fn total_wins(records: &[GameResultRecord]) -> usize {
    records.iter().filter(|r| r.won).count()
}

#[must_use]
pub fn total_losses(records: &[GameResultRecord]) -> usize {
    records.iter().filter(|r| !r.won).count()
}

/// Percentage of games won, 0.0 with no games
#[must_use]
pub fn win_rate(records: &[GameResultRecord]) -> f64 {
    let wins = total_wins(records);
    let total = wins + total_losses(records);
    if total == 0 {
        0.0
    } else {
        100.0 * wins as f64 / total as f64
    }
}

/// Mean attempt count over won games only, 0.0 with no wins
#[must_use]
pub fn average_winning_attempts(records: &[GameResultRecord]) -> f64 {
    let (count, sum) = records
        .iter()
        .filter(|r| r.won)
        .fold((0usize, 0usize), |(count, sum), r| {
            (count + 1, sum + usize::from(r.attempts))
        });

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Consecutive wins counted back from the most recent game
#[must_use]
pub fn current_streak(records: &[GameResultRecord]) -> usize {
    records.iter().take_while(|r| r.won).count()
}

#[must_use]
pub fn rank(records: &[GameResultRecord]) -> Rank {
    Rank::for_wins(total_wins(records))
}

/// Won games per attempt count; index 0 is a win on the first guess
#[must_use]
pub fn guess_distribution(records: &[GameResultRecord]) -> [usize; MAX_ATTEMPTS] {
    let mut distribution = [0; MAX_ATTEMPTS];
    for r in records.iter().filter(|r| r.won) {
        if let Some(slot) = usize::from(r.attempts)
            .checked_sub(1)
            .and_then(|i| distribution.get_mut(i))
        {
            *slot += 1;
        }
    }
    distribution
}

/// Menu statistics, recomputed from the full log on demand
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlayerStatistics {
    pub total_wins: usize,
    pub total_losses: usize,
    pub win_rate: f64,
    pub average_winning_attempts: f64,
    pub current_streak: usize,
    pub rank: Rank,
    pub guess_distribution: [usize; MAX_ATTEMPTS],
}

impl PlayerStatistics {
    #[must_use]
    pub fn from_records(records: &[GameResultRecord]) -> Self {
        Self {
            total_wins: total_wins(records),
            total_losses: total_losses(records),
            win_rate: win_rate(records),
            average_winning_attempts: average_winning_attempts(records),
            current_streak: current_streak(records),
            rank: rank(records),
            guess_distribution: guess_distribution(records),
        }
    }

    #[must_use]
    pub const fn games_played(&self) -> usize {
        self.total_wins + self.total_losses
    }
}

/// Statistics plus the reason they were zeroed, if the store could not be read
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatisticsReport {
    pub statistics: PlayerStatistics,
    pub degraded: Option<String>,
}

impl StatisticsReport {
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }
}

/// Read the store and compute statistics
///
/// A read failure yields zeroed statistics with `degraded` set, and is logged.
pub async fn load_statistics<S: StatisticsStore>(store: &S) -> StatisticsReport {
    match store.all_records().await {
        Ok(records) => StatisticsReport {
            statistics: PlayerStatistics::from_records(&records),
            degraded: None,
        },
        Err(e) => {
            warn!(error = %e, "statistics unavailable, showing defaults");
            StatisticsReport {
                statistics: PlayerStatistics::default(),
                degraded: Some(e.to_string()),
            }
        }
    }
}
