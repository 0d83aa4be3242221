//! Game result log and the statistics computed from it

mod aggregator;
mod record;
mod store;

pub use aggregator::{
    PlayerStatistics, Rank, StatisticsReport, average_winning_attempts, current_streak,
    guess_distribution, load_statistics, rank, total_losses, total_wins, win_rate,
};
pub use record::{GameMode, GameResultRecord};
pub use store::{JsonFileStore, MemoryStore, StatisticsStore};
