//! Display functions for game state and statistics

use super::formatters::{create_progress_bar, row_tiles};
use crate::game::{GameMode, GameStatus, SessionSnapshot};
use crate::stats::{GameResultRecord, StatisticsReport};
use colored::Colorize;

/// Print the board with every row, blanks included
pub fn print_board(snapshot: &SessionSnapshot) {
    println!();
    for row in &snapshot.rows {
        println!("   {}", row_tiles(row));
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_result(snapshot: &SessionSnapshot, record: &GameResultRecord) {
    println!("{}", "═".repeat(50).bright_cyan());
    match snapshot.status {
        GameStatus::Won => {
            println!(
                "  {} {}",
                record.verdict().bright_yellow().bold(),
                format!(
                    "Solved in {} {}",
                    record.attempts,
                    if record.attempts == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
            );
        }
        GameStatus::Lost => {
            println!("  {}", "Out of guesses!".red().bold());
        }
        GameStatus::Ongoing => {}
    }

    if let Some(word) = &snapshot.revealed {
        println!("  The word was {}", word.text().bright_white().bold());
    }

    println!("\n  Guess history:");
    for (i, row) in snapshot.rows.iter().enumerate() {
        if let (Some(word), Some(feedback)) = (row.word(), row.feedback()) {
            println!(
                "    {}. {} {}",
                (i + 1).to_string().bright_black(),
                word.text().bright_white().bold(),
                feedback.to_emoji()
            );
        }
    }
    if snapshot.mode == GameMode::Daily {
        println!("\n  {}", "Come back tomorrow for a new daily word!".bright_cyan());
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print the player's statistics
pub fn print_statistics(report: &StatisticsReport) {
    let stats = &report.statistics;

    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "PLAYER STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    if let Some(reason) = &report.degraded {
        println!(
            "\n{} {}",
            "⚠ Statistics unavailable, showing defaults:".yellow().bold(),
            reason
        );
    }

    println!("\n   Rank:             {}", stats.rank.to_string().bright_yellow().bold());
    println!("   Games played:     {}", stats.games_played());
    println!("   Wins:             {}", stats.total_wins.to_string().green());
    println!("   Losses:           {}", stats.total_losses.to_string().red());
    println!("   Win rate:         {:.1}%", stats.win_rate);
    println!("   Current streak:   {}", stats.current_streak);
    println!("   Average attempts: {:.2}", stats.average_winning_attempts);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
}
