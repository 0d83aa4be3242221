//! Wordle Daily - CLI
//!
//! Free play, a once-per-day challenge, and persistent player statistics.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_daily::{
    commands::{run_daily, run_normal, show_statistics, show_word_for_date},
    config::{Config, DEFAULT_STORE_PATH, WordListSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: WordListSource,

    /// Where finished games are recorded
    #[arg(long, global = true, env = "WORDLE_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Free play with a random word (default)
    Play,

    /// Today's daily challenge, playable once per day
    Daily,

    /// Show win rate, streak, rank and guess distribution
    Stats,

    /// Print the daily word for a date
    WordForDate {
        /// Date as YYYY-MM-DD
        date: NaiveDate,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => tracing::Level::ERROR,
        (_, 0) => tracing::Level::WARN,
        (_, 1) => tracing::Level::INFO,
        (_, 2) => tracing::Level::DEBUG,
        (_, _) => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config {
        word_list: cli.wordlist,
        store_path: cli.store,
    };

    let bank = config
        .load_word_bank()
        .await
        .context("Failed to load word bank")?;
    let store = config.open_store();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_normal(&bank, &store).await,
        Commands::Daily => run_daily(&bank, &store, Local::now().date_naive()).await,
        Commands::Stats => {
            show_statistics(&store).await;
            Ok(())
        }
        Commands::WordForDate { date } => {
            show_word_for_date(&bank, date);
            Ok(())
        }
    }
}
