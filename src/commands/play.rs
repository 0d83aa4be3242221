//! Interactive game loop
//!
//! Text-based frontend: reads guesses from stdin, forwards them to the
//! controller and prints the board after each one.

use crate::error::GameError;
use crate::game::{GameController, GameMode};
use crate::output::{print_board, print_result};
use crate::stats::StatisticsStore;
use crate::wordlists::WordBank;
use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

type Input = Lines<BufReader<Stdin>>;

/// Play normal games until the player quits
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub async fn run_normal<S: StatisticsStore>(bank: &WordBank, store: &S) -> Result<()> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut game = GameController::normal(bank, store);

    print_intro(GameMode::Normal);
    loop {
        if !play_one(&mut game, &mut input).await? {
            break;
        }
        match prompt(&mut input, "Play again? (yes/no)").await?.as_deref() {
            Some("yes" | "y") => {
                game.new_game();
                println!("\n🔄 New game started!");
            }
            _ => break,
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Play the daily challenge for `date`
///
/// # Errors
///
/// Returns an error if the log cannot be read or stdin fails. Having already
/// played today is reported to the player, not returned.
pub async fn run_daily<S: StatisticsStore>(
    bank: &WordBank,
    store: &S,
    date: NaiveDate,
) -> Result<()> {
    let mut game = match GameController::daily(bank, store, date).await {
        Ok(game) => game,
        Err(e @ GameError::DailyAlreadyPlayed(_)) => {
            println!("\n✓ {e}. Come back tomorrow!\n");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    print_intro(GameMode::Daily);
    play_one(&mut game, &mut input).await?;
    Ok(())
}

fn print_intro(mode: GameMode) {
    println!("\n╔══════════════════════════════════════════════╗");
    match mode {
        GameMode::Normal => println!("║              Wordle - Free Play              ║"),
        GameMode::Daily => println!("║            Wordle - Daily Challenge          ║"),
    }
    println!("╚══════════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in six tries.");
    println!("  {} right letter, right spot", "🟩".green());
    println!("  {} right letter, wrong spot", "🟨".yellow());
    println!("  {} letter not in the word", "⬜".white());
    println!("\nType 'quit' to leave.");
}

/// Run one game to its end
///
/// Returns `false` if the player quit or input ended before the game finished.
async fn play_one<S: StatisticsStore>(
    game: &mut GameController<'_, S>,
    input: &mut Input,
) -> Result<bool> {
    print_board(&game.snapshot());

    loop {
        let Some(line) = prompt(input, "Guess").await? else {
            return Ok(false);
        };
        if matches!(line.as_str(), "quit" | "q" | "exit") {
            return Ok(false);
        }

        match game.submit_guess(&line).await {
            Ok(outcome) => {
                print_board(&outcome.snapshot);
                if let Some(record) = &outcome.record {
                    print_result(&outcome.snapshot, record);
                    return Ok(true);
                }
            }
            Err(GameError::Store(e)) => {
                println!("{} {e}", "❌ Your result could not be saved:".red().bold());
                return retry_save(game, input).await;
            }
            Err(e) => println!("{} {e}", "❌".red()),
        }
    }
}

/// Keep offering to save a finished game until it succeeds or the player gives up
async fn retry_save<S: StatisticsStore>(
    game: &mut GameController<'_, S>,
    input: &mut Input,
) -> Result<bool> {
    let snapshot = game.snapshot();
    if let Some(record) = game.pending_record() {
        print_result(&snapshot, record);
    }

    while game.pending_record().is_some() {
        match prompt(input, "Retry saving? (yes/no)").await?.as_deref() {
            Some("yes" | "y") => match game.save_pending().await {
                Ok(()) => println!("{}", "✓ Result saved.".green()),
                Err(e) => println!("{} {e}", "❌".red()),
            },
            _ => {
                println!("{}", "Result discarded.".yellow());
                break;
            }
        }
    }
    Ok(true)
}

/// Prompt and read one trimmed line, `None` at end of input
async fn prompt(input: &mut Input, label: &str) -> Result<Option<String>> {
    use std::io::Write;

    print!("{label}: ");
    std::io::stdout().flush()?;
    Ok(input
        .next_line()
        .await?
        .map(|line| line.trim().to_lowercase()))
}
