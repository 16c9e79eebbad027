//! Strictly Ultimate - terminal front end
//!
//! Human vs AI play, AI self-play, and move-list replay.

#![warn(missing_docs)]

mod cli;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, ai_first } => run_play(config, ai_first),
        Command::SelfPlay {
            first,
            second,
            games,
            verbose,
        } => run_self_play(first, second, games, verbose),
        Command::Replay { moves } => run_replay(moves),
    }
}

/// Play against the AI
#[instrument]
fn run_play(config: Option<std::path::PathBuf>, ai_first: bool) -> Result<()> {
    let config = session::load_config(config.as_deref())?;
    session::play(&config, ai_first)
}

/// Let two AIs play each other
#[instrument]
fn run_self_play(
    first: Option<std::path::PathBuf>,
    second: Option<std::path::PathBuf>,
    games: u32,
    verbose: bool,
) -> Result<()> {
    let first = session::load_config(first.as_deref())?.to_ai();
    let second = session::load_config(second.as_deref())?.to_ai();

    let tally = session::self_play(&first, &second, games, verbose)?;
    info!(?tally, "Self-play finished");
    println!(
        "First AI: {} wins, second AI: {} wins, {} draws",
        tally.first, tally.second, tally.draws
    );
    Ok(())
}

/// Replay a move list and print the resulting snapshot
#[instrument]
fn run_replay(moves: Vec<String>) -> Result<()> {
    let game = session::replay(&moves)?;
    println!("{}", serde_json::to_string_pretty(&game.current_state())?);
    Ok(())
}
