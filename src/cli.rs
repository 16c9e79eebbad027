//! Command-line interface for strictly_ultimate.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Ultimate - ultimate tic-tac-toe against a heuristic AI
#[derive(Parser, Debug)]
#[command(name = "strictly_ultimate")]
#[command(about = "Ultimate tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the AI
    Play {
        /// Path to AI config (TOML). Defaults are used when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Let the AI move first (the AI plays X)
        #[arg(long)]
        ai_first: bool,
    },

    /// Let two AIs play each other
    #[command(name = "selfplay")]
    SelfPlay {
        /// Config for the first AI
        #[arg(long)]
        first: Option<PathBuf>,

        /// Config for the second AI
        #[arg(long)]
        second: Option<PathBuf>,

        /// Number of games; the AIs swap sides every game
        #[arg(short, long, default_value = "2")]
        games: u32,

        /// Print the board after every move
        #[arg(short, long)]
        verbose: bool,
    },

    /// Replay a move list and print the final snapshot as JSON
    Replay {
        /// Moves as BOARD/CELL, or CELL alone when play is forced.
        /// Locations are 1-9 or names such as "center" or "top-left".
        moves: Vec<String>,
    },
}
