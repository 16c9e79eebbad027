//! Terminal sessions: human vs AI, AI vs AI, and move-list replay.

use crate::render::{self, Announcer};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use std::path::Path;
use strictly_ultimate::{AiConfig, Game, HeuristicAi, Location, Move, Player};
use tracing::{debug, info, instrument, warn};

/// A parsed move: a board and cell, or a cell on the forced board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Cell on whichever board play is forced to.
    Cell(Location),
    /// Cell on an explicit board.
    Placement(Location, Location),
}

impl Target {
    /// Parses `BOARD/CELL`, `BOARD CELL` or a lone `CELL`.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [cell] => Ok(Target::Cell(location(cell)?)),
            [board, cell] => Ok(Target::Placement(location(board)?, location(cell)?)),
            _ => bail!("Expected BOARD/CELL or CELL, got {:?}", input),
        }
    }

    /// Plays this target on `game`.
    pub fn play(self, game: &mut Game) -> Result<Move> {
        let mv = match self {
            Target::Cell(cell) => game.play_forced(cell)?,
            Target::Placement(board, cell) => game.play(board, cell)?,
        };
        Ok(mv)
    }
}

fn location(s: &str) -> Result<Location> {
    Location::from_label_or_number(s).with_context(|| format!("Unknown location {:?}", s))
}

/// Loads an AI config, falling back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AiConfig> {
    match path {
        Some(path) => AiConfig::from_file(path)
            .with_context(|| format!("Loading AI config from {}", path.display())),
        None => Ok(AiConfig::default()),
    }
}

const HELP: &str = "\
Commands:
  BOARD/CELL   play a cell, e.g. 5/1 or center/top-left
  CELL         play a cell on the forced board
  undo, redo   take back or replay your last move and the AI's reply
  hint         ask the AI what it would play
  state        print the game as JSON
  new          start over
  quit         leave";

/// Runs an interactive game on stdin/stdout.
#[instrument(skip(config))]
pub fn play(config: &AiConfig, ai_first: bool) -> Result<()> {
    let ai = config.to_ai();
    let human = if ai_first { Player::O } else { Player::X };
    let mut game = Game::new();
    game.subscribe(Box::new(Announcer));
    info!(%human, depth = ai.depth(), "Starting interactive game");

    println!("You are {}. Type 'help' for commands.", human);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if !game.state().is_over() && game.state().turn() != human {
            let mv = game.play_best(&ai)?;
            println!("AI plays {}", mv);
        }

        let snapshot = game.current_state();
        print!("{}", render::board(&snapshot));
        println!("{}", snapshot.status_line());
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            debug!("Input closed");
            return Ok(());
        };
        let line = line?;
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "q" | "exit" => return Ok(()),
            "help" | "?" => println!("{}", HELP),
            "undo" => undo_pair(&mut game, human),
            "redo" => redo_pair(&mut game, human),
            "new" => game.reset(),
            "hint" => match game.best_move(&ai) {
                Ok(mv) => println!("Hint: {}", mv),
                Err(err) => println!("{}", err),
            },
            "state" => println!("{}", serde_json::to_string_pretty(&snapshot)?),
            _ => match Target::parse(input).and_then(|target| target.play(&mut game)) {
                Ok(mv) => debug!(%mv, "Human move"),
                Err(err) => println!("{:#}", err),
            },
        }
    }
}

/// Undoes until it is the human's turn again, so the AI reply and the
/// human move go together.
fn undo_pair(game: &mut Game, human: Player) {
    if let Err(err) = game.undo() {
        println!("{}", err);
        return;
    }
    if game.state().turn() != human && game.state().can_undo() {
        if let Err(err) = game.undo() {
            warn!(%err, "Second undo failed");
        }
    }
}

/// Redoes the human move and the AI reply that followed it.
fn redo_pair(game: &mut Game, human: Player) {
    if let Err(err) = game.redo() {
        println!("{}", err);
        return;
    }
    if game.state().turn() != human && game.state().can_redo() {
        if let Err(err) = game.redo() {
            warn!(%err, "Second redo failed");
        }
    }
}

/// Win/draw counts across self-play games.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Games won by the first AI.
    pub first: u32,
    /// Games won by the second AI.
    pub second: u32,
    /// Drawn games.
    pub draws: u32,
}

/// Plays `games` AI-vs-AI games, swapping sides each game.
#[instrument(skip(first, second))]
pub fn self_play(
    first: &HeuristicAi,
    second: &HeuristicAi,
    games: u32,
    verbose: bool,
) -> Result<Tally> {
    let mut tally = Tally::default();

    for round in 0..games {
        let first_is_x = round % 2 == 0;
        let (x, o) = if first_is_x {
            (first, second)
        } else {
            (second, first)
        };

        let mut game = Game::new();
        while !game.state().is_over() {
            let ai = match game.state().turn() {
                Player::X => x,
                Player::O => o,
            };
            let mv = game.play_best(ai)?;
            if verbose {
                println!("{}", mv);
                print!("{}", render::board(&game.current_state()));
            }
        }

        let Some(outcome) = game.state().status().outcome() else {
            bail!("Game {} stopped before it was decided", round + 1);
        };
        if outcome.is_draw() {
            tally.draws += 1;
        } else if (outcome.winner() == Some(Player::X)) == first_is_x {
            tally.first += 1;
        } else {
            tally.second += 1;
        }
        info!(game = round + 1, %outcome, moves = game.state().cursor(), "Self-play game finished");
        println!("Game {}: {} in {} moves", round + 1, outcome, game.state().cursor());
    }

    Ok(tally)
}

/// Plays `moves` from a fresh game and returns the result.
#[instrument]
pub fn replay(moves: &[String]) -> Result<Game> {
    let mut game = Game::new();
    for (i, raw) in moves.iter().enumerate() {
        Target::parse(raw)
            .and_then(|target| target.play(&mut game))
            .with_context(|| format!("Move {} ({:?})", i + 1, raw))?;
    }
    Ok(game)
}
