//! Strictly Ultimate - ultimate tic-tac-toe engine
//!
//! Nine local tic-tac-toe boards in a 3x3 global grid. A move's cell decides
//! which local board the opponent must play next.
//!
//! # Architecture
//!
//! - **Boards**: [`LocalBoard`] and [`GlobalBoard`] derive ownership with one
//!   shared win rule
//! - **State**: [`GameState`] applies moves, tracks the active boards, and
//!   keeps an undo/redo history
//! - **Game**: [`Game`] wraps a state and notifies [`GameObserver`]s
//! - **AI**: [`HeuristicAi`] scores legal moves with a shallow negamax
//!
//! # Example
//!
//! ```
//! use strictly_ultimate::{Game, HeuristicAi, Location, Player};
//!
//! let mut game = Game::new();
//! game.play(Location::CENTER, Location::TOP_LEFT)?;
//! assert_eq!(game.state().turn(), Player::O);
//! assert_eq!(game.state().active_boards(), vec![Location::TOP_LEFT]);
//!
//! let reply = game.best_move(&HeuristicAi::default())?;
//! assert_eq!(reply.global_loc, Location::TOP_LEFT);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai_config;
mod games;

// Crate-level exports - AI configuration
pub use ai_config::{AiConfig, ConfigError};

// Crate-level exports - Game types (ultimate tic-tac-toe)
pub use games::ultimate::{
    ActiveBoards, ActiveBoardsInvariant, AlternatingTurnInvariant, BoardIsActive, CellIsEmpty,
    Contract, EventLog, Game, GameEvent, GameNotOver, GameObserver, GameSnapshot, GameState,
    GameStatus, GlobalBoard, HeuristicAi, HistoryConsistentInvariant, HistoryError, Invariant,
    InvariantSet, InvariantViolation, LegalMove, LocalBoard, Location, Move, MoveContract,
    MoveError, Outcome, POSITION_WEIGHTS, Placement, Player, SearchError, Square,
    UltimateInvariants, WIN_LINES, Weights, count_threats, grid_owner, is_full, line_owner,
};
