//! Ultimate tic-tac-toe: nine local boards in a 3x3 global grid.

mod action;
mod active;
mod contracts;
mod game;
mod invariants;
mod location;
mod observer;
mod phases;
mod rules;
mod search;
mod snapshot;
mod state;
mod types;

pub use action::{HistoryError, Move, MoveError, SearchError};
pub use active::ActiveBoards;
pub use contracts::{
    BoardIsActive, CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract, Placement,
};
pub use game::Game;
pub use invariants::{
    ActiveBoardsInvariant, AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, UltimateInvariants,
};
pub use location::Location;
pub use observer::{EventLog, GameEvent, GameObserver};
pub use phases::{GameStatus, Outcome};
pub use rules::{WIN_LINES, count_threats, grid_owner, is_full, line_owner};
pub use search::{HeuristicAi, POSITION_WEIGHTS, Weights};
pub use snapshot::GameSnapshot;
pub use state::GameState;
pub use types::{GlobalBoard, LocalBoard, Player, Square};
