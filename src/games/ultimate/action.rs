//! First-class action types and errors for ultimate tic-tac-toe.
//!
//! Moves are domain events: they are validated before application, kept in
//! the undo/redo history, and replayed by redo.

use super::invariants::InvariantViolation;
use super::{Location, Player};
use serde::{Deserialize, Serialize};

/// A placement: `player` marks cell `local_loc` of the local board at
/// `global_loc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The local board being played.
    pub global_loc: Location,
    /// The cell within that board.
    pub local_loc: Location,
    /// The player making the move.
    pub player: Player,
}

impl Move {
    /// Creates a new move.
    pub fn new(global_loc: Location, local_loc: Location, player: Player) -> Self {
        Self {
            global_loc,
            local_loc,
            player,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} board, {}",
            self.player,
            self.global_loc.label(),
            self.local_loc.label()
        )
    }
}

/// Error returned when a move is rejected.
///
/// Rejection never mutates the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The local board is not in the active set.
    #[display("Board {} is not active", _0)]
    InactiveBoard(Location),

    /// The target cell already holds a mark.
    #[display("Cell {} of board {} is already occupied", _1, _0)]
    CellOccupied(Location, Location),

    /// A board-only move was given while play is open to several boards.
    #[display("Play is not forced to a single board")]
    BoardNotForced,

    /// Applying the move broke a board invariant.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<InvariantViolation> for MoveError {
    fn from(violation: InvariantViolation) -> Self {
        MoveError::InvariantViolation(violation.description)
    }
}

/// Error returned by undo and redo.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// Nothing to undo.
    #[display("No moves to undo")]
    NoHistory,

    /// Nothing to redo.
    #[display("No moves to redo")]
    NoFutureHistory,

    /// Reversing or reapplying the move broke a board invariant.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for HistoryError {}

impl From<InvariantViolation> for HistoryError {
    fn from(violation: InvariantViolation) -> Self {
        HistoryError::InvariantViolation(violation.description)
    }
}

/// Error returned by move search.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The position has no legal moves; check `is_over` first.
    #[display("No legal moves available")]
    NoMoves,

    /// A candidate move could not be applied to a scratch copy.
    #[display("Candidate move rejected: {}", _0)]
    Candidate(MoveError),
}

impl std::error::Error for SearchError {}

impl From<MoveError> for SearchError {
    fn from(err: MoveError) -> Self {
        SearchError::Candidate(err)
    }
}
