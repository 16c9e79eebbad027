//! Read-only view of a game for rendering.

use super::{GameStatus, Location, Player, Square};
use serde::{Deserialize, Serialize};

/// Everything a display layer needs to draw the current position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Boards the next player may play on, row-major.
    pub active_boards: Vec<Location>,
    /// Player to move.
    pub turn: Player,
    /// Whether the game is still running.
    pub status: GameStatus,
    /// Winner, if the game ended with one.
    pub winner: Option<Player>,
    /// Cells of each local board; outer index is the board, inner the cell.
    pub board_grid: [[Square; 9]; 9],
    /// Owner of each local board.
    pub board_owners: [Option<Player>; 9],
    /// Whether undo is available.
    pub can_undo: bool,
    /// Whether redo is available.
    pub can_redo: bool,
}

impl GameSnapshot {
    /// The cell at (`board`, `cell`).
    pub fn square(&self, board: Location, cell: Location) -> Square {
        self.board_grid[board.to_index()][cell.to_index()]
    }

    /// A one-line status message.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s turn", self.turn),
            GameStatus::Over(outcome) => outcome.to_string(),
        }
    }
}
