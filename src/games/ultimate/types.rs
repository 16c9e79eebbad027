//! Core domain types for ultimate tic-tac-toe.

use super::invariants::InvariantViolation;
use super::location::Location;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on a local board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// One 3x3 tic-tac-toe board.
///
/// The owner is derived from the cells and recomputed from scratch on every
/// write, so clearing a cell can reopen a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalBoard {
    /// Cells in row-major order.
    cells: [Square; 9],
    owner: Option<Player>,
}

impl LocalBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Square::Empty; 9],
            owner: None,
        }
    }

    /// Gets the cell at `cell`.
    pub fn get(&self, cell: Location) -> Square {
        self.cells[cell.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Location) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Square; 9] {
        &self.cells
    }

    /// The player holding three in a row, if any.
    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(|cell| !self.is_empty(cell))
    }

    /// A board is over once it is won or full.
    pub fn is_over(&self) -> bool {
        self.owner.is_some() || self.is_full()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Location> + '_ {
        Location::ALL
            .into_iter()
            .filter(move |&cell| self.is_empty(cell))
    }

    /// Writes a cell and recomputes the owner.
    ///
    /// Placing a mark requires an empty cell on a board that is not over;
    /// clearing is always allowed. On any failure the board is left unchanged.
    #[instrument(skip(self))]
    pub(crate) fn set(&mut self, cell: Location, square: Square) -> Result<(), InvariantViolation> {
        if let Square::Occupied(player) = square {
            if self.is_over() {
                warn!(?cell, %player, "Write to a completed board");
                return Err(InvariantViolation::new(format!(
                    "Board is already complete, cannot place {} at {}",
                    player, cell
                )));
            }
            if !self.is_empty(cell) {
                warn!(?cell, %player, "Write to an occupied cell");
                return Err(InvariantViolation::new(format!(
                    "Cell {} is already occupied",
                    cell
                )));
            }
        }

        let before = *self;
        self.cells[cell.to_index()] = square;
        if let Err(violation) = self.recompute_owner() {
            *self = before;
            return Err(violation);
        }
        Ok(())
    }

    /// Re-derives the owner from the current cells.
    pub fn recompute_owner(&mut self) -> Result<Option<Player>, InvariantViolation> {
        let cells = self.cells;
        self.owner = rules::grid_owner(|cell| cells[cell.to_index()].player())?;
        Ok(self.owner)
    }
}

impl Default for LocalBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// The 3x3 grid of local boards.
///
/// Owns its boards by index. The global owner is derived from the local
/// owners with the same rule a local board applies to its cells; tied
/// boards count as unowned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalBoard {
    /// Local boards in row-major order.
    boards: [LocalBoard; 9],
    owner: Option<Player>,
}

impl GlobalBoard {
    /// Creates a grid of empty boards.
    pub fn new() -> Self {
        Self {
            boards: [LocalBoard::new(); 9],
            owner: None,
        }
    }

    /// Gets the local board at `board`.
    pub fn board(&self, board: Location) -> &LocalBoard {
        &self.boards[board.to_index()]
    }

    /// Returns all local boards in row-major order.
    pub fn boards(&self) -> &[LocalBoard; 9] {
        &self.boards
    }

    /// The player holding three local boards in a row, if any.
    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    /// Owner of each local board in row-major order.
    pub fn owner_grid(&self) -> [Option<Player>; 9] {
        self.boards.map(|board| board.owner())
    }

    /// Checks if every local board is over.
    pub fn is_full(&self) -> bool {
        rules::is_full(|board| self.board(board).is_over())
    }

    /// The game is over once it is won or every local board is over.
    pub fn is_over(&self) -> bool {
        self.owner.is_some() || self.is_full()
    }

    /// Local boards that are not over, in row-major order.
    pub fn open_boards(&self) -> Vec<Location> {
        Location::ALL
            .into_iter()
            .filter(|&board| !self.board(board).is_over())
            .collect()
    }

    /// Writes a cell on one local board and propagates any completion change.
    ///
    /// All-or-nothing: if either level reports a violation, both levels are
    /// restored.
    #[instrument(skip(self))]
    pub(crate) fn place(
        &mut self,
        board: Location,
        cell: Location,
        square: Square,
    ) -> Result<(), InvariantViolation> {
        let index = board.to_index();
        let before = self.boards[index];

        self.boards[index].set(cell, square)?;

        if before.is_over() != self.boards[index].is_over() {
            let owner_before = self.owner;
            if let Err(violation) = self.propagate(board) {
                self.boards[index] = before;
                self.owner = owner_before;
                return Err(violation);
            }
        }
        Ok(())
    }

    /// Recomputes the global owner after the local board at `board` changed
    /// completion state.
    #[instrument(skip(self))]
    pub fn propagate(&mut self, board: Location) -> Result<Option<Player>, InvariantViolation> {
        let local = self.board(board);
        debug!(owner = ?local.owner(), over = local.is_over(), "Local board completion changed");
        self.recompute_owner()
    }

    /// Re-derives the global owner from the local board owners.
    pub fn recompute_owner(&mut self) -> Result<Option<Player>, InvariantViolation> {
        let owners = self.owner_grid();
        self.owner = rules::grid_owner(|board| owners[board.to_index()])?;
        Ok(self.owner)
    }
}

impl Default for GlobalBoard {
    fn default() -> Self {
        Self::new()
    }
}
