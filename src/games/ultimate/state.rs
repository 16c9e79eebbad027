//! Game state machine: turns, active boards, and undo/redo history.

use super::action::{HistoryError, Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::invariants::InvariantViolation;
use super::phases::{GameStatus, Outcome};
use super::snapshot::GameSnapshot;
use super::{ActiveBoards, GlobalBoard, Location, Player, Square};
use tracing::{debug, info, instrument, warn};

/// Complete state of one game.
///
/// Mutated only through [`play`](Self::play), [`undo`](Self::undo),
/// [`redo`](Self::redo) and [`reset`](Self::reset). Every transition is
/// all-or-nothing.
///
/// History is an undo/redo buffer: moves before the cursor are applied,
/// moves at or after it are retained for redo. A new move truncates the
/// redo tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: GlobalBoard,
    active: ActiveBoards,
    turn: Player,
    status: GameStatus,
    history: Vec<Move>,
    cursor: usize,
}

impl GameState {
    /// Creates a new game: empty boards, X to move, every board open.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: GlobalBoard::new(),
            active: ActiveBoards::Open,
            turn: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            cursor: 0,
        }
    }

    /// Replays placements from a fresh game.
    #[instrument]
    pub fn replay(placements: &[(Location, Location)]) -> Result<Self, MoveError> {
        let mut state = Self::new();
        for &(board, cell) in placements {
            state.play(board, cell)?;
        }
        Ok(state)
    }

    /// Returns the global board.
    pub fn board(&self) -> &GlobalBoard {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut GlobalBoard {
        &mut self.board
    }

    /// Returns the active board constraint.
    pub fn active(&self) -> ActiveBoards {
        self.active
    }

    /// Boards the next player may play on, row-major.
    pub fn active_boards(&self) -> Vec<Location> {
        self.active.boards(&self.board)
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game ended with one.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history[..self.cursor]
    }

    /// Undone moves that redo would reapply, next first.
    pub fn redo_tail(&self) -> &[Move] {
        &self.history[self.cursor..]
    }

    /// Number of applied moves.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true if there is a move to undo.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns true if there is a move to redo.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.history.len()
    }

    /// Every legal move: active boards row-major, then empty cells row-major.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.active_boards()
            .into_iter()
            .flat_map(|board| {
                self.board
                    .board(board)
                    .empty_cells()
                    .map(move |cell| Move::new(board, cell, self.turn))
            })
            .collect()
    }

    /// Places the current player's mark at `local_loc` of board `global_loc`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has ended
    /// - [`MoveError::InactiveBoard`] if the board is not active
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn play(&mut self, global_loc: Location, local_loc: Location) -> Result<Move, MoveError> {
        if let Err(err) = MoveContract::pre(self, &(global_loc, local_loc)) {
            warn!(%err, "Move rejected");
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mv = Move::new(global_loc, local_loc, self.turn);
        self.apply(mv)?;
        self.history.truncate(self.cursor);
        self.history.push(mv);
        self.cursor += 1;

        debug!(%mv, cursor = self.cursor, "Move applied");
        if let GameStatus::Over(outcome) = self.status {
            info!(%outcome, moves = self.cursor, "Game over");
        }

        #[cfg(debug_assertions)]
        debug_assert!(
            MoveContract::post(&before, self).is_ok(),
            "Move postcondition violated"
        );

        Ok(mv)
    }

    /// Plays cell `local_loc` on the single board play is forced to.
    ///
    /// Scripted move lists omit the board when only one is playable.
    #[instrument(skip(self))]
    pub fn play_forced(&mut self, local_loc: Location) -> Result<Move, MoveError> {
        match self.active {
            ActiveBoards::Forced(board) => self.play(board, local_loc),
            ActiveBoards::Open => Err(MoveError::BoardNotForced),
            ActiveBoards::Closed => Err(MoveError::GameOver),
        }
    }

    /// Reverses the most recent applied move.
    ///
    /// Clearing the cell can reopen its local board and reopen a finished
    /// game. The active set is derived from the move before the undone one.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn undo(&mut self) -> Result<Move, HistoryError> {
        if self.cursor == 0 {
            debug!("Nothing to undo");
            return Err(HistoryError::NoHistory);
        }

        let mv = self.history[self.cursor - 1];
        self.board.place(mv.global_loc, mv.local_loc, Square::Empty)?;
        self.cursor -= 1;
        self.turn = mv.player;
        let last_cell = self.history().last().map(|prev| prev.local_loc);
        self.active = ActiveBoards::following(last_cell, &self.board);
        self.refresh_status();

        debug!(%mv, cursor = self.cursor, "Move undone");
        Ok(mv)
    }

    /// Reapplies the move at the cursor.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn redo(&mut self) -> Result<Move, HistoryError> {
        let Some(&mv) = self.history.get(self.cursor) else {
            debug!("Nothing to redo");
            return Err(HistoryError::NoFutureHistory);
        };

        self.apply(mv)?;
        self.cursor += 1;

        debug!(%mv, cursor = self.cursor, "Move redone");
        Ok(mv)
    }

    /// Discards the game, including history, and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            active_boards: self.active_boards(),
            turn: self.turn,
            status: self.status,
            winner: self.winner(),
            board_grid: self.board.boards().map(|board| *board.cells()),
            board_owners: self.board.owner_grid(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Writes the mark and derives turn, active set and status from it.
    fn apply(&mut self, mv: Move) -> Result<(), InvariantViolation> {
        self.board
            .place(mv.global_loc, mv.local_loc, Square::Occupied(mv.player))?;
        self.turn = mv.player.opponent();
        self.active = ActiveBoards::after_move(mv.local_loc, &self.board);
        self.refresh_status();
        Ok(())
    }

    fn refresh_status(&mut self) {
        self.status = match self.board.owner() {
            Some(winner) => GameStatus::Over(Outcome::Winner(winner)),
            None if self.board.is_full() => GameStatus::Over(Outcome::Draw),
            None => GameStatus::InProgress,
        };
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
