//! The set of local boards the next player may play on.

use super::{GlobalBoard, Location};
use serde::{Deserialize, Serialize};

/// Boards open to the next move.
///
/// A move at cell `c` sends the opponent to board `c`. If that board is
/// over, every board that is not over opens up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActiveBoards {
    /// Play is restricted to one board.
    Forced(Location),
    /// Any board that is not over may be played.
    Open,
    /// The game is over; nothing may be played.
    Closed,
}

impl ActiveBoards {
    /// Active set after a move at cell `local_loc`, given the board it left.
    pub fn after_move(local_loc: Location, board: &GlobalBoard) -> Self {
        if board.is_over() {
            ActiveBoards::Closed
        } else if board.board(local_loc).is_over() {
            ActiveBoards::Open
        } else {
            ActiveBoards::Forced(local_loc)
        }
    }

    /// Active set following the last applied move, or the opening position
    /// when there is none.
    pub fn following(last_cell: Option<Location>, board: &GlobalBoard) -> Self {
        match last_cell {
            Some(cell) => Self::after_move(cell, board),
            None if board.is_over() => ActiveBoards::Closed,
            None => ActiveBoards::Open,
        }
    }

    /// Checks whether `target` may be played.
    pub fn contains(&self, target: Location, board: &GlobalBoard) -> bool {
        match self {
            ActiveBoards::Forced(forced) => *forced == target,
            ActiveBoards::Open => !board.board(target).is_over(),
            ActiveBoards::Closed => false,
        }
    }

    /// Lists the playable boards in row-major order.
    pub fn boards(&self, board: &GlobalBoard) -> Vec<Location> {
        match self {
            ActiveBoards::Forced(forced) => vec![*forced],
            ActiveBoards::Open => board.open_boards(),
            ActiveBoards::Closed => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ultimate::{Player, Square};

    #[test]
    fn test_move_sends_to_matching_board() {
        let board = GlobalBoard::new();
        let active = ActiveBoards::after_move(Location::MIDDLE_RIGHT, &board);
        assert_eq!(active, ActiveBoards::Forced(Location::MIDDLE_RIGHT));
        assert!(active.contains(Location::MIDDLE_RIGHT, &board));
        assert!(!active.contains(Location::CENTER, &board));
    }

    #[test]
    fn test_completed_target_opens_play() {
        let mut board = GlobalBoard::new();
        for cell in [Location::TOP_LEFT, Location::CENTER, Location::BOTTOM_RIGHT] {
            board
                .place(Location::MIDDLE_RIGHT, cell, Square::Occupied(Player::X))
                .unwrap();
        }

        let active = ActiveBoards::after_move(Location::MIDDLE_RIGHT, &board);
        assert_eq!(active, ActiveBoards::Open);
        assert!(!active.contains(Location::MIDDLE_RIGHT, &board));
        assert_eq!(active.boards(&board), board.open_boards());
        assert_eq!(active.boards(&board).len(), 8);
    }

    #[test]
    fn test_no_last_move_is_open() {
        let board = GlobalBoard::new();
        assert_eq!(ActiveBoards::following(None, &board), ActiveBoards::Open);
        assert_eq!(ActiveBoards::Open.boards(&board), Location::ALL.to_vec());
    }
}
