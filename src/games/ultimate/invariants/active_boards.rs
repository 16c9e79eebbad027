//! Active-board invariant: the playable set is never empty mid-game.

use super::super::{ActiveBoards, GameState};
use super::Invariant;

/// Invariant: the active set is one open board, or every open board, and is
/// empty only when the game is over.
pub struct ActiveBoardsInvariant;

impl Invariant<GameState> for ActiveBoardsInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();

        match state.active() {
            ActiveBoards::Closed => board.is_over(),
            ActiveBoards::Open => !board.is_over() && !board.open_boards().is_empty(),
            ActiveBoards::Forced(forced) => !board.is_over() && !board.board(forced).is_over(),
        }
    }

    fn description() -> &'static str {
        "Active boards are a single open board or all open boards, empty only when the game is over"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ultimate::Location;

    #[test]
    fn test_new_game_is_open() {
        let state = GameState::new();
        assert_eq!(state.active(), ActiveBoards::Open);
        assert!(ActiveBoardsInvariant::holds(&state));
    }

    #[test]
    fn test_forced_board_holds() {
        let mut state = GameState::new();
        state.play(Location::CENTER, Location::MIDDLE_RIGHT).unwrap();
        assert_eq!(state.active(), ActiveBoards::Forced(Location::MIDDLE_RIGHT));
        assert!(ActiveBoardsInvariant::holds(&state));
    }
}
