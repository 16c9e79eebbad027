//! History consistency invariant: applied moves match the occupied cells.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: every applied move occupies its cell, and nothing else does.
///
/// Moves before the history cursor correspond one-to-one with occupied
/// cells. Moves after the cursor are retained for redo but not on the board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let applied = state.history();

        let occupied = state
            .board()
            .boards()
            .iter()
            .flat_map(|board| board.cells().iter())
            .filter(|cell| **cell != Square::Empty)
            .count();

        let marks_match = applied.iter().all(|mv| {
            state.board().board(mv.global_loc).get(mv.local_loc) == Square::Occupied(mv.player)
        });

        occupied == applied.len() && marks_match
    }

    fn description() -> &'static str {
        "Applied history matches the occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ultimate::Location;

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_with_redo_tail() {
        let mut state = GameState::new();
        state.play(Location::TOP_LEFT, Location::CENTER).unwrap();
        state.play(Location::CENTER, Location::TOP_LEFT).unwrap();
        state.undo().unwrap();

        assert_eq!(state.history().len(), 1);
        assert_eq!(state.redo_tail().len(), 1);
        assert!(HistoryConsistentInvariant::holds(&state));
    }
}
