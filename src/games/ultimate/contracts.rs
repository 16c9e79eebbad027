//! Contract-based validation for moves.
//!
//! Preconditions are checked before anything is written, so a rejected move
//! leaves the game untouched. Postconditions re-check the invariant set in
//! debug builds.

use super::action::MoveError;
use super::invariants::{InvariantSet, UltimateInvariants};
use super::{GameState, Location};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// A proposed placement: (board, cell).
pub type Placement = (Location, Location);

/// Precondition: the game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves after the game has ended.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target board must be in the active set.
pub struct BoardIsActive;

impl BoardIsActive {
    /// Rejects moves on boards the player was not sent to.
    #[instrument(skip(state))]
    pub fn check(board: Location, state: &GameState) -> Result<(), MoveError> {
        if state.active().contains(board, state.board()) {
            Ok(())
        } else {
            Err(MoveError::InactiveBoard(board))
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an existing mark.
    #[instrument(skip(state))]
    pub fn check(board: Location, cell: Location, state: &GameState) -> Result<(), MoveError> {
        if state.board().board(board).is_empty(cell) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(board, cell))
        }
    }
}

/// Composite precondition: all of the above, in order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a placement.
    #[instrument(skip(state))]
    pub fn check(board: Location, cell: Location, state: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        BoardIsActive::check(board, state)?;
        CellIsEmpty::check(board, cell, state)?;
        Ok(())
    }
}

/// Contract for placements.
///
/// Preconditions:
/// - Game is in progress
/// - Board is active
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one more move is applied
/// - All game invariants hold
pub struct MoveContract;

impl Contract<GameState, Placement> for MoveContract {
    fn pre(state: &GameState, action: &Placement) -> Result<(), MoveError> {
        let (board, cell) = *action;
        LegalMove::check(board, cell, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "Move did not advance history by one"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history did not advance by one move".to_string(),
            ));
        }

        UltimateInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_open_board() {
        let state = GameState::new();
        let action = (Location::CENTER, Location::CENTER);
        assert!(MoveContract::pre(&state, &action).is_ok());
    }

    #[test]
    fn test_precondition_inactive_board() {
        let mut state = GameState::new();
        state.play(Location::CENTER, Location::TOP_LEFT).unwrap();

        let action = (Location::BOTTOM_RIGHT, Location::CENTER);
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(MoveError::InactiveBoard(Location::BOTTOM_RIGHT))
        );
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut state = GameState::new();
        state.play(Location::CENTER, Location::CENTER).unwrap();

        let action = (Location::CENTER, Location::CENTER);
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(MoveError::CellOccupied(Location::CENTER, Location::CENTER))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut after = before.clone();
        after.play(Location::TOP_LEFT, Location::BOTTOM_RIGHT).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_move() {
        let before = GameState::new();
        assert!(MoveContract::post(&before, &before).is_err());
    }
}
