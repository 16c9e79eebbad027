//! Game status and outcome.

use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(super::Player),
    /// Game ended in a tie.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<super::Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins!", player),
            Outcome::Draw => write!(f, "Tie game"),
        }
    }
}

/// Whether the game accepts moves.
///
/// Undo can move a game from `Over` back to `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// The global board is won or every local board is over.
    Over(Outcome),
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over(_))
    }

    /// Returns the outcome once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Over(outcome) => Some(*outcome),
        }
    }

    /// Returns the winner, if the game ended with one.
    pub fn winner(&self) -> Option<super::Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Over(outcome) => outcome.winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ultimate::Player;

    #[test]
    fn test_outcome_queries() {
        let win = GameStatus::Over(Outcome::Winner(Player::O));
        assert_eq!(win.outcome(), Some(Outcome::Winner(Player::O)));
        assert_eq!(win.winner(), Some(Player::O));
        assert!(!Outcome::Winner(Player::O).is_draw());

        let draw = GameStatus::Over(Outcome::Draw);
        assert!(draw.outcome().is_some_and(|outcome| outcome.is_draw()));
        assert_eq!(draw.winner(), None);
        assert_eq!(Outcome::Draw.to_string(), "Tie game");

        assert_eq!(GameStatus::InProgress.outcome(), None);
    }
}
