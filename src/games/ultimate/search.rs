//! Heuristic move search.
//!
//! Every legal move is applied to a scratch copy of the game and scored for
//! the player making it. With `depth > 1` the score subtracts the
//! opponent's best reply, recursively (a shallow negamax).
//!
//! Scores are integers and candidates are visited in legal-move order with
//! the first of equal scores kept, so identical inputs always select the
//! identical move.

use super::action::{Move, SearchError};
use super::rules::count_threats;
use super::{ActiveBoards, GameState, GlobalBoard, LocalBoard, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

/// Positional value of each cell, row-major: center 3, corners 2, edges 1.
pub const POSITION_WEIGHTS: [i32; 9] = [2, 1, 2, 1, 3, 1, 2, 1, 2];

/// Feature weights for the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    /// Multiplier for the cell's [`POSITION_WEIGHTS`] entry.
    pub position: i32,
    /// Per two-in-a-row created (or opponent's removed) on the local board.
    pub local_threat: i32,
    /// Winning the local board.
    pub local_win: i32,
    /// Per two-in-a-row created (or opponent's removed) on the global board.
    pub global_threat: i32,
    /// Winning the game.
    pub global_win: i32,
    /// Sending the opponent to a completed board, which opens every board.
    pub open_play_penalty: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            position: 1,
            local_threat: 2,
            local_win: 10,
            global_threat: 25,
            global_win: 1000,
            open_play_penalty: 3,
        }
    }
}

/// Fixed-weight heuristic player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicAi {
    depth: u8,
    weights: Weights,
}

impl HeuristicAi {
    /// Creates a search with the given lookahead depth (at least 1) and weights.
    pub fn new(depth: u8, weights: Weights) -> Self {
        Self {
            depth: depth.max(1),
            weights,
        }
    }

    /// Plies searched, counting the candidate move itself.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Evaluation weights.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Selects the highest-scoring legal move for the player to move.
    ///
    /// Ties go to the move enumerated first.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoMoves`] if the game is over.
    #[instrument(skip(self, state), fields(depth = self.depth, turn = %state.turn()))]
    pub fn best_move(&self, state: &GameState) -> Result<Move, SearchError> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            warn!("Search requested with no legal moves");
            return Err(SearchError::NoMoves);
        }

        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            let score = self.score_move(state, mv, self.depth)?;
            trace!(%mv, score, "Scored candidate");
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((mv, score));
            }
        }

        let (mv, score) = best.ok_or(SearchError::NoMoves)?;
        debug!(%mv, score, "Selected move");
        Ok(mv)
    }

    /// Scores `mv` for its player, looking `depth - 1` replies ahead.
    pub fn score_move(&self, state: &GameState, mv: Move, depth: u8) -> Result<i32, SearchError> {
        let mut child = state.clone();
        child.play(mv.global_loc, mv.local_loc)?;
        let immediate = self.evaluate(state, &child, mv);

        if depth <= 1 || child.is_over() {
            return Ok(immediate);
        }

        let mut best_reply: Option<i32> = None;
        for reply in child.legal_moves() {
            let score = self.score_move(&child, reply, depth - 1)?;
            best_reply = Some(best_reply.map_or(score, |top| top.max(score)));
        }
        Ok(immediate.saturating_sub(best_reply.unwrap_or(0)))
    }

    /// Static value of the position `after` reached by `mv` from `before`,
    /// for the player who made `mv`.
    ///
    /// Arithmetic saturates, so extreme weights clamp instead of overflowing.
    pub fn evaluate(&self, before: &GameState, after: &GameState, mv: Move) -> i32 {
        let w = &self.weights;
        let me = mv.player;
        let them = me.opponent();

        if after.winner() == Some(me) {
            return w.global_win;
        }

        let mut score = w.position.saturating_mul(POSITION_WEIGHTS[mv.local_loc.to_index()]);

        let local_before = before.board().board(mv.global_loc);
        let local_after = after.board().board(mv.global_loc);
        if local_before.owner().is_none() && local_after.owner() == Some(me) {
            score = score.saturating_add(w.local_win);
        }

        let local_swing = (local_threats(local_after, me) - local_threats(local_before, me))
            + (local_threats(local_before, them) - local_threats(local_after, them));
        score = score.saturating_add(w.local_threat.saturating_mul(local_swing));

        let global_swing = (global_threats(after.board(), me)
            - global_threats(before.board(), me))
            + (global_threats(before.board(), them) - global_threats(after.board(), them));
        score = score.saturating_add(w.global_threat.saturating_mul(global_swing));

        if after.active() == ActiveBoards::Open {
            score = score.saturating_sub(w.open_play_penalty);
        }

        score
    }
}

impl Default for HeuristicAi {
    fn default() -> Self {
        Self::new(2, Weights::default())
    }
}

/// Two-in-a-row lines for `player` on a board still in play.
fn local_threats(board: &LocalBoard, player: Player) -> i32 {
    if board.is_over() {
        return 0;
    }
    let count = count_threats(
        player,
        |cell| board.get(cell).player(),
        |cell| board.is_empty(cell),
    );
    count as i32
}

/// Two-boards-in-a-row lines for `player` whose third board is undecided.
fn global_threats(board: &GlobalBoard, player: Player) -> i32 {
    let count = count_threats(
        player,
        |local| board.board(local).owner(),
        |local| !board.board(local).is_over(),
    );
    count as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ultimate::Location;

    /// X holds the top-left and top-center cells of the center board and is
    /// forced back into it.
    fn center_row_threat() -> GameState {
        GameState::replay(&[
            (Location::CENTER, Location::TOP_LEFT),
            (Location::TOP_LEFT, Location::CENTER),
            (Location::CENTER, Location::TOP_CENTER),
            (Location::TOP_CENTER, Location::CENTER),
        ])
        .unwrap()
    }

    #[test]
    fn test_takes_local_win() {
        let state = center_row_threat();
        let ai = HeuristicAi::new(1, Weights::default());

        let mv = ai.best_move(&state).unwrap();
        assert_eq!(mv, Move::new(Location::CENTER, Location::TOP_RIGHT, Player::X));
    }

    #[test]
    fn test_local_win_scores_above_center() {
        let state = center_row_threat();
        let ai = HeuristicAi::new(1, Weights::default());

        let win = Move::new(Location::CENTER, Location::TOP_RIGHT, Player::X);
        let center = Move::new(Location::CENTER, Location::CENTER, Player::X);
        assert_eq!(ai.score_move(&state, win, 1), Ok(10));
        assert_eq!(ai.score_move(&state, center, 1), Ok(7));
    }

    #[test]
    fn test_opening_prefers_center_cell() {
        let ai = HeuristicAi::new(1, Weights::default());
        let mv = ai.best_move(&GameState::new()).unwrap();
        assert_eq!(mv.local_loc, Location::CENTER);
        // First board enumerated wins the tie.
        assert_eq!(mv.global_loc, Location::TOP_LEFT);
    }

    #[test]
    fn test_open_play_is_penalized() {
        let mut state = center_row_threat();
        state.play(Location::CENTER, Location::TOP_RIGHT).unwrap();
        // O must play the top-right board; its center cell sends X to the
        // won center board.
        let ai = HeuristicAi::new(1, Weights::default());
        let center = Move::new(Location::TOP_RIGHT, Location::CENTER, Player::O);
        let corner = Move::new(Location::TOP_RIGHT, Location::TOP_LEFT, Player::O);
        assert_eq!(ai.score_move(&state, center, 1), Ok(3 - 3));
        assert_eq!(ai.score_move(&state, corner, 1), Ok(2));
    }

    #[test]
    fn test_search_is_deterministic() {
        let state = center_row_threat();
        let ai = HeuristicAi::default();
        let first = ai.best_move(&state).unwrap();
        for _ in 0..3 {
            assert_eq!(ai.best_move(&state).unwrap(), first);
        }
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let weights = Weights {
            position: i32::MAX,
            global_win: i32::MAX,
            open_play_penalty: i32::MIN,
            ..Weights::default()
        };
        let ai = HeuristicAi::new(2, weights);
        let state = center_row_threat();

        let mv = ai.best_move(&state).unwrap();
        assert!(state.legal_moves().contains(&mv));

        let center = Move::new(Location::CENTER, Location::CENTER, Player::X);
        assert_eq!(ai.score_move(&state, center, 1), Ok(i32::MAX));
    }

    #[test]
    fn test_depth_is_at_least_one() {
        assert_eq!(HeuristicAi::new(0, Weights::default()).depth(), 1);
    }
}
