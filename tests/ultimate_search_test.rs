//! Integration tests for the heuristic AI.

use strictly_ultimate::{Game, GameState, HeuristicAi, SearchError, Weights};

fn play_out(ai: &HeuristicAi) -> Game {
    let mut game = Game::new();
    while !game.state().is_over() {
        game.play_best(ai).unwrap();
    }
    game
}

#[test]
fn test_self_play_reaches_an_outcome() {
    let ai = HeuristicAi::new(1, Weights::default());
    let game = play_out(&ai);

    assert!(game.state().status().is_over());
    assert!(game.state().board().is_over());
    assert!(game.state().legal_moves().is_empty());
    assert_eq!(game.best_move(&ai), Err(SearchError::NoMoves));
}

#[test]
fn test_self_play_is_deterministic() {
    let ai = HeuristicAi::new(1, Weights::default());
    let first = play_out(&ai);
    let second = play_out(&ai);
    assert_eq!(first.state(), second.state());
}

#[test]
fn test_undoing_a_finished_game_restores_the_start() {
    let ai = HeuristicAi::new(1, Weights::default());
    let mut game = play_out(&ai);
    let moves = game.state().history().len();

    while game.state().can_undo() {
        game.undo().unwrap();
    }
    assert_eq!(game.state().board(), GameState::new().board());
    assert_eq!(game.state().redo_tail().len(), moves);
    assert!(!game.state().is_over());
}

#[test]
fn test_best_move_is_legal() {
    let ai = HeuristicAi::default();
    let mut state = GameState::new();
    for _ in 0..6 {
        let mv = ai.best_move(&state).unwrap();
        assert!(state.legal_moves().contains(&mv));
        state.play(mv.global_loc, mv.local_loc).unwrap();
    }
}
