//! Integration tests for game observers.

use strictly_ultimate::{EventLog, Game, GameEvent, HeuristicAi, Location, Player, Weights};

#[test]
fn test_turn_changes_follow_moves() {
    let log = EventLog::new();
    let mut game = Game::new();
    game.subscribe(Box::new(log.clone()));

    game.play(Location::CENTER, Location::TOP_LEFT).unwrap();
    game.play(Location::TOP_LEFT, Location::CENTER).unwrap();
    game.undo().unwrap();

    assert_eq!(
        log.events(),
        vec![
            GameEvent::TurnChanged(Player::O),
            GameEvent::TurnChanged(Player::X),
            GameEvent::TurnChanged(Player::O),
        ]
    );
}

#[test]
fn test_winner_reported_once_at_game_end() {
    let log = EventLog::new();
    let mut game = Game::new();
    game.subscribe(Box::new(log.clone()));

    let ai = HeuristicAi::new(1, Weights::default());
    while !game.state().is_over() {
        game.play_best(&ai).unwrap();
    }

    let events = log.events();
    let winner_events: Vec<_> = events
        .iter()
        .filter(|event| matches!(event, GameEvent::WinnerChanged(_)))
        .collect();
    assert_eq!(winner_events.len(), 1);
    assert_eq!(
        events.last(),
        Some(&GameEvent::WinnerChanged(game.state().winner()))
    );
    // Turn change is delivered before the winner change.
    assert!(matches!(
        events[events.len() - 2],
        GameEvent::TurnChanged(_)
    ));
}

#[test]
fn test_undo_of_final_move_reopens_game() {
    let ai = HeuristicAi::new(1, Weights::default());
    let mut game = Game::new();
    while !game.state().is_over() {
        game.play_best(&ai).unwrap();
    }

    let log = EventLog::new();
    game.subscribe(Box::new(log.clone()));
    let mv = game.undo().unwrap();

    assert!(!game.state().is_over());
    assert_eq!(
        log.events(),
        vec![
            GameEvent::TurnChanged(mv.player),
            GameEvent::WinnerChanged(None),
        ]
    );
}
