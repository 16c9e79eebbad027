//! Game controller: a [`GameState`] plus its observers.

use super::action::{HistoryError, Move, MoveError, SearchError};
use super::observer::GameObserver;
use super::phases::GameStatus;
use super::search::HeuristicAi;
use super::snapshot::GameSnapshot;
use super::{GameState, Location, Player};
use tracing::{debug, instrument};

/// Ultimate tic-tac-toe game engine.
///
/// Wraps a [`GameState`] and notifies registered observers whenever a
/// transition changes the player to move or the game status.
pub struct Game {
    state: GameState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Creates a new game with no observers.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            observers: Vec::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers an observer. Observers are notified in registration order.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Read-only view for rendering.
    pub fn current_state(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// See [`GameState::play`].
    #[instrument(skip(self))]
    pub fn play(&mut self, global_loc: Location, local_loc: Location) -> Result<Move, MoveError> {
        let before = self.watch();
        let mv = self.state.play(global_loc, local_loc)?;
        self.notify(before);
        Ok(mv)
    }

    /// See [`GameState::play_forced`].
    #[instrument(skip(self))]
    pub fn play_forced(&mut self, local_loc: Location) -> Result<Move, MoveError> {
        let before = self.watch();
        let mv = self.state.play_forced(local_loc)?;
        self.notify(before);
        Ok(mv)
    }

    /// See [`GameState::undo`].
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Move, HistoryError> {
        let before = self.watch();
        let mv = self.state.undo()?;
        self.notify(before);
        Ok(mv)
    }

    /// See [`GameState::redo`].
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Result<Move, HistoryError> {
        let before = self.watch();
        let mv = self.state.redo()?;
        self.notify(before);
        Ok(mv)
    }

    /// See [`GameState::reset`].
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let before = self.watch();
        self.state.reset();
        self.notify(before);
    }

    /// Asks `ai` for a move in the current position without playing it.
    #[instrument(skip(self, ai))]
    pub fn best_move(&self, ai: &HeuristicAi) -> Result<Move, SearchError> {
        ai.best_move(&self.state)
    }

    /// Asks `ai` for a move and plays it.
    #[instrument(skip(self, ai))]
    pub fn play_best(&mut self, ai: &HeuristicAi) -> Result<Move, SearchError> {
        let mv = ai.best_move(&self.state)?;
        Ok(self.play(mv.global_loc, mv.local_loc)?)
    }

    fn watch(&self) -> (Player, GameStatus) {
        (self.state.turn(), self.state.status())
    }

    fn notify(&mut self, (turn_before, status_before): (Player, GameStatus)) {
        let turn = self.state.turn();
        let status = self.state.status();
        let turn_changed = turn != turn_before;
        let status_changed = status != status_before;

        if !turn_changed && !status_changed {
            return;
        }
        debug!(
            turn_changed,
            status_changed,
            observers = self.observers.len(),
            "Notifying observers"
        );

        for observer in &mut self.observers {
            if turn_changed {
                observer.on_turn_changed(turn);
            }
            if status_changed {
                observer.on_winner_changed(status.winner());
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ultimate::{EventLog, GameEvent};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_play_notifies_turn_change() {
        let log = EventLog::new();
        let mut game = Game::new();
        game.subscribe(Box::new(log.clone()));

        game.play(Location::CENTER, Location::CENTER).unwrap();
        assert_eq!(log.events(), vec![GameEvent::TurnChanged(Player::O)]);
    }

    #[test]
    fn test_rejected_move_is_silent() {
        let log = EventLog::new();
        let mut game = Game::new();
        game.subscribe(Box::new(log.clone()));

        game.play(Location::CENTER, Location::TOP_LEFT).unwrap();
        log.clear();

        assert!(game.play(Location::CENTER, Location::CENTER).is_err());
        assert!(game.undo().is_ok());
        assert_eq!(log.events(), vec![GameEvent::TurnChanged(Player::X)]);
    }

    struct Tagged {
        tag: &'static str,
        seen: Rc<RefCell<Vec<&'static str>>>,
    }

    impl GameObserver for Tagged {
        fn on_turn_changed(&mut self, _turn: Player) {
            self.seen.borrow_mut().push(self.tag);
        }

        fn on_winner_changed(&mut self, _winner: Option<Player>) {}
    }

    #[test]
    fn test_observers_called_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut game = Game::new();
        for tag in ["first", "second", "third"] {
            game.subscribe(Box::new(Tagged {
                tag,
                seen: Rc::clone(&seen),
            }));
        }

        game.play(Location::TOP_LEFT, Location::TOP_LEFT).unwrap();
        assert_eq!(*seen.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_reset_on_new_game_is_silent() {
        let log = EventLog::new();
        let mut game = Game::new();
        game.subscribe(Box::new(log.clone()));
        game.reset();
        assert!(log.events().is_empty());
    }
}
