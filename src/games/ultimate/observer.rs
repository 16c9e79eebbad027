//! Change notifications for display layers.

use super::Player;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Receives turn and winner changes from a [`Game`](super::Game).
///
/// Callbacks run synchronously at the end of the transition that caused
/// them, in registration order. Within one observer the turn change is
/// delivered before the winner change.
pub trait GameObserver {
    /// The player to move changed.
    fn on_turn_changed(&mut self, turn: Player);

    /// The game status changed; `winner` is `None` for a tie or a reopened
    /// game.
    fn on_winner_changed(&mut self, winner: Option<Player>);
}

/// A recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// See [`GameObserver::on_turn_changed`].
    TurnChanged(Player),
    /// See [`GameObserver::on_winner_changed`].
    WinnerChanged(Option<Player>),
}

/// Observer that appends every notification to a shared log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Drops all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl GameObserver for EventLog {
    fn on_turn_changed(&mut self, turn: Player) {
        self.events.borrow_mut().push(GameEvent::TurnChanged(turn));
    }

    fn on_winner_changed(&mut self, winner: Option<Player>) {
        self.events.borrow_mut().push(GameEvent::WinnerChanged(winner));
    }
}
