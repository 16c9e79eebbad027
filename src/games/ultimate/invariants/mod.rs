//! First-class invariants for ultimate tic-tac-toe.
//!
//! Invariants are logical properties of a [`GameState`](super::GameState)
//! that must hold after every transition. They are checked in debug builds
//! and can be tested independently.

use derive_more::Display;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Invariant violation: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Implements [`InvariantSet`] for a tuple of invariants, checked in
/// tuple order.
macro_rules! invariant_tuple {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [
                    $((<$inv as Invariant<S>>::holds(state), <$inv as Invariant<S>>::description()),)+
                ]
                .into_iter()
                .filter(|(holds, _)| !holds)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

invariant_tuple!(I1, I2);
invariant_tuple!(I1, I2, I3);

pub mod active_boards;
pub mod alternating_turn;
pub mod history_consistent;

pub use active_boards::ActiveBoardsInvariant;
pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;

/// All ultimate tic-tac-toe invariants as a composable set.
pub type UltimateInvariants = (
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
    ActiveBoardsInvariant,
);
