//! Two-in-a-row threat counting.

use super::super::{Location, Player};
use super::win::WIN_LINES;

/// Counts lines where `player` holds two slots and the third is still open.
///
/// `owner_at` reports who holds a slot; `is_open` reports whether an
/// unheld slot can still be taken (an empty cell, or an undecided board).
pub fn count_threats<F, G>(player: Player, owner_at: F, is_open: G) -> usize
where
    F: Fn(Location) -> Option<Player>,
    G: Fn(Location) -> bool,
{
    WIN_LINES
        .iter()
        .filter(|line| {
            let held = line.iter().filter(|&&loc| owner_at(loc) == Some(player)).count();
            let open = line
                .iter()
                .filter(|&&loc| owner_at(loc).is_none() && is_open(loc))
                .count();
            held == 2 && open == 1
        })
        .count()
}
