//! Win detection shared by local and global boards.
//!
//! Both levels ask the same question of a 3x3 grid: which player, if any,
//! holds all three slots of some line. The grid is supplied as an accessor
//! so a local board passes its cell marks and the global board passes the
//! owners of its local boards.

use super::super::invariants::InvariantViolation;
use super::super::{Location, Player};
use tracing::{instrument, warn};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[Location; 3]; 8] = [
    // Rows
    [Location::TOP_LEFT, Location::TOP_CENTER, Location::TOP_RIGHT],
    [Location::MIDDLE_LEFT, Location::CENTER, Location::MIDDLE_RIGHT],
    [Location::BOTTOM_LEFT, Location::BOTTOM_CENTER, Location::BOTTOM_RIGHT],
    // Columns
    [Location::TOP_LEFT, Location::MIDDLE_LEFT, Location::BOTTOM_LEFT],
    [Location::TOP_CENTER, Location::CENTER, Location::BOTTOM_CENTER],
    [Location::TOP_RIGHT, Location::MIDDLE_RIGHT, Location::BOTTOM_RIGHT],
    // Diagonals
    [Location::TOP_LEFT, Location::CENTER, Location::BOTTOM_RIGHT],
    [Location::TOP_RIGHT, Location::CENTER, Location::BOTTOM_LEFT],
];

/// Returns the player holding every slot of `line`, if any.
pub fn line_owner<F>(line: &[Location; 3], owner_at: &F) -> Option<Player>
where
    F: Fn(Location) -> Option<Player>,
{
    let [a, b, c] = *line;
    let player = owner_at(a)?;
    (owner_at(b) == Some(player) && owner_at(c) == Some(player)).then_some(player)
}

/// Derives the owner of a 3x3 grid from scratch.
///
/// A player completing two lines at once is a single win. Lines completed by
/// both players cannot arise from alternating placements and are reported
/// as an invariant violation.
#[instrument(skip(owner_at))]
pub fn grid_owner<F>(owner_at: F) -> Result<Option<Player>, InvariantViolation>
where
    F: Fn(Location) -> Option<Player>,
{
    let mut winner = None;

    for line in &WIN_LINES {
        let Some(player) = line_owner(line, &owner_at) else {
            continue;
        };
        match winner {
            None => winner = Some(player),
            Some(existing) if existing == player => {}
            Some(existing) => {
                warn!(?existing, ?player, "Both players hold a winning line");
                return Err(InvariantViolation::new(format!(
                    "Both {} and {} hold a winning line",
                    existing, player
                )));
            }
        }
    }

    Ok(winner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(marks: [Option<Player>; 9]) -> impl Fn(Location) -> Option<Player> {
        move |loc: Location| marks[loc.to_index()]
    }

    const X: Option<Player> = Some(Player::X);
    const O: Option<Player> = Some(Player::O);
    const E: Option<Player> = None;

    #[test]
    fn test_no_owner_empty_grid() {
        assert_eq!(grid_owner(grid([E; 9])), Ok(None));
    }

    #[test]
    fn test_top_row_owner() {
        let marks = [X, X, X, E, E, E, E, E, E];
        assert_eq!(grid_owner(grid(marks)), Ok(Some(Player::X)));
    }

    #[test]
    fn test_anti_diagonal_owner() {
        let marks = [X, X, O, E, O, E, O, E, X];
        assert_eq!(grid_owner(grid(marks)), Ok(Some(Player::O)));
    }

    #[test]
    fn test_double_line_same_player_is_one_win() {
        // Final X at the corner completes the top row and the left column.
        let marks = [X, X, X, X, O, O, X, O, O];
        assert_eq!(grid_owner(grid(marks)), Ok(Some(Player::X)));
    }

    #[test]
    fn test_lines_for_both_players_is_violation() {
        let marks = [X, X, X, O, O, O, E, E, E];
        assert!(grid_owner(grid(marks)).is_err());
    }

    #[test]
    fn test_incomplete_line_has_no_owner() {
        let marks = [X, X, E, E, O, E, E, E, E];
        assert_eq!(grid_owner(grid(marks)), Ok(None));
    }
}
