//! Plain-text rendering of the board.

use strictly_ultimate::{GameObserver, GameSnapshot, Location, Player, Square};
use tracing::debug;

/// Draws the 9x9 grid.
///
/// Empty cells on playable boards show as `.`, on other boards as `-`.
/// Won boards are listed under the grid.
pub fn board(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    for board_row in 0..3u8 {
        if board_row > 0 {
            out.push_str(" -------+-------+-------\n");
        }
        for cell_row in 0..3u8 {
            out.push(' ');
            for board_col in 0..3u8 {
                if board_col > 0 {
                    out.push_str(" |");
                }
                for cell_col in 0..3u8 {
                    let (Some(board), Some(cell)) = (
                        Location::new(board_row, board_col),
                        Location::new(cell_row, cell_col),
                    ) else {
                        continue;
                    };
                    out.push(' ');
                    out.push(glyph(snapshot, board, cell));
                }
            }
            out.push('\n');
        }
    }

    let won: Vec<String> = Location::ALL
        .into_iter()
        .filter_map(|board| {
            snapshot.board_owners[board.to_index()]
                .map(|owner| format!("{} ({})", board.label(), owner))
        })
        .collect();
    if !won.is_empty() {
        out.push_str(&format!("Won boards: {}\n", won.join(", ")));
    }
    out
}

fn glyph(snapshot: &GameSnapshot, board: Location, cell: Location) -> char {
    match snapshot.square(board, cell) {
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
        Square::Empty if snapshot.active_boards.contains(&board) => '.',
        Square::Empty => '-',
    }
}

/// Observer that announces a decided game on stdout.
#[derive(Debug, Default)]
pub struct Announcer;

impl GameObserver for Announcer {
    fn on_turn_changed(&mut self, turn: Player) {
        debug!(%turn, "Turn changed");
    }

    fn on_winner_changed(&mut self, winner: Option<Player>) {
        if let Some(player) = winner {
            println!("*** {} takes the game ***", player);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_ultimate::GameState;

    #[test]
    fn test_board_marks_playable_cells() {
        let mut state = GameState::new();
        state.play(Location::CENTER, Location::TOP_LEFT).unwrap();
        let text = board(&state.snapshot());

        let lines: Vec<&str> = text.lines().collect();
        // Top row of the top-left board is playable, the rest is not.
        assert_eq!(lines[0], "  . . . | - - - | - - -");
        assert_eq!(lines[4], "  - - - | X - - | - - -");
        assert_eq!(lines[3], " -------+-------+-------");
    }

    #[test]
    fn test_board_lists_won_boards() {
        let state = GameState::replay(&[
            (Location::CENTER, Location::TOP_LEFT),
            (Location::TOP_LEFT, Location::CENTER),
            (Location::CENTER, Location::TOP_CENTER),
            (Location::TOP_CENTER, Location::CENTER),
            (Location::CENTER, Location::TOP_RIGHT),
        ])
        .unwrap();
        assert!(board(&state.snapshot()).contains("Won boards: Center (X)"));
    }
}
