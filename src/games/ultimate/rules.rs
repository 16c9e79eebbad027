//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions over 3x3 grids. Each takes an accessor closure so the same
//! rule applies to the cells of a local board and to the local boards of the
//! global grid.

pub mod full;
pub mod threats;
pub mod win;

pub use full::is_full;
pub use threats::count_threats;
pub use win::{WIN_LINES, grid_owner, line_owner};
