//! Fullness checks for 3x3 grids.

use super::super::Location;

/// Checks whether every slot of a grid is taken.
///
/// A full grid with no owner is a tie.
pub fn is_full<F>(is_taken: F) -> bool
where
    F: Fn(Location) -> bool,
{
    Location::ALL.iter().all(|&loc| is_taken(loc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_not_full() {
        assert!(!is_full(|_| false));
    }

    #[test]
    fn test_partial_grid_not_full() {
        assert!(!is_full(|loc| loc != Location::CENTER));
    }

    #[test]
    fn test_full_grid() {
        assert!(is_full(|_| true));
    }
}
