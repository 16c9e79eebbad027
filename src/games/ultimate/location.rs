//! Row/column locations on a 3x3 grid.
//!
//! The same type addresses cells within a local board and local boards
//! within the global grid.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A (row, col) pair on a 3x3 grid, both in `0..3`.
///
/// Deserialization goes through [`Location::new`], so out-of-range
/// coordinates are rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    row: u8,
    col: u8,
}

impl Location {
    /// Top-left (index 0)
    pub const TOP_LEFT: Location = Location::at(0, 0);
    /// Top-center (index 1)
    pub const TOP_CENTER: Location = Location::at(0, 1);
    /// Top-right (index 2)
    pub const TOP_RIGHT: Location = Location::at(0, 2);
    /// Middle-left (index 3)
    pub const MIDDLE_LEFT: Location = Location::at(1, 0);
    /// Center (index 4)
    pub const CENTER: Location = Location::at(1, 1);
    /// Middle-right (index 5)
    pub const MIDDLE_RIGHT: Location = Location::at(1, 2);
    /// Bottom-left (index 6)
    pub const BOTTOM_LEFT: Location = Location::at(2, 0);
    /// Bottom-center (index 7)
    pub const BOTTOM_CENTER: Location = Location::at(2, 1);
    /// Bottom-right (index 8)
    pub const BOTTOM_RIGHT: Location = Location::at(2, 2);

    /// All 9 locations in row-major order.
    pub const ALL: [Location; 9] = [
        Location::TOP_LEFT,
        Location::TOP_CENTER,
        Location::TOP_RIGHT,
        Location::MIDDLE_LEFT,
        Location::CENTER,
        Location::MIDDLE_RIGHT,
        Location::BOTTOM_LEFT,
        Location::BOTTOM_CENTER,
        Location::BOTTOM_RIGHT,
    ];

    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a location, or `None` if either coordinate is outside `0..3`.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Row (0-2).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column (0-2).
    pub fn col(self) -> u8 {
        self.col
    }

    /// Converts to a row-major index (0-8).
    pub fn to_index(self) -> usize {
        usize::from(self.row) * 3 + usize::from(self.col)
    }

    /// Creates a location from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name of this location.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }

    /// Parses a 1-based number (1-9) or a label such as "top-left" or "center".
    ///
    /// Labels match case-insensitively, with or without the hyphen.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Location> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|loc| normalize(loc.label()) == wanted)
    }
}

/// Unchecked wire form of a [`Location`].
#[derive(Deserialize)]
struct RawLocation {
    row: u8,
    col: u8,
}

impl TryFrom<RawLocation> for Location {
    type Error = String;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Location::new(raw.row, raw.col).ok_or_else(|| {
            format!(
                "Location ({}, {}) is outside the 3x3 grid",
                raw.row, raw.col
            )
        })
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
