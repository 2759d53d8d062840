use std::{fmt, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::error::CellIdError;

pub mod garden;
pub mod mines;
pub mod plant;

pub use mines::{MineField, MINE_COUNT};

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// Number of rows, and of columns, of the square garden board.
pub const GRID_SIZE: usize = 6;

/// A zero-based (row, col) position within the garden grid.
///
/// Always inside the board. Its cell id, `"row-col"`, is both the display
/// form and the serialised form, so plants and mines are stored as e.g. `"3-5"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Returns `None` when either index falls outside the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < GRID_SIZE && col < GRID_SIZE).then_some(Self { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Coordinate { row, col }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Coordinate {
    type Err = CellIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CellIdError(s.to_string());
        let (row, col) = s.split_once('-').ok_or_else(invalid)?;
        let row = row.parse::<usize>().map_err(|_| invalid())?;
        let col = col.parse::<usize>().map_err(|_| invalid())?;
        Coordinate::new(row, col).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_id_format() {
        let c = Coordinate::new(3, 5).unwrap();
        assert_eq!(c.to_string(), "3-5");
    }

    #[test]
    fn test_cell_id_parse() {
        let c: Coordinate = "0-4".parse().unwrap();
        assert_eq!((c.row(), c.col()), (0, 4));
    }

    #[test]
    fn test_cell_id_rejects_garbage() {
        for raw in ["", "3", "3-", "-3", "a-b", "1-2-3", "6-0", "0-6", "-1-0", " 1-1"] {
            assert!(
                raw.parse::<Coordinate>().is_err(),
                "'{raw}' must not parse as a cell id"
            );
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Coordinate::new(GRID_SIZE, 0).is_none());
        assert!(Coordinate::new(0, GRID_SIZE).is_none());
        assert!(Coordinate::new(GRID_SIZE - 1, GRID_SIZE - 1).is_some());
    }

    #[test]
    fn test_all_covers_board_once() {
        let cells: Vec<Coordinate> = Coordinate::all().collect();
        assert_eq!(cells.len(), GRID_SIZE * GRID_SIZE);
        let unique: std::collections::HashSet<_> = cells.iter().collect();
        assert_eq!(unique.len(), cells.len());
        assert_eq!(cells[0].to_string(), "0-0");
        assert_eq!(cells[7].to_string(), "1-1");
    }

    #[test]
    fn test_serialises_as_cell_id_string() {
        let c = Coordinate::new(2, 1).unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"2-1\"");
        let back: Coordinate = serde_json::from_str("\"2-1\"").unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Coordinate>("\"9-9\"").is_err());
    }
}
