use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{error::MineFieldError, models::Coordinate};

/// Number of hidden mines on the board.
pub const MINE_COUNT: usize = 6;

/// Exactly [`MINE_COUNT`] distinct mined cells.
///
/// Serialised as a JSON array of cell ids. Deserialising anything else
/// (wrong length, repeated or malformed ids) fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct MineField(Vec<Coordinate>);

impl MineField {
    /// For cells already known to be distinct and [`MINE_COUNT`] long.
    pub(crate) fn from_generated(cells: Vec<Coordinate>) -> Self {
        debug_assert_eq!(cells.len(), MINE_COUNT);
        Self(cells)
    }

    pub fn contains(&self, cell: &Coordinate) -> bool {
        self.0.contains(cell)
    }

    /// Mined cells in generation order.
    pub fn cells(&self) -> &[Coordinate] {
        &self.0
    }
}

impl TryFrom<Vec<Coordinate>> for MineField {
    type Error = MineFieldError;

    fn try_from(cells: Vec<Coordinate>) -> Result<Self, Self::Error> {
        if cells.len() != MINE_COUNT {
            return Err(MineFieldError::WrongCount(cells.len()));
        }
        let mut seen = HashSet::with_capacity(MINE_COUNT);
        if let Some(dup) = cells.iter().find(|c| !seen.insert(**c)) {
            return Err(MineFieldError::Duplicate(*dup));
        }
        Ok(Self(cells))
    }
}

impl From<MineField> for Vec<Coordinate> {
    fn from(field: MineField) -> Self {
        field.0
    }
}
