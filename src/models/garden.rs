use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::{plant::Plant, Coordinate, Matrix, MineField, GRID_SIZE};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub plant: Option<Plant>,
    /// Only set when the grid was built with mines revealed.
    pub mined: bool,
}

/// Read-only snapshot of the board, one [`Cell`] per coordinate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenGrid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Matrix<Cell>,
}

impl GardenGrid {
    pub fn new() -> Self {
        let cells = (0..GRID_SIZE)
            .map(|_| (0..GRID_SIZE).map(|_| Cell::default()).collect())
            .collect();
        Self {
            rows: GRID_SIZE,
            cols: GRID_SIZE,
            cells,
        }
    }

    /// Lays `plants` out on a fresh grid, marking `mines` when given.
    pub fn from_plants(plants: &[Plant], mines: Option<&MineField>) -> Self {
        let mut grid = Self::new();
        for plant in plants {
            grid.cells[plant.id.row()][plant.id.col()].plant = Some(plant.clone());
        }
        if let Some(mines) = mines {
            for mine in mines.cells() {
                grid.cells[mine.row()][mine.col()].mined = true;
            }
        }
        grid
    }

    pub fn cell(&self, at: Coordinate) -> &Cell {
        &self.cells[at.row()][at.col()]
    }

    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|r| r.iter())
            .filter(|c| c.plant.is_some())
            .count()
    }
}

impl Default for GardenGrid {
    fn default() -> Self {
        Self::new()
    }
}
