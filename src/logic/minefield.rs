use rand::{seq::SliceRandom, Rng};

use crate::models::{Coordinate, MineField, GRID_SIZE, MINE_COUNT};

/// Upper bound on random draws before falling back to a shuffle.
pub const MAX_DRAWS: usize = 1_000;

/// Picks [`MINE_COUNT`] distinct cells uniformly at random.
///
/// Draws (row, col) pairs and discards repeats. Should the draw budget run
/// out, the missing mines are taken from a shuffle of the remaining cells,
/// so generation always terminates.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> MineField {
    generate_with_budget(rng, MAX_DRAWS)
}

pub(crate) fn generate_with_budget<R: Rng + ?Sized>(rng: &mut R, max_draws: usize) -> MineField {
    let mut mines: Vec<Coordinate> = Vec::with_capacity(MINE_COUNT);
    let mut draws = 0;
    while mines.len() < MINE_COUNT && draws < max_draws {
        draws += 1;
        let row = rng.random_range(0..GRID_SIZE);
        let col = rng.random_range(0..GRID_SIZE);
        let Some(cell) = Coordinate::new(row, col) else {
            continue;
        };
        if !mines.contains(&cell) {
            mines.push(cell);
        }
    }

    if mines.len() < MINE_COUNT {
        log::debug!("mine draw budget spent after {draws} draws, filling the rest by shuffle");
        let missing = MINE_COUNT - mines.len();
        let mut free: Vec<Coordinate> = Coordinate::all().filter(|c| !mines.contains(c)).collect();
        free.shuffle(rng);
        mines.extend(free.into_iter().take(missing));
    }

    MineField::from_generated(mines)
}
