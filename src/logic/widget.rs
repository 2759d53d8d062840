use std::{collections::HashSet, time::Duration};

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, SeedableRng};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    logic::minefield,
    models::{
        garden::GardenGrid,
        plant::{Plant, PlantKind},
        Coordinate, MineField,
    },
    notify::Notifier,
    storage::{Storage, MINES_KEY, PLANTS_KEY, VISITORS_KEY},
};

/// Shown when a visitor plants on a mine.
pub const MINE_ALERT: &str = "💥 BOOM! Bye!";
/// Pause before the mine alert appears.
pub const ALERT_DELAY: Duration = Duration::from_millis(100);
/// Question asked before the garden is wiped.
pub const CLEAR_PROMPT: &str = "Are you sure you want to clear the garden?";

/// Source of planting timestamps.
pub type Clock = fn() -> DateTime<Utc>;

/// What a click on a plot did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlantOutcome {
    Planted(Plant),
    /// The plot already holds a plant; nothing changed.
    Occupied,
    /// The plot is mined; an alert was scheduled and nothing changed.
    Mined,
    /// No such plot on the board.
    OutOfBounds,
}

/// The interactive 6x6 garden.
///
/// Owns the plants, the hidden mines and the visitor count of one store.
/// Every operation runs synchronously to completion; the only deferred work
/// is the mine alert, which is handed to the [`Notifier`] and never awaited.
/// Storage failures are logged and never surface to the caller: in-memory
/// state stays authoritative for the rest of the session.
pub struct GardenWidget<S, N> {
    storage: S,
    notifier: N,
    rng: StdRng,
    clock: Clock,
    plants: Vec<Plant>,
    mines: MineField,
    visitors: u64,
    selected: PlantKind,
}

impl<S: Storage, N: Notifier> GardenWidget<S, N> {
    /// Mounts the widget on `storage`, counting this as a new visit.
    pub fn mount(storage: S, notifier: N) -> Self {
        Self::mount_with(storage, notifier, StdRng::from_os_rng(), Utc::now)
    }

    /// Like [`GardenWidget::mount`] with an explicit random source and clock.
    pub fn mount_with(mut storage: S, notifier: N, mut rng: StdRng, clock: Clock) -> Self {
        let plants = load_plants(&storage);

        let mines = match load_json::<MineField>(&storage, MINES_KEY) {
            Some(mines) => mines,
            None => {
                let mines = minefield::generate(&mut rng);
                save_json(&mut storage, MINES_KEY, &mines);
                mines
            }
        };

        let visitors = load_visitors(&storage).saturating_add(1);
        save(&mut storage, VISITORS_KEY, &visitors.to_string());

        log::info!(
            "garden mounted: {} plant(s), visitor #{visitors}",
            plants.len()
        );

        Self {
            storage,
            notifier,
            rng,
            clock,
            plants,
            mines,
            visitors,
            selected: PlantKind::default(),
        }
    }

    pub fn select_plant_kind(&mut self, kind: PlantKind) {
        log::debug!("selected {kind}");
        self.selected = kind;
    }

    /// Plants the selected kind at (`row`, `col`).
    ///
    /// Occupied plots are left alone, so the first plant on a plot wins.
    /// Mined plots schedule [`MINE_ALERT`] and leave garden and storage as
    /// they were.
    pub fn plant_seed(&mut self, row: usize, col: usize) -> PlantOutcome {
        let Some(cell) = Coordinate::new(row, col) else {
            log::debug!("ignoring click outside the board at ({row}, {col})");
            return PlantOutcome::OutOfBounds;
        };

        if self.plant_in(cell).is_some() {
            log::debug!("plot {cell} is already taken");
            return PlantOutcome::Occupied;
        }

        if self.mines.contains(&cell) {
            log::debug!("plot {cell} is mined");
            self.notifier.schedule_alert(MINE_ALERT, ALERT_DELAY);
            return PlantOutcome::Mined;
        }

        let plant = Plant::new(cell, self.selected, (self.clock)());
        log::debug!("planted {} at {cell}", plant.kind);
        self.plants.push(plant.clone());
        save_json(&mut self.storage, PLANTS_KEY, &self.plants);
        PlantOutcome::Planted(plant)
    }

    /// Wipes the garden and re-rolls the mines once the visitor confirms.
    /// Returns whether anything was cleared. The visitor count is kept.
    pub fn clear_garden(&mut self) -> bool {
        if !self.notifier.confirm(CLEAR_PROMPT) {
            log::debug!("clear cancelled");
            return false;
        }

        self.plants.clear();
        if let Err(err) = self.storage.remove(PLANTS_KEY) {
            log::warn!("could not remove `{PLANTS_KEY}`: {err}");
        }

        self.mines = minefield::generate(&mut self.rng);
        save_json(&mut self.storage, MINES_KEY, &self.mines);

        log::info!("garden cleared, new minefield laid");
        true
    }

    pub fn plant_at(&self, row: usize, col: usize) -> Option<&Plant> {
        Coordinate::new(row, col).and_then(|cell| self.plant_in(cell))
    }

    fn plant_in(&self, cell: Coordinate) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == cell)
    }

    /// Plants in the order they were planted.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn plant_count(&self) -> usize {
        self.plants.len()
    }

    pub fn visitors(&self) -> u64 {
        self.visitors
    }

    pub fn selected_kind(&self) -> PlantKind {
        self.selected
    }

    pub fn mine_field(&self) -> &MineField {
        &self.mines
    }

    /// Board snapshot with the mines kept hidden.
    pub fn grid(&self) -> GardenGrid {
        GardenGrid::from_plants(&self.plants, None)
    }

    /// Board snapshot with the mines marked.
    pub fn revealed_grid(&self) -> GardenGrid {
        GardenGrid::from_plants(&self.plants, Some(&self.mines))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

fn load_json<T: DeserializeOwned>(storage: &impl Storage, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(raw) => raw?,
        Err(err) => {
            log::warn!("could not read `{key}`: {err}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding malformed `{key}`: {err}");
            None
        }
    }
}

/// Decodes stored plants one entry at a time, so a single bad entry does not
/// take the rest of the garden with it on the next save.
fn load_plants(storage: &impl Storage) -> Vec<Plant> {
    let entries: Vec<serde_json::Value> = load_json(storage, PLANTS_KEY).unwrap_or_default();
    let mut seen = HashSet::with_capacity(entries.len());
    let mut plants = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<Plant>(entry) {
            Ok(plant) if seen.insert(plant.id) => plants.push(plant),
            Ok(plant) => {
                log::warn!("dropped a second plant stored on plot {}", plant.id);
            }
            Err(err) => log::warn!("dropped malformed plant in `{PLANTS_KEY}`: {err}"),
        }
    }
    plants
}

fn load_visitors(storage: &impl Storage) -> u64 {
    match storage.get(VISITORS_KEY) {
        Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|err| {
            log::warn!("discarding malformed `{VISITORS_KEY}` {raw:?}: {err}");
            0
        }),
        Ok(None) => 0,
        Err(err) => {
            log::warn!("could not read `{VISITORS_KEY}`: {err}");
            0
        }
    }
}

fn save_json<T: Serialize + ?Sized>(storage: &mut impl Storage, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => save(storage, key, &raw),
        Err(err) => log::warn!("could not encode `{key}`: {err}"),
    }
}

fn save(storage: &mut impl Storage, key: &str, raw: &str) {
    if let Err(err) = storage.set(key, raw) {
        log::warn!("could not persist `{key}`: {err}");
    }
}
