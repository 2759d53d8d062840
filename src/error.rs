use crate::models::{Coordinate, GRID_SIZE, MINE_COUNT};

/// Failures raised by a key-value store backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not a JSON object of strings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
}

/// A cell id that is not `"row-col"` inside the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid cell id '{0}': expected \"row-col\" with both below {size}", size = GRID_SIZE)]
pub struct CellIdError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MineFieldError {
    #[error("expected {expected} mines, found {0}", expected = MINE_COUNT)]
    WrongCount(usize),
    #[error("mine {0} is listed more than once")]
    Duplicate(Coordinate),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plant '{0}'")]
pub struct UnknownPlantKind(pub String);
