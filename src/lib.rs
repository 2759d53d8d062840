//! A 6x6 "virtual garden": visitors plant emoji on a board kept in a local
//! key-value store, while a few hidden mines answer with an alert instead.

pub mod config;
pub mod data;
pub mod error;
pub mod logic;
pub mod models;
pub mod notify;
pub mod shell;
pub mod storage;
#[cfg(feature = "web")]
pub mod web;

pub use logic::widget::{GardenWidget, PlantOutcome};
pub use models::{plant::PlantKind, Coordinate};
