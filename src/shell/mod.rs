//! Terminal stand-in for the page that hosts the garden.

use crate::{
    logic::widget::{GardenWidget, PlantOutcome},
    models::GRID_SIZE,
    notify::Notifier,
    storage::Storage,
};

pub mod command;
pub mod render;

pub use command::{Command, ParseCommandError, HELP};
pub use render::render;

/// Whether the host keeps reading input after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Keep going; print the text when not empty.
    Continue(String),
    Quit,
}

/// Runs one command against the widget and returns what to print.
pub fn execute<S: Storage, N: Notifier>(widget: &mut GardenWidget<S, N>, command: Command) -> Flow {
    let text = match command {
        Command::Plant { row, col } => match widget.plant_seed(row, col) {
            PlantOutcome::Planted(plant) => format!(
                "Planted {} {} at {}.\n{}",
                plant.emoji,
                plant.kind,
                plant.id,
                render(widget)
            ),
            PlantOutcome::Occupied => format!("Plot {row}-{col} is already taken."),
            // the notifier shows the alert on its own schedule
            PlantOutcome::Mined => String::new(),
            PlantOutcome::OutOfBounds => format!(
                "There is no plot {row}-{col}; rows and columns run from 0 to {}.",
                GRID_SIZE - 1
            ),
        },
        Command::Select(kind) => {
            widget.select_plant_kind(kind);
            render(widget)
        }
        Command::Kinds => render::selector(widget.selected_kind()),
        Command::Show => render(widget),
        Command::Clear => {
            if widget.clear_garden() {
                format!("Garden cleared.\n{}", render(widget))
            } else {
                "Garden left as it was.".to_string()
            }
        }
        Command::Help => HELP.to_string(),
        Command::Quit => return Flow::Quit,
    };
    Flow::Continue(text)
}
