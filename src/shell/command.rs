use std::str::FromStr;

use crate::models::plant::PlantKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Plant { row: usize, col: usize },
    Select(PlantKind),
    Kinds,
    Show,
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("type a command, or `help` to list them")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    UnknownPlant(#[from] crate::error::UnknownPlantKind),
}

pub const HELP: &str = "\
commands:
  plant <row> <col>   plant the selected kind on a plot (rows and columns start at 0)
  select <plant>      choose what to plant next
  kinds               list the plants you can choose from
  show                draw the garden
  clear               wipe the garden (asks first)
  help                this text
  quit                leave";

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(ParseCommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("plant" | "p", [row, col]) => {
                let usage = || ParseCommandError::Usage("plant <row> <col>");
                Command::Plant {
                    row: row.parse().map_err(|_| usage())?,
                    col: col.parse().map_err(|_| usage())?,
                }
            }
            ("plant" | "p", _) => return Err(ParseCommandError::Usage("plant <row> <col>")),
            ("select" | "s", [name]) => Command::Select(name.parse()?),
            ("select" | "s", _) => return Err(ParseCommandError::Usage("select <plant>")),
            ("kinds", []) => Command::Kinds,
            ("show", []) => Command::Show,
            ("clear", []) => Command::Clear,
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit" | "q", []) => Command::Quit,
            _ => return Err(ParseCommandError::Unknown(s.trim().to_string())),
        };
        Ok(command)
    }
}
