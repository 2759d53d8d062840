use std::{path::PathBuf, time::Duration};

/// Where the terminal host keeps its store when nothing else is configured.
pub const DEFAULT_STORAGE_PATH: &str = "garden-storage.json";

/// Settings for the `garden` binary, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// `GARDEN_STORAGE_PATH`
    pub storage_path: PathBuf,
    /// `GARDEN_ALERT_DELAY_MS`: replaces the widget's alert delay when set.
    pub alert_delay: Option<Duration>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            alert_delay: None,
        }
    }
}

impl ShellConfig {
    /// Reads the process environment, after loading `.env` when one exists.
    pub fn from_env() -> Self {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                log::warn!("ignoring .env file: {err}");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("GARDEN_STORAGE_PATH").filter(|p| !p.trim().is_empty()) {
            config.storage_path = PathBuf::from(path.trim());
        }

        if let Some(raw) = lookup("GARDEN_ALERT_DELAY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.alert_delay = Some(Duration::from_millis(ms)),
                Err(err) => log::warn!("ignoring GARDEN_ALERT_DELAY_MS={raw:?}: {err}"),
            }
        }

        config
    }
}
