//! Browser bindings for the widget: `window.localStorage` and the page's
//! `alert`/`confirm` dialogs.

use std::time::Duration;

use gloo_timers::callback::Timeout;

use crate::{error::StorageError, notify::Notifier, storage::Storage};

/// The origin's `window.localStorage`.
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| StorageError::Unavailable("window.localStorage".into()))?;
        Ok(Self { inner })
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(format!("getItem({key}): {err:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|err| StorageError::Unavailable(format!("setItem({key}): {err:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner
            .remove_item(key)
            .map_err(|err| StorageError::Unavailable(format!("removeItem({key}): {err:?}")))
    }
}

/// Modal `alert` after a `setTimeout`, and `confirm` for yes/no questions.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn schedule_alert(&self, message: &str, delay: Duration) {
        let message = message.to_string();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            let Some(window) = web_sys::window() else {
                log::warn!("no window to show {message:?} in");
                return;
            };
            if let Err(err) = window.alert_with_message(&message) {
                log::warn!("alert failed: {err:?}");
            }
        })
        .forget();
    }

    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to ask {message:?} in");
            return false;
        };
        window.confirm_with_message(message).unwrap_or_else(|err| {
            log::warn!("confirm failed: {err:?}");
            false
        })
    }
}
