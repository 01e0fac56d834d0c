use std::sync::Arc;

use clip_core::ports::KeyValueStoragePort;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// JSON-encoding facade over a [`KeyValueStoragePort`].
///
/// None of its operations fail. Storage and (de)serialization errors are
/// logged and the caller gets the default (on read) or nothing happens (on
/// write/remove). Whether a medium exists at all is decided once, at
/// construction.
#[derive(Clone)]
pub struct PreferenceStore {
    medium: Option<Arc<dyn KeyValueStoragePort>>,
}

impl PreferenceStore {
    pub fn new(medium: Arc<dyn KeyValueStoragePort>) -> Self {
        Self {
            medium: Some(medium),
        }
    }

    /// Store for hosts without a persistence medium. Reads yield defaults,
    /// writes are dropped.
    pub fn unavailable() -> Self {
        Self { medium: None }
    }

    pub fn is_available(&self) -> bool {
        self.medium.is_some()
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(medium) = &self.medium else {
            return default;
        };

        let raw = match medium.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(err) => {
                warn!(key, error = %err, "preference read failed, using default");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "stored preference is corrupt, using default");
                default
            }
        }
    }

    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        let Some(medium) = &self.medium else {
            debug!(key, "no preference medium, write skipped");
            return;
        };

        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key, error = %err, "preference serialization failed");
                return;
            }
        };

        if let Err(err) = medium.set(key, &raw) {
            warn!(key, error = %err, "preference write failed");
        }
    }

    pub fn remove(&self, key: &str) {
        let Some(medium) = &self.medium else {
            return;
        };
        if let Err(err) = medium.remove(key) {
            warn!(key, error = %err, "preference remove failed");
        }
    }
}
