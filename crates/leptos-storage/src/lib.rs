//! Leptos Storage Utilities
//!
//! Typed key/value persistence for Leptos apps. Values are stored as JSON
//! text under a string key. Reads fall back to a caller-supplied default
//! when the key is missing or the stored text no longer parses.

mod error;
mod local;
mod memory;
mod signal;

use leptos::logging::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use error::StorageError;
pub use local::LocalStorage;
pub use memory::MemoryStore;
pub use signal::{persisted_signal, persisted_signal_in};

/// Raw string key/value backend
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Whether writes can succeed at all
    fn is_available(&self) -> bool {
        true
    }
}

/// Read and deserialize `key`. `Ok(None)` means nothing is stored.
pub fn try_read<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Deserialize(e.to_string()))
}

/// Serialize `value` and store it under `key`, replacing any previous value.
pub fn try_write<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    store.set_item(key, &raw)
}

/// Read `key`, returning `default` when it is absent or unreadable.
pub fn read<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match try_read(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            warn!("[STORAGE] Falling back to default for '{}': {}", key, e);
            default
        }
    }
}

/// Write `value` under `key`. Failures are logged and otherwise ignored.
pub fn write<T, S>(store: &S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    if let Err(e) = try_write(store, key, value) {
        warn!("[STORAGE] Could not persist '{}': {}", key, e);
    }
}
