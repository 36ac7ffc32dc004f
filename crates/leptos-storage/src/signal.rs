//! Persisted Signals
//!
//! Signal pair that hydrates from storage once and writes back on change.

use leptos::logging::warn;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{read, write, KeyValueStore, LocalStorage};

/// Create a signal backed by `localStorage[key]`.
pub fn persisted_signal<T>(key: &'static str, default: T) -> (ReadSignal<T>, WriteSignal<T>)
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    persisted_signal_in(LocalStorage::new(), key, default)
}

/// Create a signal backed by `storage[key]`.
///
/// The initial value is read synchronously; afterwards an effect re-persists
/// the value every time it changes. With no usable storage the signal is
/// purely in-memory.
pub fn persisted_signal_in<S, T>(
    storage: S,
    key: &'static str,
    default: T,
) -> (ReadSignal<T>, WriteSignal<T>)
where
    S: KeyValueStore + 'static,
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let initial = read(&storage, key, default);
    let (value, set_value) = signal(initial);

    if !storage.is_available() {
        warn!("[STORAGE] No storage available, '{}' will not persist", key);
        return (value, set_value);
    }

    Effect::new(move |_| {
        value.with(|v| write(&storage, key, v));
    });

    (value, set_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, StorageError};
    use any_spawner::Executor;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() -> Owner {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();
        owner
    }

    /// Store that refuses every write and counts the attempts
    #[derive(Clone, Default)]
    struct Unavailable {
        writes: Rc<Cell<usize>>,
    }

    impl KeyValueStore for Unavailable {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            self.writes.set(self.writes.get() + 1);
            Err(StorageError::Unavailable)
        }

        fn is_available(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_hydrates_from_stored_value() {
        let _owner = setup();
        let storage = MemoryStore::new();
        write(&storage, "theme", &false);

        let (dark, _) = persisted_signal_in(storage, "theme", true);
        assert!(!dark.get_untracked());
    }

    #[test]
    fn test_writes_back_on_change() {
        let _owner = setup();
        let storage = MemoryStore::new();

        let (dark, set_dark) = persisted_signal_in(storage.clone(), "theme", true);
        Executor::poll_local();
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("true"));

        set_dark.update(|d| *d = !*d);
        Executor::poll_local();
        assert!(!dark.get_untracked());
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("false"));

        set_dark.update(|d| *d = !*d);
        Executor::poll_local();
        assert!(read(&storage, "theme", false));
    }

    #[test]
    fn test_unavailable_storage_skips_writes() {
        let _owner = setup();
        let storage = Unavailable::default();

        let (dark, set_dark) = persisted_signal_in(storage.clone(), "theme", true);
        Executor::poll_local();
        set_dark.set(false);
        Executor::poll_local();

        assert!(!dark.get_untracked());
        assert_eq!(storage.writes.get(), 0);
    }
}
