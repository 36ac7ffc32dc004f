//! Browser localStorage Backend

use wasm_bindgen::JsValue;

use crate::{KeyValueStore, StorageError};

/// `window.localStorage`, or nothing if the browser refuses access.
///
/// When storage is missing, reads report no entry and writes fail with
/// [`StorageError::Unavailable`], so callers keep running on defaults.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Js(format!("{:?}", err))
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let Some(storage) = &self.storage else {
            return Err(StorageError::Unavailable);
        };
        storage.set_item(key, value).map_err(js_error)
    }

    fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}
