//! `localStorage` as a preference store.
//!
//! The storage handle is looked up once. When the page has no usable
//! `localStorage` (disabled, sandboxed iframe, some privacy modes) the lookup
//! error is kept and returned from every call, so the controller's fallback
//! policy decides what happens.

use theme_prefs::{PreferenceStore, ThemeError};
use web_sys::Storage;

use crate::js::describe;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Preference store over `window.localStorage`.
pub struct LocalStorage {
    storage: Result<Storage, String>,
}

impl LocalStorage {
    /// Look up `window.localStorage`.
    #[must_use]
    pub fn new() -> Self {
        Self { storage: lookup() }
    }

    fn handle(&self) -> Result<&Storage, ThemeError> {
        self.storage.as_ref().map_err(|reason| ThemeError::StoreUnavailable(reason.clone()))
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup() -> Result<Storage, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err("localStorage is not available".to_string()),
        Err(err) => Err(describe(&err)),
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.handle()?
            .get_item(key)
            .map_err(|err| ThemeError::StoreRead { key: key.to_string(), reason: describe(&err) })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.handle()?
            .set_item(key, value)
            .map_err(|err| ThemeError::StoreWrite { key: key.to_string(), reason: describe(&err) })
    }
}
