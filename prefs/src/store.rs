//! Preference store seam and the stores the controller can run over.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the store is `localStorage`: synchronous, origin-scoped,
//! string-keyed, and able to throw in restricted contexts. The trait mirrors
//! that contract; methods take `&self` because the underlying store is shared
//! and mutated behind the caller's back anyway.
//!
//! TRADE-OFFS
//! ==========
//! `FallbackStore` trades persistence for availability: once the primary store
//! fails, the preference lives only as long as the page.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;

use crate::config::StoreFallback;
use crate::error::ThemeError;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Synchronous string key/value store holding the theme preference.
pub trait PreferenceStore {
    /// Read the value under `key`; `Ok(None)` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Overwrite the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set(key, value)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set(key, value)
    }
}

/// Non-persistent store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry, returning the store for chaining.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that degrades to memory after the first primary store failure.
///
/// Errors that are not store failures (see [`ThemeError::is_store_failure`])
/// pass through untouched and do not degrade the store.
/// Once degraded it never returns to the primary store, so reads stay
/// consistent with the writes made during the session.
#[derive(Debug)]
pub struct FallbackStore<S> {
    primary: S,
    memory: MemoryStore,
    degraded: Cell<bool>,
}

impl<S: PreferenceStore> FallbackStore<S> {
    #[must_use]
    pub fn new(primary: S) -> Self {
        Self { primary, memory: MemoryStore::new(), degraded: Cell::new(false) }
    }

    /// Whether the primary store has failed and memory is serving requests.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded.get()
    }

    fn degrade(&self, err: &ThemeError) {
        if !self.degraded.replace(true) {
            warn!("theme: preference store failed, keeping preference in memory for this session: {err}");
        }
    }
}

impl<S: PreferenceStore> PreferenceStore for FallbackStore<S> {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.is_degraded() {
            return self.memory.get(key);
        }
        match self.primary.get(key) {
            Ok(value) => Ok(value),
            Err(err) if err.is_store_failure() => {
                self.degrade(&err);
                self.memory.get(key)
            }
            Err(err) => Err(err),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.is_degraded() {
            return self.memory.set(key, value);
        }
        match self.primary.set(key, value) {
            Ok(()) => Ok(()),
            Err(err) if err.is_store_failure() => {
                self.degrade(&err);
                self.memory.set(key, value)
            }
            Err(err) => Err(err),
        }
    }
}

/// A store wrapped according to a [`StoreFallback`] policy.
#[derive(Debug)]
pub enum ConfiguredStore<S> {
    /// Errors reach the caller.
    Direct(S),
    /// Errors degrade to memory.
    Fallback(FallbackStore<S>),
}

impl<S: PreferenceStore> ConfiguredStore<S> {
    #[must_use]
    pub fn new(store: S, policy: StoreFallback) -> Self {
        match policy {
            StoreFallback::Propagate => Self::Direct(store),
            StoreFallback::Memory => Self::Fallback(FallbackStore::new(store)),
        }
    }

    /// Whether a fallback store has given up on the primary.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        match self {
            Self::Direct(_) => false,
            Self::Fallback(store) => store.is_degraded(),
        }
    }
}

impl<S: PreferenceStore> PreferenceStore for ConfiguredStore<S> {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        match self {
            Self::Direct(store) => store.get(key),
            Self::Fallback(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        match self {
            Self::Direct(store) => store.set(key, value),
            Self::Fallback(store) => store.set(key, value),
        }
    }
}
