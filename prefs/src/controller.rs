//! Theme preference controller.
//!
//! Restores the stored theme on load, applies theme changes, persists them,
//! and mirrors the active theme's background colour into the browser chrome
//! meta tag.
//!
//! ORDERING
//! ========
//! The background colour is a function of the root theme attribute (external
//! stylesheets select the palette with it), so every colour read happens after
//! the attribute write it depends on. `set_theme` persists between the two so
//! a failed store write leaves the page themed but the meta hint untouched.
//!
//! PRECONDITION
//! ============
//! Stylesheets must be applied before [`ThemeController::initialize`] runs;
//! the web host calls it after document-ready.

use log::debug;

use crate::config::ThemeConfig;
use crate::document::ThemeDocument;
use crate::error::ThemeError;
use crate::store::{ConfiguredStore, PreferenceStore};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub const DARK: &str = "dark";
pub const LIGHT: &str = "light";

/// Owns the preference store and the page, and keeps them consistent.
pub struct ThemeController<S, D> {
    config: ThemeConfig,
    store: ConfiguredStore<S>,
    document: D,
}

impl<S: PreferenceStore, D: ThemeDocument> ThemeController<S, D> {
    /// Wrap `store` per `config.store_fallback` and bind to `document`.
    #[must_use]
    pub fn new(config: ThemeConfig, store: S, document: D) -> Self {
        let store = ConfiguredStore::new(store, config.store_fallback);
        Self { config, store, document }
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Whether the store failed and the preference is now session-only.
    #[must_use]
    pub fn is_store_degraded(&self) -> bool {
        self.store.is_degraded()
    }

    /// Apply the stored theme (or the default) and sync the meta tag once.
    ///
    /// Returns the theme that was applied.
    ///
    /// # Errors
    ///
    /// Store failures under the `propagate` policy, and DOM failures.
    pub fn initialize(&self) -> Result<String, ThemeError> {
        let theme = self.restore()?;
        self.sync_meta()?;
        Ok(theme)
    }

    /// Apply the stored theme (or the default) without touching the meta tag.
    ///
    /// Hosts that expose the setter call this, publish the setter, then run
    /// [`ThemeController::sync_meta`], so a failing sync still leaves a
    /// usable controller behind.
    ///
    /// # Errors
    ///
    /// Store failures under the `propagate` policy, and DOM failures.
    pub fn restore(&self) -> Result<String, ThemeError> {
        let theme = self.stored_theme()?;
        self.document.set_root_attribute(&self.config.attribute, &theme)?;
        debug!("theme: restored {theme:?}");
        Ok(theme)
    }

    /// Apply `value`, persist it, then resync the meta tag.
    ///
    /// Any string is accepted verbatim. Repeating a call with the same value
    /// leaves the page and store unchanged.
    ///
    /// # Errors
    ///
    /// Store failures under the `propagate` policy, and DOM failures.
    pub fn set_theme(&self, value: &str) -> Result<(), ThemeError> {
        self.document.set_root_attribute(&self.config.attribute, value)?;
        self.store.set(&self.config.storage_key, value)?;
        debug!("theme: set {value:?}");
        self.sync_meta()?;
        Ok(())
    }

    /// Switch between dark and light.
    ///
    /// From any other theme, or none, this goes to the configured default.
    /// Returns the theme now applied.
    ///
    /// # Errors
    ///
    /// Same as [`ThemeController::set_theme`].
    pub fn toggle(&self) -> Result<String, ThemeError> {
        let next = match self.current()?.as_deref() {
            Some(DARK) => LIGHT.to_string(),
            Some(LIGHT) => DARK.to_string(),
            _ => self.config.default_theme.clone(),
        };
        self.set_theme(&next)?;
        Ok(next)
    }

    /// Theme currently applied to the root element.
    ///
    /// # Errors
    ///
    /// DOM failures.
    pub fn current(&self) -> Result<Option<String>, ThemeError> {
        self.document.root_attribute(&self.config.attribute)
    }

    /// Copy the resolved background colour into the meta tag.
    ///
    /// Returns the colour written, or `None` when the page has no meta tag.
    /// An unset custom property resolves to the empty string and is written
    /// as-is, so the hint never keeps a previous theme's colour.
    ///
    /// # Errors
    ///
    /// DOM failures, including a missing `<body>`.
    pub fn sync_meta(&self) -> Result<Option<String>, ThemeError> {
        let resolved = self.document.body_property(&self.config.background_property)?;
        let color = resolved.trim();
        if self.document.set_meta_content(&self.config.meta_selector, color)? {
            debug!("theme: chrome colour {color:?}");
            Ok(Some(color.to_string()))
        } else {
            debug!("theme: no {} tag, skipping chrome colour", self.config.meta_selector);
            Ok(None)
        }
    }

    fn stored_theme(&self) -> Result<String, ThemeError> {
        let stored = self.store.get(&self.config.storage_key)?;
        Ok(stored.unwrap_or_else(|| self.config.default_theme.clone()))
    }
}
