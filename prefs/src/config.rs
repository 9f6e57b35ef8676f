//! Theme controller configuration.
//!
//! DESIGN
//! ======
//! Every field has a default matching the stock page contract (`"theme"` key,
//! `"dark"` default, `data-theme` on `<html>`, `--bg` on `<body>`). Hosts pass
//! partial JSON to override only what differs; unknown fields are rejected so
//! typos fail loudly instead of silently keeping a default.

use serde::Deserialize;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME: &str = "dark";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_BACKGROUND_PROPERTY: &str = "--bg";
pub const DEFAULT_META_SELECTOR: &str = r#"meta[name="theme-color"]"#;
pub const DEFAULT_GLOBAL_SETTER: &str = "setTheme";

/// What to do when the preference store fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreFallback {
    /// Return the store error to the caller.
    #[default]
    Propagate,
    /// Keep the preference in memory for the rest of the session.
    Memory,
}

/// Settings for a [`crate::ThemeController`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Key the preference is stored under.
    pub storage_key: String,
    /// Theme applied when nothing is stored.
    pub default_theme: String,
    /// Attribute written on the document root element.
    pub attribute: String,
    /// Custom property resolved on `<body>` to obtain the background colour.
    pub background_property: String,
    /// Selector for the browser chrome colour hint.
    pub meta_selector: String,
    /// Window-level name for the setter; `None` keeps it module-only.
    pub global_setter: Option<String>,
    /// Policy for store failures.
    pub store_fallback: StoreFallback,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_theme: DEFAULT_THEME.to_string(),
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            background_property: DEFAULT_BACKGROUND_PROPERTY.to_string(),
            meta_selector: DEFAULT_META_SELECTOR.to_string(),
            global_setter: Some(DEFAULT_GLOBAL_SETTER.to_string()),
            store_fallback: StoreFallback::Propagate,
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON object, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] on malformed JSON, unknown fields, or a
    /// blank required field.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ThemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field the controller dereferences is usable.
    ///
    /// `default_theme` is exempt: any string, including the empty one, is a
    /// valid theme identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] naming the first blank field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("attribute", &self.attribute),
            ("background_property", &self.background_property),
            ("meta_selector", &self.meta_selector),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ThemeError::Config(format!("{field} must not be blank")));
            }
        }
        if self.global_setter.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ThemeError::Config("global_setter must not be blank; use null to disable it".into()));
        }
        Ok(())
    }
}
