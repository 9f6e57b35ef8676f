//! Test doubles for the store and document seams.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::document::ThemeDocument;
use crate::error::ThemeError;
use crate::store::PreferenceStore;

/// Store whose reads and/or writes always throw.
#[derive(Debug, Default)]
pub(crate) struct BrokenStore {
    pub(crate) reads_ok: bool,
    pub(crate) writes: Cell<usize>,
}

impl BrokenStore {
    /// Every call fails.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reads succeed (nothing stored) but writes fail, like a full quota.
    pub(crate) fn write_only_broken() -> Self {
        Self { reads_ok: true, writes: Cell::new(0) }
    }
}

impl PreferenceStore for BrokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.reads_ok {
            return Ok(None);
        }
        Err(ThemeError::StoreRead { key: key.to_string(), reason: "SecurityError".into() })
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), ThemeError> {
        self.writes.set(self.writes.get() + 1);
        Err(ThemeError::StoreWrite { key: key.to_string(), reason: "QuotaExceededError".into() })
    }
}

/// In-memory page: a root element, a body whose `--bg` follows the root's
/// theme attribute through a palette, and an optional theme-color meta tag.
#[derive(Debug, Default)]
pub(crate) struct FakePage {
    root: RefCell<HashMap<String, String>>,
    palette: HashMap<String, String>,
    meta: RefCell<Option<String>>,
    has_meta: bool,
    has_body: bool,
    /// Theme attribute observed at each computed-style read.
    pub(crate) style_reads: RefCell<Vec<Option<String>>>,
}

impl FakePage {
    /// Page with the dark/light palette and a theme-color meta tag.
    pub(crate) fn with_meta() -> Self {
        Self {
            palette: HashMap::from([
                ("dark".to_string(), "#111111".to_string()),
                ("light".to_string(), "#ffffff".to_string()),
            ]),
            meta: RefCell::new(Some(String::new())),
            has_meta: true,
            has_body: true,
            ..Self::default()
        }
    }

    /// Same palette, no meta tag in the markup.
    pub(crate) fn without_meta() -> Self {
        Self { meta: RefCell::new(None), has_meta: false, ..Self::with_meta() }
    }

    /// Page with no `<body>` yet, as before document-ready.
    pub(crate) fn without_body() -> Self {
        Self { has_body: false, ..Self::with_meta() }
    }

    pub(crate) fn root(&self, name: &str) -> Option<String> {
        self.root.borrow().get(name).cloned()
    }

    pub(crate) fn meta_content(&self) -> Option<String> {
        self.meta.borrow().clone()
    }
}

impl ThemeDocument for FakePage {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.root.borrow_mut().insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn root_attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.root(name))
    }

    fn body_property(&self, name: &str) -> Result<String, ThemeError> {
        if !self.has_body {
            return Err(ThemeError::Document("document has no body".into()));
        }
        let theme = self.root("data-theme");
        self.style_reads.borrow_mut().push(theme.clone());
        if name != "--bg" {
            return Ok(String::new());
        }
        // Browsers keep the whitespace after the colon in custom property values.
        Ok(theme.and_then(|t| self.palette.get(&t)).map_or_else(String::new, |bg| format!(" {bg}")))
    }

    fn set_meta_content(&self, _selector: &str, content: &str) -> Result<bool, ThemeError> {
        if !self.has_meta {
            return Ok(false);
        }
        *self.meta.borrow_mut() = Some(content.to_string());
        Ok(true)
    }
}
