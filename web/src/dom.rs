//! `web_sys` implementation of the document seam.

use theme_prefs::{ThemeDocument, ThemeError};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::js::describe;

/// The live page.
pub struct BrowserDocument {
    window: Window,
    document: Document,
}

impl BrowserDocument {
    /// Bind to the current window's document.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Document`] outside a browsing context.
    pub fn from_window() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or_else(|| ThemeError::Document("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| ThemeError::Document("window has no document".into()))?;
        Ok(Self { window, document })
    }

    fn root(&self) -> Result<Element, ThemeError> {
        self.document
            .document_element()
            .ok_or_else(|| ThemeError::Document("document has no root element".into()))
    }

    fn body(&self) -> Result<HtmlElement, ThemeError> {
        self.document.body().ok_or_else(|| ThemeError::Document("document has no body".into()))
    }
}

impl ThemeDocument for BrowserDocument {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.root()?.set_attribute(name, value).map_err(|err| ThemeError::Document(describe(&err)))
    }

    fn root_attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.root()?.get_attribute(name))
    }

    fn body_property(&self, name: &str) -> Result<String, ThemeError> {
        let body = self.body()?;
        let style = self
            .window
            .get_computed_style(&body)
            .map_err(|err| ThemeError::Document(describe(&err)))?
            .ok_or_else(|| ThemeError::Document("computed style unavailable for body".into()))?;
        style.get_property_value(name).map_err(|err| ThemeError::Document(describe(&err)))
    }

    fn set_meta_content(&self, selector: &str, content: &str) -> Result<bool, ThemeError> {
        let found = self
            .document
            .query_selector(selector)
            .map_err(|err| ThemeError::Document(describe(&err)))?;
        let Some(meta) = found else {
            return Ok(false);
        };
        meta.set_attribute("content", content).map_err(|err| ThemeError::Document(describe(&err)))?;
        Ok(true)
    }
}
