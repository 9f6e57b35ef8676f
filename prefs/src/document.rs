//! DOM seam: the three things the controller touches on the page.
//!
//! The root element carries the theme attribute that external stylesheets key
//! off. `<body>` exposes the per-theme background custom property through its
//! computed style. An optional pre-existing meta tag receives the colour.

use crate::error::ThemeError;

/// Page operations needed to apply a theme and mirror its background colour.
pub trait ThemeDocument {
    /// Set `name` to `value` on the document root element.
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Current value of `name` on the document root element.
    fn root_attribute(&self, name: &str) -> Result<Option<String>, ThemeError>;

    /// Computed value of custom property `name` on `<body>`, untrimmed.
    ///
    /// Must reflect every root attribute write made before the call.
    fn body_property(&self, name: &str) -> Result<String, ThemeError>;

    /// Set `content` on the first element matching `selector`.
    ///
    /// Returns `Ok(false)` when nothing matches; the tag is optional.
    fn set_meta_content(&self, selector: &str, content: &str) -> Result<bool, ThemeError>;
}

impl<D: ThemeDocument + ?Sized> ThemeDocument for &D {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set_root_attribute(name, value)
    }

    fn root_attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        (**self).root_attribute(name)
    }

    fn body_property(&self, name: &str) -> Result<String, ThemeError> {
        (**self).body_property(name)
    }

    fn set_meta_content(&self, selector: &str, content: &str) -> Result<bool, ThemeError> {
        (**self).set_meta_content(selector, content)
    }
}
