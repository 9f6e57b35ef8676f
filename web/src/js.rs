//! Conversions across the JS boundary.

use theme_prefs::ThemeError;
use wasm_bindgen::{JsCast, JsValue};

#[cfg(test)]
#[path = "js_test.rs"]
mod js_test;

/// Message thrown to the page for a failed theme operation.
pub(crate) fn error_message(err: &ThemeError) -> String {
    format!("[{}] {err}", err.error_code())
}

/// Convert a theme error into a thrown `Error` object.
pub(crate) fn to_js_error(err: ThemeError) -> JsValue {
    js_sys::Error::new(&error_message(&err)).into()
}

/// Best-effort text for a value thrown by a browser API.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(err.name()), String::from(err.message()));
    }
    format!("{value:?}")
}
