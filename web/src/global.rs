//! Window-level setter for markup that calls `window.setTheme(...)`.
//!
//! Module consumers should import `setTheme` from the generated bindings
//! instead; the global exists for inline handlers and third-party widgets
//! that cannot import. It forwards to the same controller slot.

use std::cell::RefCell;

use log::debug;
use theme_prefs::ThemeError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::js::describe;

#[cfg(test)]
#[path = "global_test.rs"]
mod global_test;

thread_local! {
    static INSTALLED: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Install the setter as `window[name]`.
///
/// Re-installing under the same name is a no-op, so repeated initialization
/// does not leak another closure.
pub(crate) fn install_setter(name: &str) -> Result<(), ThemeError> {
    if is_installed(name) {
        return Ok(());
    }
    let window = web_sys::window().ok_or_else(|| ThemeError::Document("no window".into()))?;

    let setter = Closure::wrap(
        Box::new(|value: String| crate::set_theme(&value)) as Box<dyn Fn(String) -> Result<(), JsValue>>
    );
    js_sys::Reflect::set(&window, &JsValue::from_str(name), setter.as_ref().unchecked_ref())
        .map_err(|err| ThemeError::Document(describe(&err)))?;
    setter.forget();

    mark_installed(name);
    debug!("theme: installed window.{name}");
    Ok(())
}

fn is_installed(name: &str) -> bool {
    INSTALLED.with(|slot| slot.borrow().as_deref() == Some(name))
}

fn mark_installed(name: &str) {
    INSTALLED.with(|slot| *slot.borrow_mut() = Some(name.to_string()));
}
