//! # theme-prefs-web
//!
//! WebAssembly host for `theme-prefs`. Binds the controller to
//! `localStorage` and the live document, and exports the page-facing entry
//! points:
//!
//! | Export | Role |
//! |--------|------|
//! | `initTheme()` | Restore the stored theme with default settings |
//! | `initThemeWith(json)` | Same, with a partial JSON config |
//! | `setTheme(value)` | Apply, persist, and sync the chrome colour |
//! | `toggleTheme()` | Switch dark/light |
//! | `currentTheme()` | Theme on the root element |
//!
//! `initTheme` must run after stylesheets have loaded (document-ready), since
//! the chrome colour is read from computed style. Failures are thrown as JS
//! `Error`s whose message starts with a stable `[E_*]` code.

mod dom;
mod global;
mod js;
mod storage;


use std::cell::RefCell;
use std::sync::Once;

use log::info;
use theme_prefs::{ThemeConfig, ThemeController, ThemeError};
use wasm_bindgen::prelude::*;

pub use dom::BrowserDocument;
pub use storage::LocalStorage;

use js::to_js_error;

/// Controller bound to the browser.
pub type WebController = ThemeController<LocalStorage, BrowserDocument>;

thread_local! {
    static CONTROLLER: RefCell<Option<WebController>> = const { RefCell::new(None) };
}

/// Restore the stored theme using the default configuration.
///
/// Returns the theme applied.
#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme() -> Result<String, JsValue> {
    init_with(ThemeConfig::default())
}

/// Restore the stored theme using a partial JSON configuration.
#[wasm_bindgen(js_name = initThemeWith)]
pub fn init_theme_with(config_json: &str) -> Result<String, JsValue> {
    init_with(ThemeConfig::from_json(config_json).map_err(to_js_error)?)
}

/// Apply `value` as the active theme and persist it.
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(value: &str) -> Result<(), JsValue> {
    with_controller(|controller| controller.set_theme(value)).map_err(to_js_error)
}

/// Switch between dark and light; returns the theme now applied.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<String, JsValue> {
    with_controller(WebController::toggle).map_err(to_js_error)
}

/// Theme currently on the root element, if any.
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Result<Option<String>, JsValue> {
    with_controller(WebController::current).map_err(to_js_error)
}

fn init_with(config: ThemeConfig) -> Result<String, JsValue> {
    init_logging();
    config.validate().map_err(to_js_error)?;

    let document = BrowserDocument::from_window().map_err(to_js_error)?;
    let controller = ThemeController::new(config, LocalStorage::new(), document);
    let theme = controller.restore().map_err(to_js_error)?;
    if controller.is_store_degraded() {
        info!("theme: localStorage unavailable, preference will not survive reload");
    }
    let global = controller.config().global_setter.clone();
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));

    // The setter is published before the chrome colour sync, which may fail.
    if let Some(name) = global {
        global::install_setter(&name).map_err(to_js_error)?;
    }
    with_controller(WebController::sync_meta).map_err(to_js_error)?;
    Ok(theme)
}

fn with_controller<T>(op: impl FnOnce(&WebController) -> Result<T, ThemeError>) -> Result<T, ThemeError> {
    CONTROLLER.with(|slot| match slot.borrow().as_ref() {
        Some(controller) => op(controller),
        None => Err(ThemeError::NotInitialized),
    })
}

fn init_logging() {
    static LOGGING: Once = Once::new();
    LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("theme: logger already installed by host");
        }
    });
}
