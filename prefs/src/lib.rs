//! Theme preference management for a web page.
//!
//! This crate restores a persisted theme identifier on page load, applies it as
//! a root element attribute, persists later changes, and keeps the
//! `<meta name="theme-color">` browser chrome hint in step with the active
//! theme's resolved background colour. It is browser-independent: the
//! preference store and the DOM are reached through traits so the whole
//! controller runs and tests on the host. The `theme-prefs-web` crate binds
//! those traits to `localStorage` and `web_sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ThemeController`]: initialize, set, toggle, meta sync |
//! | [`config`] | Storage key, default theme, selectors, store failure policy |
//! | [`store`] | [`store::PreferenceStore`] seam, in-memory and fallback stores |
//! | [`document`] | [`document::ThemeDocument`] seam over the DOM |
//! | [`error`] | [`error::ThemeError`] and stable error codes |

pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod store;

#[cfg(test)]
mod testkit;

pub use config::{StoreFallback, ThemeConfig};
pub use controller::ThemeController;
pub use document::ThemeDocument;
pub use error::ThemeError;
pub use store::{ConfiguredStore, FallbackStore, MemoryStore, PreferenceStore};
