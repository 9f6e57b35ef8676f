//! Error type shared by the store, document, and controller layers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure surfaced by a theme operation.
///
/// A missing preference or a missing meta tag is never an error; both have a
/// defined fallback. Everything here is a failure of an external collaborator
/// or of the caller's configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// No preference store is reachable (storage disabled, privacy mode).
    #[error("preference store unavailable: {0}")]
    StoreUnavailable(String),

    /// Reading the preference threw.
    #[error("failed to read preference '{key}': {reason}")]
    StoreRead { key: String, reason: String },

    /// Writing the preference threw (quota, storage disabled mid-session).
    #[error("failed to write preference '{key}': {reason}")]
    StoreWrite { key: String, reason: String },

    /// A DOM call threw or a required node is missing.
    #[error("document error: {0}")]
    Document(String),

    /// The configuration is unusable.
    #[error("invalid theme config: {0}")]
    Config(String),

    /// A theme operation ran before the controller was initialized.
    #[error("theme controller is not initialized")]
    NotInitialized,
}

impl ThemeError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::StoreUnavailable(_) => "E_STORE_UNAVAILABLE",
            Self::StoreRead { .. } => "E_STORE_READ",
            Self::StoreWrite { .. } => "E_STORE_WRITE",
            Self::Document(_) => "E_DOCUMENT",
            Self::Config(_) => "E_CONFIG",
            Self::NotInitialized => "E_NOT_INITIALIZED",
        }
    }

    /// Whether the failure came from the preference store.
    ///
    /// Only store failures degrade a [`crate::FallbackStore`] to memory.
    #[must_use]
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::StoreRead { .. } | Self::StoreWrite { .. })
    }
}
