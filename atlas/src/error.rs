//! Error types for storage, configuration, and geolocation.

/// Failure writing the saved-location document.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (private mode, SSR, disabled storage).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend refused the write, e.g. quota exceeded.
    #[error("storage write failed: {0}")]
    Write(String),
    /// The in-memory list could not be serialized.
    #[error("failed to encode saved locations: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Error returned by [`crate::config::BoardConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Why "locate me" could not produce a position.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    #[error("Location is not available yet")]
    Pending,
    #[error("{0}")]
    Failed(String),
}
