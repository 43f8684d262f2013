//! Error types for the map interaction layer.
//!
//! None of these reach the user: a malformed centroid leaves the camera where
//! it is, a settings problem falls back to defaults.

use thiserror::Error;

/// A `centroid` attribute that is present but cannot be read as a coordinate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CentroidError {
    /// Cleanup left something other than exactly two tokens
    #[error("malformed centroid {raw:?}: expected 2 numbers, found {found}")]
    TokenCount { raw: String, found: usize },

    /// A token did not parse as a finite number
    #[error("malformed centroid {raw:?}: {token:?} is not a finite number")]
    InvalidNumber { raw: String, token: String },
}

/// Errors from settings and style I/O
#[derive(Error, Debug)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Atomic replace of the settings file failed
    #[error("Failed to persist settings: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("No configuration directory on this platform")]
    NoConfigDir,

    #[error("Settings watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result type alias for map operations
pub type MapResult<T> = Result<T, MapError>;
