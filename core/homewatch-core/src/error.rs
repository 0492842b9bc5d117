//! Error types for homewatch-core operations.
//!
//! Alarm transitions themselves are total functions and never fail; errors
//! only arise at the persistence and configuration edges.

use std::path::PathBuf;

/// All errors that can occur in homewatch-core operations.
#[derive(Debug, thiserror::Error)]
pub enum SecurityError {
    #[error("Home directory could not be determined")]
    HomeDirNotFound,

    #[error("Store is in-memory only; no file path to save to")]
    InMemoryOnly,

    #[error("Configuration write failed: {path}: {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using SecurityError.
pub type Result<T> = std::result::Result<T, SecurityError>;
