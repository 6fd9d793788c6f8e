//! Error types for the save file.

use thiserror::Error;

/// Errors that can occur reading or writing the save file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// No save file at the expected location.
    #[error("File {0} not found")]
    FileNotFound(String),

    /// Filesystem failure.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The save file is not valid inventory JSON.
    #[error("Corrupt save '{path}': {source}")]
    Format {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
