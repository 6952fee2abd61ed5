//! Error types for gtfsload-core.

use thiserror::Error;

/// Fixture generation error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested fixture name is not in the catalog.
    #[error("Unknown fixture: {0}")]
    UnknownFixture(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fixture operations.
pub type Result<T> = std::result::Result<T, Error>;
