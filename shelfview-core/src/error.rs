//! Error types for Shelfview Core

use thiserror::Error;

/// Result type alias using ShelfviewError
pub type Result<T> = std::result::Result<T, ShelfviewError>;

/// Top-level error type for all Shelfview operations
#[derive(Debug, Error)]
pub enum ShelfviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed catalog: {0}")]
    Malformed(String),
}
