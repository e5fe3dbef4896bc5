//! Common error types for the scene enhancement engine

use thiserror::Error;

/// Common result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the engine crates
#[derive(Error, Debug)]
pub enum Error {
    /// Persisted record could not be parsed (wraps serde_json::Error)
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid input or attribute value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
