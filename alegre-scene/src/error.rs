//! Error types for alegre-scene
//!
//! Module-specific error types using thiserror. Note that per the error
//! handling policy nothing here is fatal: callers either fall back, log and
//! swallow, or degrade the affected element only.

use thiserror::Error;

/// Main error type for the alegre-scene engine
#[derive(Error, Debug)]
pub enum Error {
    /// Persistence backend write or read failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted record parse errors
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// HTTP errors from the existence probe
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Page surface problems (missing widget, bad attribute)
    #[error("Page error: {0}")]
    Page(String),

    /// Playback errors
    #[error("Playback error: {0}")]
    Playback(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience Result type using the alegre-scene Error
pub type Result<T> = std::result::Result<T, Error>;
