//! Error types for sesh.

use thiserror::Error;

/// All errors surfaced by sesh commands.
#[derive(Debug, Error)]
pub enum SeshError {
    /// I/O failure (file access, subprocess spawning, console).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration problem (missing home, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// Operator input rejected during validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A named thing (task list, session) doesn't exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The website blocking script failed or is missing.
    #[error("website blocker: {0}")]
    Blocker(String),

    /// The remote task service returned an error.
    #[error("task service: {0}")]
    Tasks(String),

    /// Stored credentials are missing, expired, or rejected.
    #[error("authentication: {0}")]
    Auth(String),
}
