//! Structured error types for store and persistence operations.

use thiserror::Error;

/// Errors surfaced by the store, index resolver, and persistence layers.
///
/// Every variant is recoverable: the session reports the message and keeps
/// running. Nothing here terminates the process.
#[derive(Debug, Error)]
pub enum TaskError {
    /// User-supplied task number failed validation against the current
    /// list length.
    #[error("expected an integer in 1..={len}, got '{input}'")]
    InvalidIndex { input: String, len: usize },

    /// The data file could not be opened, created, or written.
    #[error("{0}")]
    Persistence(#[from] std::io::Error),

    /// The data file held something other than a task array.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// A line could not be read from the input.
    #[error("{0}")]
    InputRead(std::io::Error),
}

impl TaskError {
    pub fn invalid_index(input: impl Into<String>, len: usize) -> Self {
        Self::InvalidIndex {
            input: input.into(),
            len,
        }
    }
}

/// Result type for task operations.
pub type TaskResult<T> = std::result::Result<T, TaskError>;
