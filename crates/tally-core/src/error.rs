//! Error types for the counter widget.

use thiserror::Error;

/// Errors that can occur while setting up or persisting a counter.
///
/// Out-of-range mutations are deliberately absent: they are silent no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    #[error("Missing UI element: {0}")]
    MissingElement(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, CounterError>;
