//! Error types for crewforge

use thiserror::Error;

/// Main error type for crewforge operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrewForgeError {
    /// Input rejected before solving (short schedule, empty roster, bad budget, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CrewForgeError {
    /// Shorthand for building an [`CrewForgeError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CrewForgeError::InvalidInput(message.into())
    }
}

/// Result type alias for crewforge operations
pub type Result<T> = std::result::Result<T, CrewForgeError>;
