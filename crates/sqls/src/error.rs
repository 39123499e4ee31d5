//! Error types for sqls

use thiserror::Error;

/// Result type alias for sqls operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors surfaced when configuring a dialect or finalizing a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// The statement's accumulated state cannot produce a well-formed query
    /// (e.g. a batch row whose width differs from the column count).
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Invalid dialect configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SqlError {
    /// Create a malformed input error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a malformed input error
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
