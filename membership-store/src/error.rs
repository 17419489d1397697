//! Store error types.
//!
//! Used by store implementations and callers of membership APIs.

use thiserror::Error;

/// Errors that can occur when using membership store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached at construction time. Fatal to the caller.
    #[error("Could not connect to the store at {endpoint}: {message}")]
    Connection { endpoint: String, message: String },

    /// A single operation failed after startup. Callers log this and treat the
    /// triggering command as "did not happen".
    #[error("Store operation failed: {0}")]
    Operation(String),

    #[error("Invalid store configuration: {0}")]
    Config(String),
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        StoreError::Operation(e.to_string())
    }
}
