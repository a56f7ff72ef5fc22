//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by persistence, schema and search collaborators.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Node or content type not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backing service could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backing service rejected or failed the operation.
    #[error("backend error: {0}")]
    Backend(String),

    /// The search provider could not parse the query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}
