//! Error types for HAL assembly.

use thiserror::Error;

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;

/// Errors raised while building HAL resources.
///
/// These indicate caller bugs such as bad paging arguments, never invalid
/// client input.
#[derive(Debug, Error)]
pub enum HalError {
    /// An argument violated a documented precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
