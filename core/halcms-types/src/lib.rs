//! Core type definitions for halcms.
//!
//! This crate defines the small, dependency-free types shared by every layer
//! of the API:
//! - Node identifiers, including the `-1` root sentinel
//! - Resource kinds (content, media, published content, members) and their
//!   URL segments
//! - The API version carried in every route

mod ids;
mod kind;

pub use ids::NodeId;
pub use kind::{ApiVersion, ResourceKind};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid node id: {0}")]
    InvalidNodeId(String),

    #[error("unknown resource kind: {0}")]
    UnknownKind(String),

    #[error("invalid API version: {0}")]
    InvalidVersion(String),
}
