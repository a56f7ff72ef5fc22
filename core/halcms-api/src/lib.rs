//! Request handling for the halcms HAL API.
//!
//! Everything here is transport-agnostic: handlers take typed inputs and
//! return HAL [`Resource`]s or an [`ApiError`]; the server crate turns those
//! into HTTP responses.
//!
//! - [`ServiceRegistry`] / [`KindServices`]: the collaborators for each
//!   resource kind, selected by [`ResourceKind`]
//! - [`ContentQueryHandler`]: listings, single nodes, children, descendants,
//!   metadata
//! - [`ContentCommandHandler`]: create, update, delete
//! - [`SearchAdapter`]: ranked search with order-preserving id resolution
//!
//! [`Resource`]: halcms_hal::Resource
//! [`ResourceKind`]: halcms_types::ResourceKind

pub mod commands;
mod error;
pub mod queries;
pub mod search;
mod services;

pub use commands::{CommandOutcome, CommandStatus, ContentCommandHandler};
pub use error::{ApiError, ApiResult};
pub use queries::{ContentQueryHandler, ListQuery};
pub use search::{order_by_ids, SearchAdapter};
pub use services::{KindServices, ServiceRegistry, DEFAULT_PAGE_SIZE};
