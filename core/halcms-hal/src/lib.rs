//! HAL (`application/hal+json`) assembly for halcms.
//!
//! # Architecture
//!
//! - [`links`]: the link template resolver. Pure string composition from a
//!   resource kind, an API version and known ids.
//! - [`resource`]: the generic HAL [`Resource`] (state, properties, `_links`,
//!   `_embedded`) and [`Link`].
//! - [`paging`]: the paged collection builder. Computes `next`/`prev` from
//!   the caller's page and the authoritative total; never re-slices.
//! - [`mapper`]: turns [`halcms_model::ContentNode`]s into resources with
//!   schema-ordered properties, and lists of them into collection envelopes.
//! - [`envelope`]: the error envelope shared by every failure response.

pub mod envelope;
mod error;
pub mod links;
pub mod mapper;
pub mod paging;
pub mod resource;

pub use envelope::{error_envelope, ErrorRepresentation};
pub use error::{HalError, HalResult};
pub use links::{rels, LinkSet, LinkTemplate};
pub use mapper::{order_properties, ResourceMapper};
pub use paging::{PagedCollectionBuilder, PagedResult};
pub use resource::{Link, LinkValue, Resource};

/// Media type of every response body.
pub const HAL_JSON: &str = "application/hal+json";
