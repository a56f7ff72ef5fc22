//! Collaborator contracts for halcms.
//!
//! The API core never owns content. It reaches the content repository, the
//! content type store and the search index through the async traits defined
//! here, all of which are injected at construction time:
//!
//! - [`ContentStore`]: node lookups, paged listings, create/update/delete
//! - [`ContentTypeStore`]: schema lookup by alias
//! - [`SearchProvider`]: ranked id search with an authoritative total
//!
//! The `memory` module provides in-process implementations used by the
//! standalone server and by tests.

mod error;
pub mod memory;
pub mod search;
mod store;

pub use error::{StorageError, StorageResult};
pub use memory::{InMemoryContentStore, InMemoryContentTypeStore};
pub use search::{InMemorySearchProvider, SearchCriteria, SearchHits, SearchProvider};
pub use store::{ContentStore, ContentTypeStore, NewNode, Page, PageQuery, SortDirection};
