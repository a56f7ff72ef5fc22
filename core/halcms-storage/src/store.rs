//! Persistence and schema contracts.

use async_trait::async_trait;
use halcms_model::{ContentNode, ContentTypeDefinition, PropertyBag};
use halcms_types::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StorageResult;

/// Sort direction for paged listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Short form used in query strings.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// Parameters of a paged listing, passed through to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page_index: u64,
    pub page_size: u64,
    pub order_by: String,
    pub direction: SortDirection,
    pub filter: Option<String>,
}

impl PageQuery {
    /// Field listings are sorted by when the caller gives none.
    pub const DEFAULT_ORDER_BY: &'static str = "sortOrder";

    pub fn new(page_index: u64, page_size: u64) -> Self {
        Self {
            page_index,
            page_size,
            order_by: Self::DEFAULT_ORDER_BY.to_string(),
            direction: SortDirection::Ascending,
            filter: None,
        }
    }

    #[must_use]
    pub fn ordered_by(mut self, order_by: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by = order_by.into();
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn filtered(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Number of items before this page.
    pub fn skip(&self) -> u64 {
        self.page_index.saturating_mul(self.page_size)
    }
}

/// One page of a listing plus the total across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64) -> Self {
        Self { items, total }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// A node to be created. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNode {
    pub parent_id: NodeId,
    pub name: String,
    pub content_type_alias: String,
    pub template_id: Option<i32>,
    pub properties: PropertyBag,
}

/// Node persistence as seen by the API core.
///
/// Implementations own their consistency; every call is treated as atomic and
/// is never retried by the caller.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Returns the node with the given id, if any.
    async fn get_by_id(&self, id: NodeId) -> StorageResult<Option<ContentNode>>;

    /// Bulk lookup. Unknown ids are skipped and the order of the result is
    /// not specified.
    async fn get_by_ids(&self, ids: &[NodeId]) -> StorageResult<Vec<ContentNode>>;

    /// Top-level nodes.
    async fn get_root(&self) -> StorageResult<Vec<ContentNode>>;

    /// Direct children of a node.
    async fn get_children(&self, id: NodeId) -> StorageResult<Vec<ContentNode>>;

    /// Cheap existence check that avoids fetching children.
    async fn has_children(&self, id: NodeId) -> StorageResult<bool>;

    /// One page of a node's children, sorted and filtered by the store.
    async fn get_paged_children(
        &self,
        id: NodeId,
        query: &PageQuery,
    ) -> StorageResult<Page<ContentNode>>;

    /// One page of all nodes below a node, in tree order.
    async fn get_paged_descendants(
        &self,
        id: NodeId,
        query: &PageQuery,
    ) -> StorageResult<Page<ContentNode>>;

    /// Persists a new node and returns it with its assigned id.
    async fn create(&self, node: NewNode) -> StorageResult<ContentNode>;

    /// Replaces an existing node.
    async fn update(&self, node: ContentNode) -> StorageResult<ContentNode>;

    /// Removes a node and everything below it.
    async fn delete(&self, id: NodeId) -> StorageResult<()>;
}

/// Content type (schema) lookup.
#[async_trait]
pub trait ContentTypeStore: Send + Sync {
    async fn get_by_alias(&self, alias: &str) -> StorageResult<Option<ContentTypeDefinition>>;
}
