//! Search adapter.
//!
//! Providers rank ids; the content store resolves them in bulk but makes no
//! promise about the order it returns them in. The adapter restores the
//! provider's ranking before mapping.

use std::collections::HashMap;
use std::sync::Arc;

use halcms_hal::{rels, PagedResult, Resource};
use halcms_model::ContentNode;
use halcms_storage::SearchCriteria;
use halcms_types::NodeId;
use halcms_validation::ValidationError;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::services::KindServices;

/// Arranges `nodes` in the order of `ids`, dropping ids with no node.
pub fn order_by_ids(ids: &[NodeId], nodes: Vec<ContentNode>) -> Vec<ContentNode> {
    let mut by_id: HashMap<NodeId, ContentNode> = nodes.into_iter().map(|n| (n.id, n)).collect();
    ids.iter()
        .filter_map(|id| {
            let node = by_id.remove(id);
            if node.is_none() {
                debug!("Search hit {} no longer exists, skipping", id);
            }
            node
        })
        .collect()
}

/// Runs ranked searches for one kind.
#[derive(Debug, Clone)]
pub struct SearchAdapter {
    services: Arc<KindServices>,
}

impl SearchAdapter {
    pub fn new(services: Arc<KindServices>) -> Self {
        Self { services }
    }

    /// Nodes for one page of results, in ranked order, plus the provider's
    /// total.
    pub async fn search_nodes(
        &self,
        query: &str,
        page_index: u64,
        page_size: u64,
    ) -> ApiResult<(Vec<ContentNode>, i64)> {
        let skip = usize::try_from(page_index.saturating_mul(page_size)).unwrap_or(usize::MAX);
        let take = usize::try_from(page_size).unwrap_or(usize::MAX);
        let criteria = SearchCriteria::new(
            self.services.kind,
            query,
            skip.saturating_add(take),
        );

        let hits = self.services.search.search(&criteria).await?;
        debug!(
            "Search {:?} matched {} node(s), {} id(s) returned",
            query,
            hits.total,
            hits.ids.len()
        );
        let page_ids: Vec<NodeId> = hits.ids.into_iter().skip(skip).take(take).collect();
        if page_ids.is_empty() {
            return Ok((Vec::new(), hits.total));
        }
        let nodes = self.services.content.get_by_ids(&page_ids).await?;
        Ok((order_by_ids(&page_ids, nodes), hits.total))
    }

    /// A paged collection of search results. The query is echoed into the
    /// paging links as `lucene`.
    pub async fn search(&self, query: &str, page_index: i64, page_size: i64) -> ApiResult<Resource> {
        if query.trim().is_empty() {
            return Err(ApiError::Validation(vec![ValidationError::required(
                "lucene",
                "A search query is required",
            )]));
        }
        let mut errors = Vec::new();
        if page_index < 0 {
            errors.push(ValidationError::invalid(
                "pageIndex",
                "pageIndex must not be negative",
            ));
        }
        if page_size <= 0 {
            errors.push(ValidationError::invalid(
                "pageSize",
                "pageSize must be greater than zero",
            ));
        }
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }
        let (page_index, page_size) = (page_index as u64, page_size as u64);

        let (nodes, total) = self.search_nodes(query, page_index, page_size).await?;
        let items = self.services.map_nodes(&nodes).await?;
        let result = PagedResult::new(items, page_index as i64, page_size as i64, total)?;
        let links = &self.services.links;
        Ok(self
            .services
            .mapper()
            .paged(links.search_href())
            .echo("lucene", query)
            .with_link(rels::SEARCH, links.search())
            .build(result))
    }
}
