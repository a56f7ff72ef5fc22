//! Read operations.

use std::sync::Arc;

use halcms_hal::{rels, PagedResult, Resource};
use halcms_storage::{PageQuery, SortDirection};
use halcms_types::NodeId;
use halcms_validation::ValidationError;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::search::SearchAdapter;
use crate::services::KindServices;

/// Query string accepted by listing routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page_index: Option<i64>,
    pub page_size: Option<i64>,
    pub order_by: Option<String>,
    /// `asc` or `desc`.
    pub direction: Option<String>,
    pub filter: Option<String>,
    pub lucene: Option<String>,
}

impl ListQuery {
    pub fn page(page_index: i64, page_size: i64) -> Self {
        Self {
            page_index: Some(page_index),
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    /// Whether any paging, sorting or filtering parameter was supplied.
    pub fn is_paged(&self) -> bool {
        self.page_index.is_some()
            || self.page_size.is_some()
            || self.order_by.is_some()
            || self.direction.is_some()
            || self.filter.is_some()
    }

    /// Checks paging parameters, collecting every problem.
    pub fn paging(&self, default_page_size: u64) -> ApiResult<(u64, u64)> {
        let mut errors = Vec::new();
        let page_index = match self.page_index {
            None => 0,
            Some(i) => u64::try_from(i).unwrap_or_else(|_| {
                errors.push(ValidationError::invalid(
                    "pageIndex",
                    "pageIndex must not be negative",
                ));
                0
            }),
        };
        let page_size = match self.page_size {
            None => default_page_size,
            Some(s) if s > 0 => s as u64,
            Some(_) => {
                errors.push(ValidationError::invalid(
                    "pageSize",
                    "pageSize must be greater than zero",
                ));
                default_page_size
            }
        };
        if errors.is_empty() {
            Ok((page_index, page_size))
        } else {
            Err(ApiError::Validation(errors))
        }
    }

    fn sort_direction(&self) -> ApiResult<SortDirection> {
        match self.direction.as_deref() {
            None => Ok(SortDirection::default()),
            Some(raw) => raw
                .parse()
                .map_err(|_| ApiError::invalid("direction", "direction must be asc or desc")),
        }
    }

    fn filter(&self) -> Option<&str> {
        self.filter.as_deref().filter(|f| !f.trim().is_empty())
    }
}

/// Serves the read routes of one kind.
#[derive(Debug, Clone)]
pub struct ContentQueryHandler {
    services: Arc<KindServices>,
}

impl ContentQueryHandler {
    pub fn new(services: Arc<KindServices>) -> Self {
        Self { services }
    }

    async fn fetch(&self, id: NodeId) -> ApiResult<halcms_model::ContentNode> {
        self.services
            .content
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::node_not_found(id))
    }

    /// Top-level nodes, unpaged.
    pub async fn root(&self) -> ApiResult<Resource> {
        let nodes = self.services.content.get_root().await?;
        let items = self.services.map_nodes(&nodes).await?;
        let links = &self.services.links;
        let mut envelope = self.services.mapper().map_collection(items, links.root_href());
        envelope.set_link(rels::SEARCH, links.search());
        Ok(envelope)
    }

    pub async fn get(&self, id: NodeId) -> ApiResult<Resource> {
        let node = self.fetch(id).await?;
        self.services.map_node(&node).await
    }

    /// Children in sort order; paged as soon as any list parameter is given.
    pub async fn children(&self, id: NodeId, query: &ListQuery) -> ApiResult<Resource> {
        if !id.is_root() {
            self.fetch(id).await?;
        }
        let href = self.services.links.children_href(id);

        if !query.is_paged() {
            let nodes = self.services.content.get_children(id).await?;
            let items = self.services.map_nodes(&nodes).await?;
            return Ok(self.services.mapper().map_collection(items, href));
        }

        let (page_index, page_size) = query.paging(self.services.default_page_size)?;
        let direction = query.sort_direction()?;
        let order_by = query
            .order_by
            .clone()
            .unwrap_or_else(|| PageQuery::DEFAULT_ORDER_BY.to_string());
        let mut page_query = PageQuery::new(page_index, page_size).ordered_by(&order_by, direction);
        if let Some(filter) = query.filter() {
            page_query = page_query.filtered(filter);
        }
        debug!("Paging children of {} with {:?}", id, page_query);

        let page = self
            .services
            .content
            .get_paged_children(id, &page_query)
            .await?;
        let items = self.services.map_nodes(&page.items).await?;
        let result = PagedResult::new(items, page_index as i64, page_size as i64, page.total)?;

        let mut builder = self.services.mapper().paged(href);
        if let Some(order_by) = &query.order_by {
            builder = builder
                .echo("orderBy", order_by.as_str())
                .echo("direction", direction.as_str());
        } else if query.direction.is_some() {
            builder = builder.echo("direction", direction.as_str());
        }
        Ok(builder.echo_opt("filter", query.filter()).build(result))
    }

    /// Every node below `id`, always paged.
    pub async fn descendants(&self, id: NodeId, query: &ListQuery) -> ApiResult<Resource> {
        if !id.is_root() {
            self.fetch(id).await?;
        }
        let (page_index, page_size) = query.paging(self.services.default_page_size)?;
        let page = self
            .services
            .content
            .get_paged_descendants(id, &PageQuery::new(page_index, page_size))
            .await?;
        let items = self.services.map_nodes(&page.items).await?;
        let result = PagedResult::new(items, page_index as i64, page_size as i64, page.total)?;
        Ok(self
            .services
            .mapper()
            .paged(self.services.links.descendants_href(id))
            .build(result))
    }

    /// Field descriptions for the node's content type.
    pub async fn meta(&self, id: NodeId) -> ApiResult<Resource> {
        let node = self.fetch(id).await?;
        let schema = self
            .services
            .content_types
            .get_by_alias(&node.content_type_alias)
            .await?;
        Ok(self.services.mapper().map_metadata(&node, schema.as_ref()))
    }

    pub async fn search(&self, query: &ListQuery) -> ApiResult<Resource> {
        let (page_index, page_size) = query.paging(self.services.default_page_size)?;
        SearchAdapter::new(self.services.clone())
            .search(
                query.lucene.as_deref().unwrap_or_default(),
                page_index as i64,
                page_size as i64,
            )
            .await
    }
}
