use std::collections::HashMap;
use std::sync::Arc;

use halcms_hal::{LinkTemplate, Resource, ResourceMapper};
use halcms_model::{ContentNode, ContentTypeDefinition, EditorRegistry};
use halcms_storage::{ContentStore, ContentTypeStore, SearchProvider};
use halcms_types::ResourceKind;
use halcms_validation::ValidationPipeline;

use crate::error::ApiResult;

/// Page size used when a paged request does not name one.
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// The collaborators serving one resource kind.
#[derive(Clone)]
pub struct KindServices {
    pub kind: ResourceKind,
    pub links: LinkTemplate,
    pub content: Arc<dyn ContentStore>,
    pub content_types: Arc<dyn ContentTypeStore>,
    pub search: Arc<dyn SearchProvider>,
    pub editors: Arc<EditorRegistry>,
    /// Whether create/update/delete are served.
    pub writable: bool,
    pub default_page_size: u64,
}

impl KindServices {
    /// Writability follows the kind; see [`ResourceKind::is_writable`].
    pub fn new(
        links: LinkTemplate,
        content: Arc<dyn ContentStore>,
        content_types: Arc<dyn ContentTypeStore>,
        search: Arc<dyn SearchProvider>,
        editors: Arc<EditorRegistry>,
    ) -> Self {
        let kind = links.kind();
        Self {
            kind,
            links,
            content,
            content_types,
            search,
            editors,
            writable: kind.is_writable(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    #[must_use]
    pub fn with_default_page_size(mut self, size: u64) -> Self {
        self.default_page_size = size.max(1);
        self
    }

    pub fn mapper(&self) -> ResourceMapper {
        ResourceMapper::new(self.links.clone())
    }

    pub fn pipeline(&self) -> ValidationPipeline {
        ValidationPipeline::new(self.content_types.clone(), self.editors.clone())
    }

    /// Maps one node, looking up its schema and whether it has children.
    pub async fn map_node(&self, node: &ContentNode) -> ApiResult<Resource> {
        let has_children = self.content.has_children(node.id).await?;
        let schema = self
            .content_types
            .get_by_alias(&node.content_type_alias)
            .await?;
        Ok(self.mapper().map_node(node, has_children, schema.as_ref()))
    }

    /// Maps nodes in order. Each content type is looked up once.
    pub async fn map_nodes(&self, nodes: &[ContentNode]) -> ApiResult<Vec<Resource>> {
        let mapper = self.mapper();
        let mut schemas: HashMap<String, Option<ContentTypeDefinition>> = HashMap::new();
        let mut resources = Vec::with_capacity(nodes.len());
        for node in nodes {
            let key = node.content_type_alias.to_lowercase();
            if !schemas.contains_key(&key) {
                let schema = self
                    .content_types
                    .get_by_alias(&node.content_type_alias)
                    .await?;
                schemas.insert(key.clone(), schema);
            }
            let has_children = self.content.has_children(node.id).await?;
            let schema = schemas.get(&key).and_then(Option::as_ref);
            resources.push(mapper.map_node(node, has_children, schema));
        }
        Ok(resources)
    }
}

impl std::fmt::Debug for KindServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KindServices")
            .field("kind", &self.kind)
            .field("links", &self.links)
            .field("writable", &self.writable)
            .field("default_page_size", &self.default_page_size)
            .finish_non_exhaustive()
    }
}

/// Capability records keyed by kind.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    services: HashMap<ResourceKind, Arc<KindServices>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, services: KindServices) -> Self {
        self.register(services);
        self
    }

    /// Adds or replaces the record for `services.kind`.
    pub fn register(&mut self, services: KindServices) {
        self.services.insert(services.kind, Arc::new(services));
    }

    pub fn get(&self, kind: ResourceKind) -> Option<Arc<KindServices>> {
        self.services.get(&kind).cloned()
    }

    /// Registered records in [`ResourceKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Arc<KindServices>> + '_ {
        ResourceKind::ALL
            .iter()
            .filter_map(|kind| self.services.get(kind).cloned())
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
