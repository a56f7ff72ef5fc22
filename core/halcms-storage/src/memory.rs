//! In-memory collaborators.
//!
//! Backed by `tokio::sync::RwLock`-guarded maps. Nodes are kept in id order,
//! which is also the order `get_by_ids` returns them in.

use async_trait::async_trait;
use halcms_model::{aliases_match, ContentNode, ContentTypeDefinition};
use halcms_types::NodeId;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::store::{ContentStore, ContentTypeStore, NewNode, Page, PageQuery, SortDirection};

#[derive(Debug)]
struct NodeTable {
    nodes: BTreeMap<NodeId, ContentNode>,
    next_id: i32,
}

impl NodeTable {
    fn children_of(&self, id: NodeId) -> Vec<ContentNode> {
        let mut children: Vec<ContentNode> = self
            .nodes
            .values()
            .filter(|n| n.parent_id == id)
            .cloned()
            .collect();
        children.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.id.cmp(&b.id)));
        children
    }

    /// Pre-order walk below `id`, children in sort order.
    fn descendants_of(&self, id: NodeId) -> Vec<ContentNode> {
        let mut out = Vec::new();
        let mut stack: Vec<ContentNode> = self.children_of(id).into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            stack.extend(self.children_of(node.id).into_iter().rev());
            out.push(node);
        }
        out
    }
}

/// A content store held entirely in memory.
#[derive(Debug)]
pub struct InMemoryContentStore {
    table: RwLock<NodeTable>,
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::with_nodes(Vec::new())
    }

    /// Seeds the store. New ids continue after the largest seeded id.
    pub fn with_nodes(nodes: impl IntoIterator<Item = ContentNode>) -> Self {
        let nodes: BTreeMap<NodeId, ContentNode> = nodes.into_iter().map(|n| (n.id, n)).collect();
        let next_id = nodes.keys().map(|id| id.get()).max().unwrap_or(1000).max(1000) + 1;
        Self {
            table: RwLock::new(NodeTable { nodes, next_id }),
        }
    }

    /// Snapshot of every node, in id order.
    pub async fn all_nodes(&self) -> Vec<ContentNode> {
        self.table.read().await.nodes.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.nodes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.nodes.is_empty()
    }
}

fn compare_by(order_by: &str, a: &ContentNode, b: &ContentNode) -> Ordering {
    let primary = match order_by.to_ascii_lowercase().as_str() {
        "name" => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        "id" => a.id.cmp(&b.id),
        "contenttypealias" => a.content_type_alias.cmp(&b.content_type_alias),
        _ => a.sort_order.cmp(&b.sort_order),
    };
    primary.then(a.id.cmp(&b.id))
}

fn apply_page(mut nodes: Vec<ContentNode>, query: &PageQuery, sort: bool) -> Page<ContentNode> {
    if let Some(filter) = query.filter.as_deref().filter(|f| !f.trim().is_empty()) {
        let needle = filter.to_lowercase();
        nodes.retain(|n| n.name.to_lowercase().contains(&needle));
    }
    if sort {
        nodes.sort_by(|a, b| {
            let ord = compare_by(&query.order_by, a, b);
            match query.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    let total = nodes.len() as i64;
    let skip = usize::try_from(query.skip()).unwrap_or(usize::MAX);
    let take = usize::try_from(query.page_size).unwrap_or(usize::MAX);
    let items = nodes.into_iter().skip(skip).take(take).collect();
    Page::new(items, total)
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn get_by_id(&self, id: NodeId) -> StorageResult<Option<ContentNode>> {
        Ok(self.table.read().await.nodes.get(&id).cloned())
    }

    async fn get_by_ids(&self, ids: &[NodeId]) -> StorageResult<Vec<ContentNode>> {
        let table = self.table.read().await;
        Ok(table
            .nodes
            .values()
            .filter(|n| ids.contains(&n.id))
            .cloned()
            .collect())
    }

    async fn get_root(&self) -> StorageResult<Vec<ContentNode>> {
        Ok(self.table.read().await.children_of(NodeId::ROOT))
    }

    async fn get_children(&self, id: NodeId) -> StorageResult<Vec<ContentNode>> {
        Ok(self.table.read().await.children_of(id))
    }

    async fn has_children(&self, id: NodeId) -> StorageResult<bool> {
        Ok(self
            .table
            .read()
            .await
            .nodes
            .values()
            .any(|n| n.parent_id == id))
    }

    async fn get_paged_children(
        &self,
        id: NodeId,
        query: &PageQuery,
    ) -> StorageResult<Page<ContentNode>> {
        let children = self.table.read().await.children_of(id);
        Ok(apply_page(children, query, true))
    }

    async fn get_paged_descendants(
        &self,
        id: NodeId,
        query: &PageQuery,
    ) -> StorageResult<Page<ContentNode>> {
        let descendants = self.table.read().await.descendants_of(id);
        Ok(apply_page(descendants, query, false))
    }

    async fn create(&self, node: NewNode) -> StorageResult<ContentNode> {
        let mut table = self.table.write().await;
        if !node.parent_id.is_root() && !table.nodes.contains_key(&node.parent_id) {
            return Err(StorageError::NotFound(format!("parent node {}", node.parent_id)));
        }
        let id = NodeId::new(table.next_id);
        table.next_id += 1;
        let sort_order = table
            .nodes
            .values()
            .filter(|n| n.parent_id == node.parent_id)
            .count() as i32;
        let created = ContentNode {
            id,
            parent_id: node.parent_id,
            name: node.name,
            content_type_alias: node.content_type_alias,
            template_id: node.template_id,
            sort_order,
            properties: node.properties,
        };
        table.nodes.insert(id, created.clone());
        debug!("Created node {} under {}", id, created.parent_id);
        Ok(created)
    }

    async fn update(&self, node: ContentNode) -> StorageResult<ContentNode> {
        let mut table = self.table.write().await;
        match table.nodes.get_mut(&node.id) {
            Some(existing) => {
                *existing = node.clone();
                Ok(node)
            }
            None => Err(StorageError::NotFound(format!("node {}", node.id))),
        }
    }

    async fn delete(&self, id: NodeId) -> StorageResult<()> {
        let mut table = self.table.write().await;
        if !table.nodes.contains_key(&id) {
            return Err(StorageError::NotFound(format!("node {id}")));
        }
        let doomed: Vec<NodeId> = table.descendants_of(id).iter().map(|n| n.id).collect();
        for child in doomed {
            table.nodes.remove(&child);
        }
        table.nodes.remove(&id);
        debug!("Deleted node {} and its descendants", id);
        Ok(())
    }
}

/// Content types held in memory, looked up case-insensitively.
#[derive(Debug, Default)]
pub struct InMemoryContentTypeStore {
    types: RwLock<HashMap<String, ContentTypeDefinition>>,
}

impl InMemoryContentTypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types(types: impl IntoIterator<Item = ContentTypeDefinition>) -> Self {
        let types = types
            .into_iter()
            .map(|t| (t.alias.to_lowercase(), t))
            .collect();
        Self {
            types: RwLock::new(types),
        }
    }

    /// Adds or replaces a content type.
    pub async fn insert(&self, definition: ContentTypeDefinition) {
        self.types
            .write()
            .await
            .insert(definition.alias.to_lowercase(), definition);
    }
}

#[async_trait]
impl ContentTypeStore for InMemoryContentTypeStore {
    async fn get_by_alias(&self, alias: &str) -> StorageResult<Option<ContentTypeDefinition>> {
        let types = self.types.read().await;
        if let Some(found) = types.get(&alias.to_lowercase()) {
            return Ok(Some(found.clone()));
        }
        Ok(types.values().find(|t| aliases_match(&t.alias, alias)).cloned())
    }
}
