//! Shared fixtures for handler tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use halcms_api::KindServices;
use halcms_hal::LinkTemplate;
use halcms_model::{ContentNode, ContentTypeDefinition, EditorRegistry, PropertyDefinition};
use halcms_storage::{
    InMemoryContentStore, InMemoryContentTypeStore, InMemorySearchProvider, SearchCriteria,
    SearchHits, SearchProvider, StorageResult,
};
use halcms_types::{ApiVersion, NodeId, ResourceKind};

pub fn test_type() -> ContentTypeDefinition {
    ContentTypeDefinition::new("testType")
        .with_property(PropertyDefinition::new("TestProperty1", "textbox").required())
        .with_property(PropertyDefinition::new("testProperty2", "textarea"))
}

pub fn folder_type() -> ContentTypeDefinition {
    ContentTypeDefinition::new("folder")
}

/// Two top-level nodes; `123` sits below `456` and has six children.
pub fn fixture_nodes() -> Vec<ContentNode> {
    let mut nodes = vec![
        ContentNode::new(456, -1, "Folder", "folder"),
        ContentNode::new(100, -1, "Logo", "testType")
            .with_sort_order(1)
            .with_property("TestProperty1", "logo"),
        ContentNode::new(123, 456, "Image", "testType")
            .with_property("testProperty2", "value 2")
            .with_property("testproperty1", "value 1"),
        ContentNode::new(789, 456, "Latest news", "testType")
            .with_sort_order(1)
            .with_property("TestProperty1", "news"),
    ];
    for (i, name) in ["f", "e", "d", "c", "b", "a"].iter().enumerate() {
        nodes.push(
            ContentNode::new(201 + i as i32, 123, *name, "testType").with_sort_order(i as i32),
        );
    }
    nodes
}

pub fn fixture_store() -> Arc<InMemoryContentStore> {
    Arc::new(InMemoryContentStore::with_nodes(fixture_nodes()))
}

pub fn services_with(
    kind: ResourceKind,
    store: Arc<InMemoryContentStore>,
    search: Arc<dyn SearchProvider>,
) -> KindServices {
    KindServices::new(
        LinkTemplate::new(kind, ApiVersion::V1),
        store,
        Arc::new(InMemoryContentTypeStore::with_types(vec![
            test_type(),
            folder_type(),
        ])),
        search,
        Arc::new(EditorRegistry::with_defaults()),
    )
}

/// Media services over the fixture store with the in-memory search provider.
pub fn media_services() -> (Arc<KindServices>, Arc<InMemoryContentStore>) {
    let store = fixture_store();
    let search = Arc::new(InMemorySearchProvider::new(store.clone()));
    (
        Arc::new(services_with(ResourceKind::Media, store.clone(), search)),
        store,
    )
}

/// Returns canned hits and records the criteria it was called with.
#[derive(Default)]
pub struct FixedSearch {
    pub ids: Vec<i32>,
    pub total: i64,
    pub calls: Mutex<Vec<SearchCriteria>>,
}

impl FixedSearch {
    pub fn new(ids: Vec<i32>, total: i64) -> Self {
        Self {
            ids,
            total,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn last_call(&self) -> Option<SearchCriteria> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SearchProvider for FixedSearch {
    async fn search(&self, criteria: &SearchCriteria) -> StorageResult<SearchHits> {
        self.calls.lock().unwrap().push(criteria.clone());
        Ok(SearchHits {
            ids: self
                .ids
                .iter()
                .copied()
                .map(NodeId::new)
                .take(criteria.max_results)
                .collect(),
            total: self.total,
        })
    }
}
