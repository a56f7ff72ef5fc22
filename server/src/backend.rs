//! In-memory collaborators wired into a [`ServiceRegistry`].

use std::sync::Arc;

use halcms_api::{KindServices, ServiceRegistry};
use halcms_hal::LinkTemplate;
use halcms_model::{ContentNode, ContentTypeDefinition, EditorRegistry, PropertyDefinition};
use halcms_storage::{InMemoryContentStore, InMemoryContentTypeStore, InMemorySearchProvider};
use halcms_types::ResourceKind;

use crate::config::ServerConfig;

/// One store per section of the tree, plus shared content types and editors.
///
/// Published content is served from the content store, read-only.
#[derive(Debug, Clone)]
pub struct InMemoryBackend {
    pub content: Arc<InMemoryContentStore>,
    pub media: Arc<InMemoryContentStore>,
    pub members: Arc<InMemoryContentStore>,
    pub content_types: Arc<InMemoryContentTypeStore>,
    pub editors: Arc<EditorRegistry>,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self {
            content: Arc::new(InMemoryContentStore::new()),
            media: Arc::new(InMemoryContentStore::new()),
            members: Arc::new(InMemoryContentStore::new()),
            content_types: Arc::new(InMemoryContentTypeStore::new()),
            editors: Arc::new(EditorRegistry::with_defaults()),
        }
    }
}

impl InMemoryBackend {
    /// A small site to browse when running the binary without a backend.
    pub fn demo() -> Self {
        let content_types = InMemoryContentTypeStore::with_types(vec![
            ContentTypeDefinition::new("homePage")
                .with_name("Home page")
                .with_property(
                    PropertyDefinition::new("title", "textbox")
                        .required()
                        .with_label("Title"),
                )
                .with_property(PropertyDefinition::new("bodyText", "textarea")),
            ContentTypeDefinition::new("article")
                .with_name("Article")
                .with_property(PropertyDefinition::new("title", "textbox").required())
                .with_property(PropertyDefinition::new("bodyText", "textarea"))
                .with_property(PropertyDefinition::new("featured", "boolean")),
            ContentTypeDefinition::new("folder").with_name("Folder"),
            ContentTypeDefinition::new("image")
                .with_name("Image")
                .with_property(PropertyDefinition::new("umbracoFile", "textbox").required())
                .with_property(PropertyDefinition::new("umbracoWidth", "integer"))
                .with_property(PropertyDefinition::new("umbracoHeight", "integer")),
            ContentTypeDefinition::new("member")
                .with_name("Member")
                .with_property(PropertyDefinition::new("email", "textbox").required()),
        ]);

        let content = InMemoryContentStore::with_nodes(vec![
            ContentNode::new(1050, -1, "Home", "homePage")
                .with_template(1)
                .with_property("title", "Welcome")
                .with_property("bodyText", "Hello from halcms"),
            ContentNode::new(1051, 1050, "News", "folder"),
            ContentNode::new(1052, 1051, "First post", "article")
                .with_property("title", "First post")
                .with_property("featured", true),
            ContentNode::new(1053, 1051, "Second post", "article")
                .with_sort_order(1)
                .with_property("title", "Second post"),
        ]);
        let media = InMemoryContentStore::with_nodes(vec![
            ContentNode::new(2000, -1, "Images", "folder"),
            ContentNode::new(2001, 2000, "Logo", "image")
                .with_property("umbracoFile", "/media/logo.png")
                .with_property("umbracoWidth", 320)
                .with_property("umbracoHeight", 120),
        ]);
        let members = InMemoryContentStore::with_nodes(vec![
            ContentNode::new(3000, -1, "Ada", "member").with_property("email", "ada@example.com"),
        ]);

        Self {
            content: Arc::new(content),
            media: Arc::new(media),
            members: Arc::new(members),
            content_types: Arc::new(content_types),
            editors: Arc::new(EditorRegistry::with_defaults()),
        }
    }

    fn store_for(&self, kind: ResourceKind) -> Arc<InMemoryContentStore> {
        match kind {
            ResourceKind::Content | ResourceKind::PublishedContent => self.content.clone(),
            ResourceKind::Media => self.media.clone(),
            ResourceKind::Member => self.members.clone(),
        }
    }

    /// Capability records for every kind, linked per `config`.
    pub fn registry(&self, config: &ServerConfig) -> halcms_types::Result<ServiceRegistry> {
        let version = config.api_version()?;
        let mut registry = ServiceRegistry::new();
        for kind in ResourceKind::ALL {
            let store = self.store_for(kind);
            let services = KindServices::new(
                LinkTemplate::with_base_path(kind, version, &config.base_path),
                store.clone(),
                self.content_types.clone(),
                Arc::new(InMemorySearchProvider::new(store)),
                self.editors.clone(),
            )
            .with_default_page_size(config.default_page_size);
            registry.register(services);
        }
        Ok(registry)
    }
}
