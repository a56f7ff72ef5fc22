use halcms_server::{InMemoryBackend, ServerConfig};
use halcms_storage::ContentStore;
use halcms_types::ResourceKind;
use pretty_assertions::assert_eq;

#[test]
fn registry_covers_every_kind() {
    let registry = InMemoryBackend::demo()
        .registry(&ServerConfig::default())
        .unwrap();
    assert_eq!(registry.len(), 4);

    let published = registry.get(ResourceKind::PublishedContent).unwrap();
    assert!(!published.writable);
    assert_eq!(
        published.links.root_href(),
        "/umbraco/rest/v1/content/published"
    );
    assert!(registry.get(ResourceKind::Member).unwrap().writable);
}

#[test]
fn registry_follows_config() {
    let config = ServerConfig {
        base_path: "/cms/".into(),
        api_version: 2,
        default_page_size: 25,
        ..Default::default()
    };
    let registry = InMemoryBackend::default().registry(&config).unwrap();
    let media = registry.get(ResourceKind::Media).unwrap();
    assert_eq!(media.links.root_href(), "/cms/rest/v2/media");
    assert_eq!(media.default_page_size, 25);
}

#[test]
fn invalid_version_is_an_error() {
    let config = ServerConfig {
        api_version: 0,
        ..Default::default()
    };
    assert!(InMemoryBackend::default().registry(&config).is_err());
}

#[tokio::test]
async fn published_content_shares_the_content_store() {
    let backend = InMemoryBackend::demo();
    let registry = backend.registry(&ServerConfig::default()).unwrap();
    let content = registry.get(ResourceKind::Content).unwrap();
    let published = registry.get(ResourceKind::PublishedContent).unwrap();
    let a = content.content.get_root().await.unwrap();
    let b = published.content.get_root().await.unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 1);
}
