mod common;

use std::sync::Arc;

use common::{media_services, services_with};
use halcms_api::{ApiError, CommandStatus, ContentCommandHandler};
use halcms_hal::rels;
use halcms_model::ContentWrite;
use halcms_storage::{ContentStore, InMemorySearchProvider};
use halcms_types::{NodeId, ResourceKind};
use halcms_validation::ErrorCode;
use pretty_assertions::assert_eq;
use serde_json::json;

fn handler() -> (ContentCommandHandler, Arc<halcms_storage::InMemoryContentStore>) {
    let (services, store) = media_services();
    (ContentCommandHandler::new(services), store)
}

fn valid_write() -> ContentWrite {
    ContentWrite::new("New image", "testType")
        .under(456)
        .with_property("testproperty1", "value 1")
        .with_property("testProperty2", "value 2")
}

fn error_paths(err: &ApiError) -> Vec<String> {
    err.representations().into_iter().map(|r| r.log_ref).collect()
}

// ── Create ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_returns_created_with_location() {
    let (handler, store) = handler();
    let outcome = handler.create(valid_write()).await.unwrap();

    assert_eq!(outcome.status, CommandStatus::Created);
    assert_eq!(outcome.status.code(), 201);
    let resource = outcome.resource.unwrap();
    let self_href = resource.link(rels::SELF).unwrap().href.clone();
    assert_eq!(outcome.location.as_deref(), Some(self_href.as_str()));
    assert_eq!(
        resource.link(rels::PARENT).unwrap().href,
        "/umbraco/rest/v1/media/456"
    );

    let props = resource.properties.unwrap();
    assert_eq!(
        props.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["TestProperty1", "testProperty2"]
    );
    assert_eq!(store.len().await, 11);
}

#[tokio::test]
async fn create_with_empty_alias_and_name() {
    let (handler, store) = handler();
    let err = handler.create(ContentWrite::default()).await.unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(
        error_paths(&err),
        vec!["content.contentTypeAlias", "content.name"]
    );
    assert_eq!(store.len().await, 10);
}

#[tokio::test]
async fn create_with_unknown_property() {
    let (handler, _) = handler();
    let err = handler
        .create(valid_write().with_property("thisDoesntExist", "x"))
        .await
        .unwrap_err();
    assert_eq!(error_paths(&err), vec!["content.properties.thisDoesntExist"]);
    assert_eq!(err.representations()[0].error_code, "PropertyNotFound");
}

#[tokio::test]
async fn create_with_empty_required_property() {
    let (handler, _) = handler();
    let write = ContentWrite::new("n", "testType")
        .with_property("TestProperty1", "")
        .with_property("testProperty2", "value 2");
    let err = handler.create(write).await.unwrap_err();
    match &err {
        ApiError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field_path, "content.properties.TestProperty1.value");
            assert_eq!(errors[0].error_code, ErrorCode::Required);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_with_unknown_content_type_is_not_found() {
    let (handler, _) = handler();
    let err = handler
        .create(ContentWrite::new("n", "noSuchType"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(error_paths(&err), vec!["content.contentTypeAlias"]);
}

#[tokio::test]
async fn unknown_content_type_wins_over_missing_name() {
    let (handler, store) = handler();
    let before = store.len().await;
    let err = handler
        .create(ContentWrite::new("", "noSuchType"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(error_paths(&err), vec!["content.contentTypeAlias"]);
    assert_eq!(store.len().await, before);
}

#[tokio::test]
async fn create_under_missing_parent_is_not_found() {
    let (handler, _) = handler();
    let err = handler.create(valid_write().under(5)).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(error_paths(&err), vec!["content.parentId"]);
}

// ── Update ───────────────────────────────────────────────────────

#[tokio::test]
async fn update_merges_properties() {
    let (handler, store) = handler();
    let write = ContentWrite::new("Renamed", "testType").with_property("TESTPROPERTY1", "new");
    let outcome = handler.update(NodeId::new(123), write).await.unwrap();
    assert_eq!(outcome.status, CommandStatus::Ok);
    assert!(outcome.location.is_none());

    let stored = store.get_by_id(NodeId::new(123)).await.unwrap().unwrap();
    assert_eq!(stored.name, "Renamed");
    assert_eq!(stored.parent_id, NodeId::new(456));
    assert_eq!(stored.property("TestProperty1"), Some(&json!("new")));
    assert_eq!(stored.property("testProperty2"), Some(&json!("value 2")));
    assert_eq!(stored.properties.len(), 2);
}

#[tokio::test]
async fn update_unknown_node_is_not_found() {
    let (handler, _) = handler();
    let err = handler
        .update(NodeId::new(4242), valid_write())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn update_validates_before_writing() {
    let (handler, store) = handler();
    let err = handler
        .update(NodeId::new(123), ContentWrite::new("", "testType"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    let stored = store.get_by_id(NodeId::new(123)).await.unwrap().unwrap();
    assert_eq!(stored.name, "Image");
}

// ── Delete ───────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_subtree() {
    let (handler, store) = handler();
    let outcome = handler.delete(NodeId::new(123)).await.unwrap();
    assert_eq!(outcome.status, CommandStatus::NoContent);
    assert!(outcome.resource.is_none());
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn delete_unknown_node_is_not_found() {
    let (handler, _) = handler();
    let err = handler.delete(NodeId::new(4242)).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
}

// ── Read-only kinds ──────────────────────────────────────────────

#[tokio::test]
async fn published_content_rejects_writes() {
    let store = common::fixture_store();
    let search = Arc::new(InMemorySearchProvider::new(store.clone()));
    let services = services_with(ResourceKind::PublishedContent, store.clone(), search);
    assert!(!services.writable);

    let handler = ContentCommandHandler::new(Arc::new(services));
    assert!(handler.create(valid_write()).await.is_err());
    assert!(handler.delete(NodeId::new(123)).await.is_err());
    assert_eq!(store.len().await, 10);
}
