//! Route handlers. One set per resource kind, each with its own
//! [`KindServices`] as state.

use std::future::Future;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::Method;
use axum::routing::get;
use axum::{Json, Router};
use halcms_api::{
    ApiError, ApiResult, ContentCommandHandler, ContentQueryHandler, KindServices, ListQuery,
};
use halcms_model::ContentWrite;
use halcms_types::NodeId;

use crate::response::{Failure, HalResponse};

type Services = State<Arc<KindServices>>;
type Reply = Result<HalResponse, Failure>;

async fn respond<F>(services: &KindServices, work: F) -> Reply
where
    F: Future<Output = ApiResult<HalResponse>>,
{
    work.await
        .map_err(|error| Failure::new(services.links.root(), error))
}

fn node_id(path: Result<Path<i32>, PathRejection>) -> ApiResult<NodeId> {
    path.map(|Path(id)| NodeId::new(id))
        .map_err(|e| ApiError::invalid("id", e.body_text()))
}

fn list_query(query: Result<Query<ListQuery>, QueryRejection>) -> ApiResult<ListQuery> {
    query
        .map(|Query(q)| q)
        .map_err(|e| ApiError::invalid("query", e.body_text()))
}

fn write_body(body: Result<Json<ContentWrite>, JsonRejection>) -> ApiResult<ContentWrite> {
    body.map(|Json(write)| write)
        .map_err(|e| ApiError::invalid("content", e.body_text()))
}

async fn list_root(State(services): Services) -> Reply {
    let queries = ContentQueryHandler::new(services.clone());
    respond(&services, async { queries.root().await.map(HalResponse::ok) }).await
}

async fn get_node(State(services): Services, id: Result<Path<i32>, PathRejection>) -> Reply {
    let queries = ContentQueryHandler::new(services.clone());
    respond(&services, async {
        queries.get(node_id(id)?).await.map(HalResponse::ok)
    })
    .await
}

async fn children(
    State(services): Services,
    id: Result<Path<i32>, PathRejection>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Reply {
    let queries = ContentQueryHandler::new(services.clone());
    respond(&services, async {
        let id = node_id(id)?;
        let query = list_query(query)?;
        queries.children(id, &query).await.map(HalResponse::ok)
    })
    .await
}

async fn descendants(
    State(services): Services,
    id: Result<Path<i32>, PathRejection>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Reply {
    let queries = ContentQueryHandler::new(services.clone());
    respond(&services, async {
        let id = node_id(id)?;
        let query = list_query(query)?;
        queries.descendants(id, &query).await.map(HalResponse::ok)
    })
    .await
}

async fn meta(State(services): Services, id: Result<Path<i32>, PathRejection>) -> Reply {
    let queries = ContentQueryHandler::new(services.clone());
    respond(&services, async {
        queries.meta(node_id(id)?).await.map(HalResponse::ok)
    })
    .await
}

async fn search(
    State(services): Services,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Reply {
    let queries = ContentQueryHandler::new(services.clone());
    respond(&services, async {
        let query = list_query(query)?;
        queries.search(&query).await.map(HalResponse::ok)
    })
    .await
}

async fn create(
    State(services): Services,
    body: Result<Json<ContentWrite>, JsonRejection>,
) -> Reply {
    let commands = ContentCommandHandler::new(services.clone());
    respond(&services, async {
        commands.create(write_body(body)?).await.map(HalResponse::from)
    })
    .await
}

async fn update(
    State(services): Services,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<ContentWrite>, JsonRejection>,
) -> Reply {
    let commands = ContentCommandHandler::new(services.clone());
    respond(&services, async {
        let id = node_id(id)?;
        let write = write_body(body)?;
        commands.update(id, write).await.map(HalResponse::from)
    })
    .await
}

async fn delete(State(services): Services, id: Result<Path<i32>, PathRejection>) -> Reply {
    let commands = ContentCommandHandler::new(services.clone());
    respond(&services, async {
        commands.delete(node_id(id)?).await.map(HalResponse::from)
    })
    .await
}

async fn method_not_allowed(State(services): Services, method: Method) -> Failure {
    Failure::new(
        services.links.root(),
        ApiError::method_not_allowed(method),
    )
}

/// Routes for one kind, mounted at its versioned root. Write methods are
/// only registered for writable kinds.
pub fn kind_routes(services: Arc<KindServices>) -> Router {
    let root = services.links.root_href().to_string();

    let mut collection = get(list_root);
    let mut item = get(get_node);
    if services.writable {
        collection = collection.post(create);
        item = item.put(update).delete(delete);
    }

    Router::new()
        .route(&root, collection)
        .route(&format!("{root}/search"), get(search))
        .route(&format!("{root}/{{id}}"), item)
        .route(&format!("{root}/{{id}}/children"), get(children))
        .route(&format!("{root}/{{id}}/descendants"), get(descendants))
        .route(&format!("{root}/{{id}}/meta"), get(meta))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(services)
}
