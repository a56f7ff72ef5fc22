//! HTTP surface of halcms.
//!
//! Mounts every registered resource kind under `{base}/rest/v{n}/{segment}`
//! and renders handler results as `application/hal+json`, including errors.

pub mod backend;
pub mod config;
mod response;
mod routes;

use axum::http::header::LOCATION;
use axum::http::{HeaderValue, Method};
use axum::Router;
use halcms_api::{ApiError, ServiceRegistry};
use halcms_hal::Link;
use halcms_validation::ValidationError;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use backend::InMemoryBackend;
pub use config::ServerConfig;
pub use response::{Failure, HalResponse};
pub use routes::kind_routes;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers([LOCATION]);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Builds the router for every kind in `registry`.
///
/// Unknown routes get a 404 error envelope rooted at the first registered
/// kind.
pub fn build_router(registry: &ServiceRegistry, config: &ServerConfig) -> Router {
    let mut router = Router::new();
    let mut fallback_root = Link::new("/");
    for (i, services) in registry.iter().enumerate() {
        if i == 0 {
            fallback_root = services.links.root();
        }
        router = router.merge(kind_routes(services));
    }

    router
        .fallback(move || {
            let root = fallback_root.clone();
            async move {
                Failure::new(
                    root,
                    ApiError::NotFound(ValidationError::missing_field(
                        "path",
                        "No resource matches the request path",
                    )),
                )
            }
        })
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
}
