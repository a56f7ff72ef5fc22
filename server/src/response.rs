//! HAL responses and the error envelope.

use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use halcms_api::{ApiError, CommandOutcome};
use halcms_hal::{error_envelope, Link, Resource, HAL_JSON};
use tracing::error;

/// A successful response with an optional `application/hal+json` body.
#[derive(Debug)]
pub struct HalResponse {
    status: StatusCode,
    location: Option<String>,
    body: Option<Resource>,
}

impl HalResponse {
    pub fn ok(resource: Resource) -> Self {
        Self {
            status: StatusCode::OK,
            location: None,
            body: Some(resource),
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl From<CommandOutcome> for HalResponse {
    fn from(outcome: CommandOutcome) -> Self {
        Self {
            status: StatusCode::from_u16(outcome.status.code()).unwrap_or(StatusCode::OK),
            location: outcome.location,
            body: outcome.resource,
        }
    }
}

impl IntoResponse for HalResponse {
    fn into_response(self) -> Response {
        let mut response = match self.body {
            Some(body) => match serde_json::to_vec(&body) {
                Ok(bytes) => (self.status, [(CONTENT_TYPE, HAL_JSON)], bytes).into_response(),
                Err(e) => {
                    error!("Failed to encode response: {}", e);
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
            },
            None => self.status.into_response(),
        };
        if let Some(location) = self.location {
            match HeaderValue::from_str(&location) {
                Ok(value) => {
                    response.headers_mut().insert(LOCATION, value);
                }
                Err(e) => error!("Invalid Location header {:?}: {}", location, e),
            }
        }
        response
    }
}

/// A failed request, rendered as an error envelope rooted at `root`.
#[derive(Debug)]
pub struct Failure {
    root: Link,
    error: ApiError,
}

impl Failure {
    pub fn new(root: Link, error: ApiError) -> Self {
        Self { root, error }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let envelope = error_envelope(self.root, self.error.representations());
        HalResponse::ok(envelope).with_status(status).into_response()
    }
}
