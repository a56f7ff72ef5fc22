//! Error taxonomy for request handling.

use halcms_hal::{ErrorRepresentation, HalError};
use halcms_storage::StorageError;
use halcms_validation::{ErrorCode, ValidationError};
use thiserror::Error;
use tracing::error;

/// Result type for handler operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Every way a request can fail.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was understood but its content is invalid (400).
    #[error("validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),

    /// The addressed node, parent or content type does not exist (404).
    #[error("not found: {}", .0.message)]
    NotFound(ValidationError),

    /// The route exists but does not accept the request method (405).
    #[error("method not allowed: {}", .0.message)]
    MethodNotAllowed(ValidationError),

    /// A collaborator failed (500). The detail is logged, never returned.
    #[error("infrastructure error: {0}")]
    Infra(String),
}

impl ApiError {
    /// A 404 for a node id.
    pub fn node_not_found(id: impl std::fmt::Display) -> Self {
        ApiError::NotFound(ValidationError::missing_field(
            "id",
            format!("Node {id} was not found"),
        ))
    }

    /// A 405 for a method the addressed route does not serve.
    pub fn method_not_allowed(method: impl std::fmt::Display) -> Self {
        ApiError::MethodNotAllowed(ValidationError::invalid(
            "method",
            format!("Method {method} is not allowed on this resource"),
        ))
    }

    /// A 400 with a single error.
    pub fn invalid(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation(vec![ValidationError::invalid(field_path, message)])
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::MethodNotAllowed(_) => 405,
            ApiError::Infra(_) => 500,
        }
    }

    /// Wire form of the errors. Infrastructure faults collapse to a stable
    /// code with no detail.
    pub fn representations(&self) -> Vec<ErrorRepresentation> {
        fn represent(e: &ValidationError) -> ErrorRepresentation {
            ErrorRepresentation::new(&e.field_path, &e.message, e.error_code.as_str())
        }
        match self {
            ApiError::Validation(errors) => errors.iter().map(represent).collect(),
            ApiError::NotFound(e) | ApiError::MethodNotAllowed(e) => vec![represent(e)],
            ApiError::Infra(_) => vec![ErrorRepresentation::new(
                "server",
                "An internal error occurred",
                "InternalError",
            )],
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(what) => ApiError::NotFound(ValidationError::missing_field(
                "id",
                format!("{what} was not found"),
            )),
            StorageError::InvalidQuery(detail) => ApiError::Validation(vec![
                ValidationError::new("lucene", ErrorCode::Invalid, detail),
            ]),
            other => {
                error!("Storage failure: {}", other);
                ApiError::Infra(other.to_string())
            }
        }
    }
}

impl From<HalError> for ApiError {
    fn from(e: HalError) -> Self {
        error!("Failed to assemble resource: {}", e);
        ApiError::Infra(e.to_string())
    }
}
