//! Error envelope.
//!
//! Failures reuse the collection shape: `totalResults` is the error count and
//! each error is embedded under `errors` as `{logRef, message, errorCode}`.

use serde::{Deserialize, Serialize};

use crate::links::rels;
use crate::resource::{Link, Resource};

/// A single error as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRepresentation {
    /// Dotted path of the offending field, or a stable area name.
    pub log_ref: String,
    pub message: String,
    pub error_code: String,
}

impl ErrorRepresentation {
    pub fn new(
        log_ref: impl Into<String>,
        message: impl Into<String>,
        error_code: impl Into<String>,
    ) -> Self {
        Self {
            log_ref: log_ref.into(),
            message: message.into(),
            error_code: error_code.into(),
        }
    }

    fn into_resource(self) -> Resource {
        Resource::new()
            .with_state("logRef", self.log_ref)
            .with_state("message", self.message)
            .with_state("errorCode", self.error_code)
    }
}

/// Builds an error envelope carrying a `root` link.
pub fn error_envelope(
    root: Link,
    errors: impl IntoIterator<Item = ErrorRepresentation>,
) -> Resource {
    let embedded: Vec<Resource> = errors
        .into_iter()
        .map(ErrorRepresentation::into_resource)
        .collect();
    let mut envelope = Resource::new()
        .with_state("totalResults", embedded.len() as i64)
        .with_link(rels::ROOT, root);
    envelope.embed(rels::ERRORS, embedded);
    envelope
}
