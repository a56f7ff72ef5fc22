use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A required property has no value.
    Required,
    /// A value failed its editor's format checks.
    Invalid,
    /// The property is not declared by the content type.
    PropertyNotFound,
    /// A top-level field is missing, or names something that does not exist.
    MissingField,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Required => "Required",
            ErrorCode::Invalid => "Invalid",
            ErrorCode::PropertyNotFound => "PropertyNotFound",
            ErrorCode::MissingField => "MissingField",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-scoped problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Dotted path, e.g. `content.properties.title.value`.
    pub field_path: String,
    pub error_code: ErrorCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        field_path: impl Into<String>,
        error_code: ErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            error_code,
            message: message.into(),
        }
    }

    pub fn required(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field_path, ErrorCode::Required, message)
    }

    pub fn invalid(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field_path, ErrorCode::Invalid, message)
    }

    pub fn missing_field(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field_path, ErrorCode::MissingField, message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.field_path, self.error_code, self.message)
    }
}

/// Field paths used in validation errors.
pub mod paths {
    pub const CONTENT_TYPE_ALIAS: &str = "content.contentTypeAlias";
    pub const NAME: &str = "content.name";

    /// `content.properties.{alias}`
    pub fn property(alias: &str) -> String {
        format!("content.properties.{alias}")
    }

    /// `content.properties.{alias}.value`
    pub fn property_value(alias: &str) -> String {
        format!("content.properties.{alias}.value")
    }
}
