use std::sync::Arc;

use halcms_model::{
    is_empty_value, ContentTypeDefinition, ContentWrite, EditorRegistry, PropertyBag,
};
use halcms_storage::{ContentTypeStore, StorageResult};
use tracing::debug;

use crate::error::{paths, ErrorCode, ValidationError};

/// Outcome of validating one write.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
    schema: Option<ContentTypeDefinition>,
    schema_missing: bool,
    properties: PropertyBag,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// The resolved content type, when the alias resolved.
    pub fn schema(&self) -> Option<&ContentTypeDefinition> {
        self.schema.as_ref()
    }

    /// True when a non-empty alias did not resolve. The alias error is
    /// then the only error in the report.
    pub fn schema_missing(&self) -> bool {
        self.schema_missing
    }

    /// Incoming properties with keys rewritten to schema casing. Undeclared
    /// keys are dropped; only meaningful when the report is valid.
    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    pub fn into_parts(self) -> (Option<ContentTypeDefinition>, PropertyBag) {
        (self.schema, self.properties)
    }
}

/// Validates content writes against their content type.
#[derive(Clone)]
pub struct ValidationPipeline {
    content_types: Arc<dyn ContentTypeStore>,
    editors: Arc<EditorRegistry>,
}

impl ValidationPipeline {
    pub fn new(content_types: Arc<dyn ContentTypeStore>, editors: Arc<EditorRegistry>) -> Self {
        Self {
            content_types,
            editors,
        }
    }

    /// Runs every stage. Errors come out structural first, then existence
    /// and per-property. An alias that does not resolve short-circuits: the
    /// report then holds that single error and nothing else.
    pub async fn validate(&self, write: &ContentWrite) -> StorageResult<ValidationReport> {
        let mut report = ValidationReport::default();
        let alias = write.content_type_alias.trim();

        if alias.is_empty() {
            report.errors.push(ValidationError::missing_field(
                paths::CONTENT_TYPE_ALIAS,
                "Content type alias is required",
            ));
        }
        if write.name.trim().is_empty() {
            report
                .errors
                .push(ValidationError::missing_field(paths::NAME, "Name is required"));
        }
        if alias.is_empty() {
            return Ok(report);
        }

        let Some(schema) = self.content_types.get_by_alias(alias).await? else {
            debug!("Content type {} not found", alias);
            report.schema_missing = true;
            report.errors = vec![ValidationError::missing_field(
                paths::CONTENT_TYPE_ALIAS,
                format!("Content type '{alias}' was not found"),
            )];
            return Ok(report);
        };

        let mut matched = Vec::new();
        for (key, value) in &write.properties {
            match schema.find_property(key) {
                Some(definition) => matched.push((definition, value)),
                None => report.errors.push(ValidationError::new(
                    paths::property(key),
                    ErrorCode::PropertyNotFound,
                    format!(
                        "Property '{key}' is not defined on content type '{}'",
                        schema.alias
                    ),
                )),
            }
        }

        for (definition, value) in matched {
            let editor = self.editors.get(&definition.editor_alias);
            if editor.is_none() {
                debug!(
                    "No editor registered for {}, checking {} for presence only",
                    definition.editor_alias, definition.alias
                );
            }
            let required = definition.required || editor.is_some_and(|e| e.is_required());
            let path = paths::property_value(&definition.alias);

            if is_empty_value(value) {
                if required {
                    report.errors.push(ValidationError::required(
                        path,
                        format!("Property '{}' is required", definition.alias),
                    ));
                }
            } else if let Some(editor) = editor {
                for violation in editor.validate(value, definition) {
                    report
                        .errors
                        .push(ValidationError::invalid(path.clone(), violation.message));
                }
            }
            report
                .properties
                .insert(definition.alias.clone(), value.clone());
        }

        report.schema = Some(schema);
        Ok(report)
    }
}

impl std::fmt::Debug for ValidationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationPipeline")
            .field("editors", &self.editors)
            .finish_non_exhaustive()
    }
}
