//! Write operations.
//!
//! Each command makes its external calls one after another with no
//! transaction around them. Validation failures never reach the store.

use std::sync::Arc;

use halcms_hal::{rels, Resource};
use halcms_model::{aliases_match, ContentNode, ContentWrite};
use halcms_storage::{NewNode, StorageError};
use halcms_types::NodeId;
use halcms_validation::{ValidationError, ValidationReport};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::services::KindServices;

/// HTTP-level status of a successful command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Created,
    Ok,
    NoContent,
}

impl CommandStatus {
    pub const fn code(&self) -> u16 {
        match self {
            CommandStatus::Created => 201,
            CommandStatus::Ok => 200,
            CommandStatus::NoContent => 204,
        }
    }
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub status: CommandStatus,
    pub resource: Option<Resource>,
    /// Set on create: the new node's `self` href.
    pub location: Option<String>,
}

/// Turns a failed report into the matching fault.
///
/// An unresolvable content type is a 404 carrying that single error; anything
/// else is a 400.
fn reject(report: ValidationReport) -> ApiError {
    if report.schema_missing() {
        let mut errors = report.into_errors();
        match errors.pop() {
            Some(error) => ApiError::NotFound(error),
            None => ApiError::Validation(Vec::new()),
        }
    } else {
        ApiError::Validation(report.into_errors())
    }
}

/// Serves the write routes of one kind.
#[derive(Debug, Clone)]
pub struct ContentCommandHandler {
    services: Arc<KindServices>,
}

impl ContentCommandHandler {
    pub fn new(services: Arc<KindServices>) -> Self {
        Self { services }
    }

    fn ensure_writable(&self) -> ApiResult<()> {
        if self.services.writable {
            Ok(())
        } else {
            Err(ApiError::NotFound(ValidationError::missing_field(
                "content",
                format!("{} cannot be modified", self.services.kind),
            )))
        }
    }

    async fn validate(&self, write: &ContentWrite) -> ApiResult<ValidationReport> {
        let report = self.services.pipeline().validate(write).await?;
        if report.is_valid() {
            Ok(report)
        } else {
            debug!(
                "Rejected {} write with {} error(s)",
                self.services.kind,
                report.errors().len()
            );
            Err(reject(report))
        }
    }

    /// Validates, persists and returns `201` with a `Location`.
    pub async fn create(&self, write: ContentWrite) -> ApiResult<CommandOutcome> {
        self.ensure_writable()?;
        let report = self.validate(&write).await?;
        let (schema, properties) = report.into_parts();
        let content_type_alias = schema
            .map(|s| s.alias)
            .unwrap_or(write.content_type_alias);

        let new_node = NewNode {
            parent_id: write.parent_id,
            name: write.name,
            content_type_alias,
            template_id: write.template_id,
            properties,
        };
        let created = self
            .services
            .content
            .create(new_node)
            .await
            .map_err(|e| match e {
                StorageError::NotFound(what) => ApiError::NotFound(ValidationError::missing_field(
                    "content.parentId",
                    format!("{what} was not found"),
                )),
                other => other.into(),
            })?;
        info!("Created {} node {}", self.services.kind, created.id);

        let resource = self.services.map_node(&created).await?;
        let location = resource.link(rels::SELF).map(|l| l.href.clone());
        Ok(CommandOutcome {
            status: CommandStatus::Created,
            resource: Some(resource),
            location,
        })
    }

    /// Applies a write to an existing node. Properties not in the write keep
    /// their stored values; the node stays under its current parent.
    pub async fn update(&self, id: NodeId, write: ContentWrite) -> ApiResult<CommandOutcome> {
        self.ensure_writable()?;
        let existing = self
            .services
            .content
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::node_not_found(id))?;
        let report = self.validate(&write).await?;
        let (schema, properties) = report.into_parts();

        let mut node = ContentNode {
            name: write.name,
            content_type_alias: schema
                .map(|s| s.alias)
                .unwrap_or(write.content_type_alias),
            template_id: write.template_id.or(existing.template_id),
            ..existing
        };
        for (alias, value) in properties {
            node.properties.retain(|key, _| !aliases_match(key, &alias));
            node.properties.insert(alias, value);
        }

        let updated = self.services.content.update(node).await?;
        info!("Updated {} node {}", self.services.kind, id);
        let resource = self.services.map_node(&updated).await?;
        Ok(CommandOutcome {
            status: CommandStatus::Ok,
            resource: Some(resource),
            location: None,
        })
    }

    /// Removes a node and everything below it.
    pub async fn delete(&self, id: NodeId) -> ApiResult<CommandOutcome> {
        self.ensure_writable()?;
        if self.services.content.get_by_id(id).await?.is_none() {
            return Err(ApiError::node_not_found(id));
        }
        self.services.content.delete(id).await?;
        info!("Deleted {} node {}", self.services.kind, id);
        Ok(CommandOutcome {
            status: CommandStatus::NoContent,
            resource: None,
            location: None,
        })
    }
}
