use halcms_types::NodeId;
use serde::{Deserialize, Deserializer, Serialize};

use crate::node::PropertyBag;

/// Payload of a create or update request.
///
/// Missing or `null` string fields decode as empty strings so that the
/// validation pipeline, not the JSON decoder, reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentWrite {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content_type_alias: String,
    #[serde(default)]
    pub parent_id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i32>,
    #[serde(default)]
    pub properties: PropertyBag,
}

impl ContentWrite {
    pub fn new(name: impl Into<String>, content_type_alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type_alias: content_type_alias.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn under(mut self, parent_id: impl Into<NodeId>) -> Self {
        self.parent_id = parent_id.into();
        self
    }

    #[must_use]
    pub fn with_template(mut self, template_id: i32) -> Self {
        self.template_id = Some(template_id);
        self
    }

    #[must_use]
    pub fn with_property(
        mut self,
        alias: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.properties.insert(alias.into(), value.into());
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
