use halcms_types::NodeId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content_type::aliases_match;

/// Ordered alias → raw value mapping.
pub type PropertyBag = IndexMap<String, Value>;

/// A node stored by the content persistence service.
///
/// The `properties` bag keeps whatever order the store returned; mapping to
/// the wire reorders it by the node's content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    pub id: NodeId,
    pub parent_id: NodeId,
    pub name: String,
    pub content_type_alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i32>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub properties: PropertyBag,
}

impl ContentNode {
    pub fn new(
        id: impl Into<NodeId>,
        parent_id: impl Into<NodeId>,
        name: impl Into<String>,
        content_type_alias: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.into(),
            name: name.into(),
            content_type_alias: content_type_alias.into(),
            template_id: None,
            sort_order: 0,
            properties: PropertyBag::new(),
        }
    }

    /// Adds or replaces a property value.
    #[must_use]
    pub fn with_property(mut self, alias: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(alias.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_template(mut self, template_id: i32) -> Self {
        self.template_id = Some(template_id);
        self
    }

    #[must_use]
    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// True when the node sits directly under the tree root.
    pub fn is_root_level(&self) -> bool {
        self.parent_id.is_root()
    }

    /// Looks up a property value by alias, ignoring case.
    pub fn property(&self, alias: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(key, _)| aliases_match(key, alias))
            .map(|(_, value)| value)
    }

    /// Extract a string property value.
    pub fn property_str(&self, alias: &str) -> Option<&str> {
        self.property(alias).and_then(|v| v.as_str())
    }
}

/// Returns true for values a required property must not hold: `null`, an
/// empty or whitespace-only string, or an empty array/object.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
