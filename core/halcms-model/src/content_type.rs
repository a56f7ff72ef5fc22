use serde::{Deserialize, Serialize};

/// Compares two property aliases the way the schema does: ignoring case.
pub fn aliases_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

/// Describes the properties a node of a given content type may carry.
///
/// The order of `properties` is the order properties appear on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeDefinition {
    pub alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
}

impl ContentTypeDefinition {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            name: None,
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    /// Finds a property definition by alias, ignoring case.
    pub fn find_property(&self, alias: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| aliases_match(&p.alias, alias))
    }

    /// Aliases in declaration order.
    pub fn property_aliases(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.alias.as_str())
    }
}

/// A single property slot on a content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub alias: String,
    /// Alias of the property editor that owns this property's format.
    pub editor_alias: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertyDefinition {
    pub fn new(alias: impl Into<String>, editor_alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            editor_alias: editor_alias.into(),
            required: false,
            label: None,
            description: None,
        }
    }

    /// Marks the property as mandatory.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
