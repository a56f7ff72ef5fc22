//! Generic HAL resource.

use halcms_model::PropertyBag;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    /// Set when `href` is an RFC 6570 template.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub templated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    /// A concrete link.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            templated: false,
            title: None,
        }
    }

    /// A URI template.
    pub fn templated(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            templated: true,
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A relation holds either a single link or an array of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkValue {
    One(Link),
    Many(Vec<Link>),
}

impl LinkValue {
    /// The single link, if this relation is not an array.
    pub fn as_one(&self) -> Option<&Link> {
        match self {
            LinkValue::One(link) => Some(link),
            LinkValue::Many(_) => None,
        }
    }

    /// Every link in the relation.
    pub fn as_slice(&self) -> &[Link] {
        match self {
            LinkValue::One(link) => std::slice::from_ref(link),
            LinkValue::Many(links) => links,
        }
    }
}

/// A HAL resource.
///
/// `state` is flattened into the top level of the JSON object ahead of
/// `properties`, `_links` and `_embedded`; every map keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(flatten)]
    pub state: IndexMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyBag>,
    #[serde(rename = "_links", default, skip_serializing_if = "IndexMap::is_empty")]
    pub links: IndexMap<String, LinkValue>,
    #[serde(rename = "_embedded", default, skip_serializing_if = "IndexMap::is_empty")]
    pub embedded: IndexMap<String, Vec<Resource>>,
}

impl Resource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_state(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_state(key, value);
        self
    }

    pub fn set_state(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.state.insert(key.into(), value.into());
    }

    pub fn state(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }

    #[must_use]
    pub fn with_properties(mut self, properties: PropertyBag) -> Self {
        self.properties = Some(properties);
        self
    }

    #[must_use]
    pub fn with_link(mut self, rel: impl Into<String>, link: Link) -> Self {
        self.set_link(rel, link);
        self
    }

    /// Sets a single-link relation, replacing whatever was there.
    pub fn set_link(&mut self, rel: impl Into<String>, link: Link) {
        self.links.insert(rel.into(), LinkValue::One(link));
    }

    /// Sets an array relation. An empty array is still emitted.
    pub fn set_links(&mut self, rel: impl Into<String>, links: Vec<Link>) {
        self.links.insert(rel.into(), LinkValue::Many(links));
    }

    /// The single link for `rel`.
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.get(rel).and_then(LinkValue::as_one)
    }

    /// All links for `rel`, whether stored as one or many.
    pub fn links(&self, rel: &str) -> &[Link] {
        self.links.get(rel).map(LinkValue::as_slice).unwrap_or(&[])
    }

    pub fn has_link(&self, rel: &str) -> bool {
        self.links.contains_key(rel)
    }

    /// Sets the embedded list for `rel`.
    pub fn embed(&mut self, rel: impl Into<String>, resources: Vec<Resource>) {
        self.embedded.insert(rel.into(), resources);
    }

    pub fn embedded(&self, rel: &str) -> &[Resource] {
        self.embedded.get(rel).map(Vec::as_slice).unwrap_or(&[])
    }
}
