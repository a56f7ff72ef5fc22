//! Resource kinds and API versions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of node a route exposes.
///
/// Each kind maps to a URL segment under the versioned REST root. Published
/// content lives below the content segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Content,
    Media,
    PublishedContent,
    Member,
}

impl ResourceKind {
    /// All kinds, in routing order.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Content,
        ResourceKind::Media,
        ResourceKind::PublishedContent,
        ResourceKind::Member,
    ];

    /// URL segment below `rest/v{n}/`.
    #[must_use]
    pub const fn segment(&self) -> &'static str {
        match self {
            ResourceKind::Content => "content",
            ResourceKind::Media => "media",
            ResourceKind::PublishedContent => "content/published",
            ResourceKind::Member => "members",
        }
    }

    /// Whether create/update/delete are exposed for this kind.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        !matches!(self, ResourceKind::PublishedContent)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Content => "content",
            ResourceKind::Media => "media",
            ResourceKind::PublishedContent => "published_content",
            ResourceKind::Member => "member",
        };
        f.write_str(name)
    }
}

impl FromStr for ResourceKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "content" => Ok(ResourceKind::Content),
            "media" => Ok(ResourceKind::Media),
            "published_content" | "published" => Ok(ResourceKind::PublishedContent),
            "member" | "members" => Ok(ResourceKind::Member),
            _ => Err(crate::Error::UnknownKind(s.to_string())),
        }
    }
}

/// Version number carried in `rest/v{n}` routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiVersion(u32);

impl ApiVersion {
    /// The first (and current) API version.
    pub const V1: ApiVersion = ApiVersion(1);

    /// Creates a version, rejecting zero.
    pub fn new(version: u32) -> crate::Result<Self> {
        if version == 0 {
            return Err(crate::Error::InvalidVersion(version.to_string()));
        }
        Ok(Self(version))
    }

    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::V1
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
