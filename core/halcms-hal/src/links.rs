//! Link template resolver.
//!
//! Composes hrefs from a [`ResourceKind`], an [`ApiVersion`] and a base path.
//! Templated links are emitted verbatim and never partially expanded.

use halcms_types::{ApiVersion, NodeId, ResourceKind};
use indexmap::IndexMap;

use crate::resource::Link;

/// Relation names.
pub mod rels {
    pub const ROOT: &str = "root";
    pub const SELF: &str = "self";
    pub const PARENT: &str = "parent";
    pub const CHILDREN: &str = "children";
    pub const DESCENDANTS: &str = "descendants";
    pub const META: &str = "meta";
    pub const SEARCH: &str = "search";
    pub const CONTENT: &str = "content";
    pub const NEXT: &str = "next";
    pub const PREV: &str = "prev";
    pub const ERRORS: &str = "errors";
}

/// Base path used when none is configured.
pub const DEFAULT_BASE_PATH: &str = "/umbraco";

/// Ordered relation → link map produced by [`LinkTemplate::resolve`].
pub type LinkSet = IndexMap<&'static str, Link>;

/// Link templates for one resource kind at one API version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate {
    kind: ResourceKind,
    version: ApiVersion,
    root: String,
}

impl LinkTemplate {
    /// Templates under [`DEFAULT_BASE_PATH`].
    pub fn new(kind: ResourceKind, version: ApiVersion) -> Self {
        Self::with_base_path(kind, version, DEFAULT_BASE_PATH)
    }

    /// Templates under a custom base path. A trailing slash is trimmed and a
    /// missing leading slash is added; an empty base mounts at `/rest`.
    pub fn with_base_path(kind: ResourceKind, version: ApiVersion, base_path: &str) -> Self {
        let trimmed = base_path.trim().trim_end_matches('/');
        let base = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        let root = format!("{base}/rest/{version}/{}", kind.segment());
        Self {
            kind,
            version,
            root,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// `{base}/rest/v{n}/{segment}`.
    pub fn root_href(&self) -> &str {
        &self.root
    }

    pub fn root(&self) -> Link {
        Link::new(self.root.clone())
    }

    pub fn item_href(&self, id: NodeId) -> String {
        format!("{}/{id}", self.root)
    }

    /// Concrete link when the id is known, the `{id}` template otherwise.
    pub fn self_link(&self, id: Option<NodeId>) -> Link {
        match id {
            Some(id) => Link::new(self.item_href(id)),
            None => Link::templated(format!("{}/{{id}}", self.root)),
        }
    }

    /// `None` for the root sentinel.
    pub fn parent(&self, parent_id: NodeId) -> Option<Link> {
        (!parent_id.is_root()).then(|| Link::new(self.item_href(parent_id)))
    }

    pub fn children(&self) -> Link {
        Link::templated(format!("{}/{{id}}/children{{?pageIndex,pageSize}}", self.root))
    }

    pub fn descendants(&self) -> Link {
        Link::templated(format!(
            "{}/{{id}}/descendants{{?pageIndex,pageSize}}",
            self.root
        ))
    }

    pub fn meta(&self, id: Option<NodeId>) -> Link {
        match id {
            Some(id) => Link::new(self.meta_href(id)),
            None => Link::templated(format!("{}/{{id}}/meta", self.root)),
        }
    }

    pub fn search(&self) -> Link {
        Link::templated(format!(
            "{}/search{{?pageIndex,pageSize,lucene}}",
            self.root
        ))
    }

    pub fn children_href(&self, id: NodeId) -> String {
        format!("{}/{id}/children", self.root)
    }

    pub fn descendants_href(&self, id: NodeId) -> String {
        format!("{}/{id}/descendants", self.root)
    }

    pub fn meta_href(&self, id: NodeId) -> String {
        format!("{}/{id}/meta", self.root)
    }

    pub fn search_href(&self) -> String {
        format!("{}/search", self.root)
    }

    /// Every relation that applies to a node in the given state.
    ///
    /// `parent` is present only for a known, non-sentinel parent.
    pub fn resolve(&self, id: Option<NodeId>, parent_id: Option<NodeId>) -> LinkSet {
        let mut links = LinkSet::new();
        links.insert(rels::SELF, self.self_link(id));
        if let Some(parent) = parent_id.and_then(|p| self.parent(p)) {
            links.insert(rels::PARENT, parent);
        }
        links.insert(rels::ROOT, self.root());
        links.insert(rels::CHILDREN, self.children());
        links.insert(rels::DESCENDANTS, self.descendants());
        links.insert(rels::META, self.meta(id));
        links.insert(rels::SEARCH, self.search());
        links
    }
}

/// Builds a concrete paged URL: `{href}?pageIndex=..&pageSize=..` followed by
/// the `extra` pairs, values percent-encoded.
pub fn page_href(href: &str, page_index: u64, page_size: u64, extra: &[(String, String)]) -> String {
    let mut out = format!("{href}?pageIndex={page_index}&pageSize={page_size}");
    for (key, value) in extra {
        out.push('&');
        out.push_str(key);
        out.push('=');
        out.push_str(&urlencoding::encode(value));
    }
    out
}
