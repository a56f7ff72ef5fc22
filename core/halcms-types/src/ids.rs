//! Identifier types used throughout the halcms core.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a node in the content repository.
///
/// Node ids are assigned by the persistence service. The reserved value
/// [`NodeId::ROOT`] is only ever used as a parent id and means the node sits
/// at the top of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(i32);

impl NodeId {
    /// Sentinel parent id for nodes without a parent.
    pub const ROOT: NodeId = NodeId(-1);

    /// Creates a node ID from a raw integer.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Returns true if this is the root sentinel.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.0 == Self::ROOT.0
    }

    /// Parses a node ID from a string.
    pub fn parse(s: &str) -> crate::Result<Self> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| crate::Error::InvalidNodeId(s.to_string()))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::ROOT
    }
}

impl From<i32> for NodeId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
