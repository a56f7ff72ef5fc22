//! Search contract and a naive in-memory provider.
//!
//! Providers receive a raw query expression and return node ids in relevance
//! order together with the total number of matches. They never return nodes;
//! resolving ids is the caller's job.

use async_trait::async_trait;
use halcms_model::{aliases_match, ContentNode};
use halcms_types::{NodeId, ResourceKind};
use serde_json::Value;
use std::sync::Arc;

use crate::error::{StorageError, StorageResult};
use crate::memory::InMemoryContentStore;

/// Provider-neutral description of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Kind of node being searched. Providers backed by a shared index use
    /// it to pick the right section.
    pub kind: ResourceKind,
    /// Raw query expression (Lucene-style `field:value` terms and bare words).
    pub query: String,
    /// Upper bound on the number of ranked ids to return.
    pub max_results: usize,
}

impl SearchCriteria {
    pub fn new(kind: ResourceKind, query: impl Into<String>, max_results: usize) -> Self {
        Self {
            kind,
            query: query.into(),
            max_results,
        }
    }
}

/// Ranked ids plus the authoritative match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHits {
    pub ids: Vec<NodeId>,
    pub total: i64,
}

/// Executes search criteria against an index.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, criteria: &SearchCriteria) -> StorageResult<SearchHits>;
}

// ── In-memory provider ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Term {
    Field { field: String, value: String },
    Word(String),
}

/// Drops Lucene escape backslashes (`\-1` → `-1`).
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn parse_query(query: &str) -> StorageResult<Vec<Term>> {
    let mut terms = Vec::new();
    for token in query.split_whitespace() {
        if matches!(token, "AND" | "+") {
            continue;
        }
        let token = token.trim_start_matches('+');
        // the first unescaped ':' separates field from value
        let split = token
            .char_indices()
            .find(|&(i, c)| c == ':' && (i == 0 || !token[..i].ends_with('\\')));
        match split {
            Some((0, _)) => {
                return Err(StorageError::InvalidQuery(format!(
                    "malformed query term: {token}"
                )));
            }
            Some((i, _)) => terms.push(Term::Field {
                field: token[..i].to_string(),
                value: unescape(token[i + 1..].trim_matches('"')),
            }),
            None => terms.push(Term::Word(unescape(token.trim_matches('"')))),
        }
    }
    Ok(terms)
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns a relevance score, or `None` when the node does not match.
fn score(node: &ContentNode, terms: &[Term]) -> Option<u32> {
    let mut points = 0;
    for term in terms {
        match term {
            Term::Field { field, value } => {
                let matched = match field.to_ascii_lowercase().as_str() {
                    "id" => node.id.to_string() == *value,
                    "parentid" => node.parent_id.to_string() == *value,
                    "nodename" => contains_ci(&node.name, value),
                    "nodetypealias" => aliases_match(&node.content_type_alias, value),
                    _ => node
                        .property(field)
                        .and_then(value_text)
                        .is_some_and(|text| contains_ci(&text, value)),
                };
                if !matched {
                    return None;
                }
                points += 1;
            }
            Term::Word(word) => {
                if contains_ci(&node.name, word) {
                    points += 2;
                } else if node
                    .properties
                    .values()
                    .filter_map(value_text)
                    .any(|text| contains_ci(&text, word))
                {
                    points += 1;
                } else {
                    return None;
                }
            }
        }
    }
    Some(points)
}

/// Scans an [`InMemoryContentStore`] on every query.
///
/// The store already holds a single kind, so `SearchCriteria::kind` is
/// ignored.
///
/// Supports `id:`, `parentID:`, `nodeName:`, `nodeTypeAlias:` and
/// `{propertyAlias}:` terms plus bare words; all terms must match. Name hits
/// rank above property hits, ties break on id.
pub struct InMemorySearchProvider {
    store: Arc<InMemoryContentStore>,
}

impl InMemorySearchProvider {
    pub fn new(store: Arc<InMemoryContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SearchProvider for InMemorySearchProvider {
    async fn search(&self, criteria: &SearchCriteria) -> StorageResult<SearchHits> {
        let terms = parse_query(&criteria.query)?;
        let mut ranked: Vec<(u32, NodeId)> = self
            .store
            .all_nodes()
            .await
            .iter()
            .filter_map(|node| score(node, &terms).map(|s| (s, node.id)))
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        let total = ranked.len() as i64;
        let ids = ranked
            .into_iter()
            .take(criteria.max_results)
            .map(|(_, id)| id)
            .collect();
        Ok(SearchHits { ids, total })
    }
}
