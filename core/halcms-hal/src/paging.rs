//! Paged collection builder.
//!
//! The caller owns slicing and ordering; the builder only decides which
//! navigation links exist, using the authoritative total.

use crate::error::{HalError, HalResult};
use crate::links::{page_href, rels};
use crate::resource::{Link, Resource};

/// One page of already-mapped items.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedResult {
    pub items: Vec<Resource>,
    pub page_index: u64,
    pub page_size: u64,
    /// Total across all pages, as reported by the store or search provider.
    pub total_results: i64,
}

impl PagedResult {
    /// Rejects `page_size == 0` and negative `page_index`.
    pub fn new(
        items: Vec<Resource>,
        page_index: i64,
        page_size: i64,
        total_results: i64,
    ) -> HalResult<Self> {
        let page_index = u64::try_from(page_index).map_err(|_| {
            HalError::InvalidArgument(format!("pageIndex must be >= 0, got {page_index}"))
        })?;
        let page_size = match u64::try_from(page_size) {
            Ok(size) if size > 0 => size,
            _ => {
                return Err(HalError::InvalidArgument(format!(
                    "pageSize must be > 0, got {page_size}"
                )));
            }
        };
        Ok(Self {
            items,
            page_index,
            page_size,
            total_results,
        })
    }

    /// `ceil(total_results / page_size)`; a negative total counts as zero.
    pub fn total_pages(&self) -> u64 {
        let total = u64::try_from(self.total_results).unwrap_or(0);
        total.div_ceil(self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.page_index.saturating_add(1) < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }
}

/// Assembles the paged collection envelope.
#[derive(Debug, Clone)]
pub struct PagedCollectionBuilder {
    root: Link,
    href: String,
    echo: Vec<(String, String)>,
    extra_links: Vec<(String, Link)>,
}

impl PagedCollectionBuilder {
    /// `href` is the listing URL without a query string.
    pub fn new(root: Link, href: impl Into<String>) -> Self {
        Self {
            root,
            href: href.into(),
            echo: Vec::new(),
            extra_links: Vec::new(),
        }
    }

    /// Appends a query parameter to `self`, `next` and `prev`.
    #[must_use]
    pub fn echo(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.echo.push((key.into(), value.into()));
        self
    }

    /// Like [`echo`](Self::echo), skipping `None`.
    #[must_use]
    pub fn echo_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.echo(key, value),
            None => self,
        }
    }

    /// Adds a link to the envelope after the paging links.
    #[must_use]
    pub fn with_link(mut self, rel: impl Into<String>, link: Link) -> Self {
        self.extra_links.push((rel.into(), link));
        self
    }

    fn href_for(&self, page_index: u64, page_size: u64) -> String {
        page_href(&self.href, page_index, page_size, &self.echo)
    }

    pub fn build(self, page: PagedResult) -> Resource {
        let mut envelope = Resource::new()
            .with_state("totalResults", page.total_results)
            .with_state("pageIndex", page.page_index)
            .with_state("pageSize", page.page_size)
            .with_link(rels::ROOT, self.root.clone())
            .with_link(
                rels::SELF,
                Link::new(self.href_for(page.page_index, page.page_size)),
            );

        if page.has_next() {
            envelope.set_link(
                rels::NEXT,
                Link::new(self.href_for(page.page_index + 1, page.page_size)),
            );
        }
        if page.has_prev() {
            envelope.set_link(
                rels::PREV,
                Link::new(self.href_for(page.page_index - 1, page.page_size)),
            );
        }
        for (rel, link) in &self.extra_links {
            envelope.set_link(rel.clone(), link.clone());
        }

        let item_links = page
            .items
            .iter()
            .filter_map(|item| item.link(rels::SELF).cloned())
            .collect();
        envelope.set_links(rels::CONTENT, item_links);
        envelope.embed(rels::CONTENT, page.items);
        envelope
    }
}
