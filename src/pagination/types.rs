//! Pagination types
//!
//! The paged response envelope and the paginator's safety limits.

use crate::error::Result;
use crate::sequence::Sequence;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One bounded slice of a larger result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Number of values in this page
    #[serde(default)]
    pub size: u32,
    /// Maximum number of values the server puts in a page
    #[serde(default)]
    pub limit: u32,
    /// Whether the server has no further pages
    pub is_last_page: bool,
    /// Offset of the first value in this page
    #[serde(default)]
    pub start: u32,
    /// Offset to request next; absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_start: Option<u32>,
    /// Values in server order
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
}

impl<T> Page<T> {
    /// Build a page from its values
    pub fn new(start: u32, values: Vec<T>, next_page_start: Option<u32>) -> Self {
        let size = values.len() as u32;
        Self {
            size,
            limit: size,
            is_last_page: next_page_start.is_none(),
            start,
            next_page_start,
            values,
        }
    }

    /// Whether the server reports another page
    pub fn has_next(&self) -> bool {
        !self.is_last_page
    }

    /// Number of values in this page
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether this page carries no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the page, keeping its values
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

/// Default bound on pages fetched by one sequence
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

/// Safety limits for a paginated sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Pages to fetch before giving up on a server that never reports the
    /// last page (`None` = unbounded)
    pub max_pages: Option<u32>,
    /// Page size requested with `limit` (`None` = server default)
    pub limit: Option<u32>,
    /// Time budget for the whole sequence (`None` = unbounded)
    pub deadline: Option<Duration>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_pages: Some(DEFAULT_MAX_PAGES),
            limit: None,
            deadline: None,
        }
    }
}

impl PaginationConfig {
    /// No page bound and no deadline
    pub fn unbounded() -> Self {
        Self {
            max_pages: None,
            ..Default::default()
        }
    }

    /// Set the page bound; a bound of 0 fails before the first request
    #[must_use]
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Set the requested page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the sequence deadline
    #[must_use]
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

impl<T: Clone + Send + 'static> Sequence<Page<T>> {
    /// Wait for the last page and return all values across pages, in order
    pub async fn collect_values(&self) -> Result<Vec<T>> {
        let mut observer = self.observe();
        let mut values = Vec::new();
        while let Some(page) = observer.next().await {
            values.extend(page?.values);
        }
        Ok(values)
    }
}
