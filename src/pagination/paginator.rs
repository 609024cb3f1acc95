//! The page-following loop

use super::types::{Page, PaginationConfig};
use crate::decode::{CompletionHandler, PagedValues};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::sequence::{Emitter, Sequence};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

/// Drives paged endpoints into sequences of pages
#[derive(Debug, Clone)]
pub struct Paginator {
    client: HttpClient,
    config: PaginationConfig,
}

impl Paginator {
    /// Create a paginator over a client
    pub fn new(client: HttpClient, config: PaginationConfig) -> Self {
        Self { client, config }
    }

    /// Get the pagination config
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Follow `url` page by page
    ///
    /// `url` carries every query parameter except `start` (and `limit`, if
    /// configured), which are appended per request.
    pub fn pages<T>(&self, url: Url) -> Sequence<Page<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.client.clone();
        let config = self.config.clone();
        Sequence::spawn_with_deadline(self.config.deadline, move |emitter| {
            follow(client, url, config, emitter)
        })
    }
}

/// URL of the page starting at `start`
fn page_url(url: &Url, start: u32, limit: Option<u32>) -> Url {
    let mut page_url = url.clone();
    {
        let mut query = page_url.query_pairs_mut();
        query.append_pair("start", &start.to_string());
        if let Some(limit) = limit {
            query.append_pair("limit", &limit.to_string());
        }
    }
    page_url
}

async fn follow<T: DeserializeOwned>(
    client: HttpClient,
    url: Url,
    config: PaginationConfig,
    emitter: Emitter<Page<T>>,
) -> Result<()> {
    let handler = CompletionHandler::new(PagedValues::<T>::new());
    let mut start = 0;
    let mut fetched = 0u32;

    loop {
        if let Some(max_pages) = config.max_pages {
            if fetched >= max_pages {
                return Err(Error::PageLimitExceeded { max_pages });
            }
        }

        let page = handler.handle(client.get(page_url(&url, start, config.limit)).await)?;
        fetched += 1;

        let next = if page.is_last_page {
            None
        } else {
            match page.next_page_start {
                Some(next) if next > start => Some(next),
                Some(next) => {
                    return Err(Error::invalid_page(
                        start,
                        format!("nextPageStart {next} does not advance past {start}"),
                    ))
                }
                None => {
                    return Err(Error::invalid_page(
                        start,
                        "missing nextPageStart on a page that is not the last",
                    ))
                }
            }
        };

        debug!(
            "Page {fetched} at start={start}: {} values, last={}",
            page.values.len(),
            page.is_last_page
        );

        if !emitter.emit(page) {
            debug!("Sequence terminated externally at start={start}");
            return Ok(());
        }

        let Some(next) = next else {
            info!("Fetched {fetched} pages from {}", url.path());
            return Ok(());
        };

        start = next;
    }
}
