//! # Page Fetcher
//!
//! One page of `/pokemon?limit=&offset=`. An offset past the end is not an
//! error, it is an empty page.

use crate::api::wire::{self, PageResponse};
use crate::api::SharedTransport;
use crate::config::PokedexConfig;
use crate::error::{PokedexError, Result};
use crate::models::CatalogSummary;
use std::sync::Arc;

/// A fetched page plus the collection size the API reported with it
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub summaries: Vec<CatalogSummary>,
    pub total: usize,
}

#[derive(Clone)]
pub struct PageFetcher {
    transport: SharedTransport,
    config: Arc<PokedexConfig>,
}

impl PageFetcher {
    pub fn new(transport: SharedTransport, config: Arc<PokedexConfig>) -> Self {
        Self { transport, config }
    }

    pub async fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<CatalogSummary>> {
        Ok(self.fetch_page_info(limit, offset).await?.summaries)
    }

    pub async fn fetch_page_info(&self, limit: usize, offset: usize) -> Result<Page> {
        if limit == 0 {
            return Err(PokedexError::InvalidInput(
                "page limit must be positive".to_string(),
            ));
        }

        let url = self.config.page_url(limit, offset);
        let body = self.transport.get(&url).await?;
        let response: PageResponse = wire::decode(body, "pokemon list")?;

        tracing::debug!(
            limit,
            offset,
            returned = response.results.len(),
            total = response.count,
            "fetched catalog page"
        );

        Ok(Page {
            summaries: response
                .results
                .into_iter()
                .map(|r| CatalogSummary {
                    name: r.name,
                    detail_url: r.url,
                })
                .collect(),
            total: response.count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{fixtures, MemoryTransport};

    const NAMES: [&str; 5] = ["bulbasaur", "ivysaur", "venusaur", "charmander", "charmeleon"];

    /// Serves every page a real server would for a 5-entry collection
    fn five_entry_transport(config: &PokedexConfig) -> MemoryTransport {
        let mut transport = MemoryTransport::new();
        for limit in 1..=6 {
            for offset in 0..=6 {
                let start = offset.min(NAMES.len());
                let end = (offset + limit).min(NAMES.len());
                transport = transport.with_json(
                    config.page_url(limit, offset),
                    fixtures::page(NAMES.len(), &NAMES[start..end]),
                );
            }
        }
        transport
    }

    #[tokio::test]
    async fn test_page_size_is_min_of_limit_and_remaining() {
        let config = PokedexConfig::default().with_base_url(fixtures::BASE_URL);
        let transport = Arc::new(five_entry_transport(&config));
        let fetcher = PageFetcher::new(transport, Arc::new(config));

        for limit in 1..=6usize {
            for offset in 0..=6usize {
                let page = fetcher.fetch_page(limit, offset).await.unwrap();
                let expected = limit.min(NAMES.len().saturating_sub(offset));
                assert_eq!(page.len(), expected, "limit={} offset={}", limit, offset);
                if let Some(first) = page.first() {
                    assert_eq!(first.name, NAMES[offset]);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_summaries_carry_detail_urls() {
        let config = PokedexConfig::default().with_base_url(fixtures::BASE_URL);
        let transport = Arc::new(
            MemoryTransport::new().with_json(
                config.page_url(20, 0),
                fixtures::page(1302, &["bulbasaur", "ivysaur"]),
            ),
        );
        let fetcher = PageFetcher::new(transport, Arc::new(config));

        let page = fetcher.fetch_page_info(20, 0).await.unwrap();
        assert_eq!(page.total, 1302);
        assert_eq!(page.summaries[1].detail_url, fixtures::detail_url("ivysaur"));
    }

    #[tokio::test]
    async fn test_zero_limit_rejected_without_call() {
        let transport = Arc::new(MemoryTransport::new());
        let config = Arc::new(PokedexConfig::default());
        let fetcher = PageFetcher::new(transport.clone(), config);

        assert!(fetcher.fetch_page(0, 0).await.is_err());
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let config = PokedexConfig::default().with_base_url(fixtures::BASE_URL);
        let transport = Arc::new(MemoryTransport::new().with_failure(config.page_url(20, 0)));
        let fetcher = PageFetcher::new(transport, Arc::new(config));

        let err = fetcher.fetch_page(20, 0).await.unwrap_err();
        assert!(err.is_retryable());
    }
}
