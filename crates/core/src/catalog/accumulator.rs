//! # Catalog Accumulator
//!
//! The growing, append-only list behind the browse screen.
//!
//! `load_more` is single-flight: while a page is outstanding, further calls
//! return [`LoadOutcome::Suppressed`] immediately. That guard is what keeps
//! a name from being appended twice, so there is no uniqueness scan.
//!
//! A page is all-or-nothing. If the page request or any thumbnail in it
//! fails, nothing is appended and the offset stays put so the next call
//! retries the same page.

use super::events::{CatalogEvent, CatalogEventKind};
use super::page::PageFetcher;
use crate::detail::DetailResolver;
use crate::error::Result;
use crate::fanout::join_ordered;
use crate::models::CatalogEntry;
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{broadcast, RwLock};

/// What a `load_more` call did
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// A page was resolved and appended (possibly empty past the end)
    Appended { count: usize },
    /// Another load was outstanding; nothing happened
    Suppressed,
    /// The page failed; nothing was appended and the offset did not move
    Discarded { reason: String },
}

/// Point-in-time view of the accumulator for rendering
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogSnapshot {
    pub entries: Vec<CatalogEntry>,
    pub offset: usize,
    pub loading: bool,
    pub exhausted: bool,
}

#[derive(Debug, Default)]
struct CatalogState {
    entries: Vec<CatalogEntry>,
    offset: usize,
    /// Collection size reported by the most recent page
    total: Option<usize>,
    last_page_len: Option<usize>,
    /// Bumped by `reset` so a page started before the reset is not appended after it
    generation: u64,
}

/// Clears the in-flight flag on every exit path
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct CatalogAccumulator {
    fetcher: PageFetcher,
    resolver: DetailResolver,
    page_size: usize,
    state: RwLock<CatalogState>,
    in_flight: AtomicBool,
    event_tx: Option<broadcast::Sender<CatalogEvent>>,
}

impl CatalogAccumulator {
    pub fn new(fetcher: PageFetcher, resolver: DetailResolver, page_size: usize) -> Self {
        Self {
            fetcher,
            resolver,
            page_size: page_size.max(1),
            state: RwLock::new(CatalogState::default()),
            in_flight: AtomicBool::new(false),
            event_tx: None,
        }
    }

    /// Publish lifecycle events on `tx`
    pub fn with_event_channel(mut self, tx: broadcast::Sender<CatalogEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    /// Fetch and append the next page
    #[tracing::instrument(skip(self), fields(page_size = self.page_size))]
    pub async fn load_more(&self) -> LoadOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("load already in flight, ignoring");
            self.emit(CatalogEvent::new(CatalogEventKind::LoadSuppressed));
            return LoadOutcome::Suppressed;
        };

        let (offset, generation) = {
            let state = self.state.read().await;
            (state.offset, state.generation)
        };

        self.emit(
            CatalogEvent::new(CatalogEventKind::LoadStarted).with_data(json!({ "offset": offset })),
        );

        let batch = match self.fetch_batch(offset).await {
            Ok(batch) => batch,
            Err(e) => {
                tracing::warn!(offset, error = %e, "catalog page discarded");
                return self.discard(offset, e.to_string());
            }
        };

        let (entries, total) = batch;
        let count = entries.len();
        let mut state = self.state.write().await;
        if state.generation != generation {
            drop(state);
            tracing::debug!(offset, "catalog was reset during load");
            return self.discard(offset, "catalog was reset during load".to_string());
        }

        state.entries.extend(entries);
        state.offset += self.page_size;
        state.total = Some(total);
        state.last_page_len = Some(count);
        let len = state.entries.len();
        drop(state);

        tracing::info!(offset, appended = count, total_loaded = len, "catalog page appended");
        self.emit(
            CatalogEvent::new(CatalogEventKind::LoadCompleted)
                .with_data(json!({ "offset": offset, "appended": count, "loaded": len })),
        );

        LoadOutcome::Appended { count }
    }

    /// Page request, then every thumbnail concurrently, joined in page order
    async fn fetch_batch(&self, offset: usize) -> Result<(Vec<CatalogEntry>, usize)> {
        let page = self.fetcher.fetch_page_info(self.page_size, offset).await?;

        let tasks: Vec<_> = page
            .summaries
            .into_iter()
            .map(|summary| {
                let resolver = self.resolver.clone();
                async move { resolver.resolve_thumbnail(&summary).await }
            })
            .collect();

        let entries = join_ordered(tasks).await?;
        Ok((entries, page.total))
    }

    fn discard(&self, offset: usize, reason: String) -> LoadOutcome {
        self.emit(
            CatalogEvent::new(CatalogEventKind::LoadDiscarded)
                .with_data(json!({ "offset": offset, "reason": reason })),
        );
        LoadOutcome::Discarded { reason }
    }

    /// Clear the collection and start over from offset 0
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        let generation = state.generation + 1;
        *state = CatalogState {
            generation,
            ..CatalogState::default()
        };
        drop(state);

        self.emit(CatalogEvent::new(CatalogEventKind::Reset));
    }

    pub async fn entries(&self) -> Vec<CatalogEntry> {
        self.state.read().await.entries.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn offset(&self) -> usize {
        self.state.read().await.offset
    }

    /// True while a page is outstanding (the footer indicator)
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// True once a short page came back or the offset passed the reported total
    pub async fn is_exhausted(&self) -> bool {
        let state = self.state.read().await;
        exhausted(&state, self.page_size)
    }

    pub async fn snapshot(&self) -> CatalogSnapshot {
        let state = self.state.read().await;
        CatalogSnapshot {
            entries: state.entries.clone(),
            offset: state.offset,
            loading: self.is_loading(),
            exhausted: exhausted(&state, self.page_size),
        }
    }

    fn emit(&self, event: CatalogEvent) {
        if let Some(tx) = &self.event_tx {
            // No subscribers is fine
            let _ = tx.send(event);
        }
    }
}

fn exhausted(state: &CatalogState, page_size: usize) -> bool {
    let short_page = state.last_page_len.is_some_and(|len| len < page_size);
    let past_total = state.total.is_some_and(|total| state.offset >= total);
    short_page || past_total
}
