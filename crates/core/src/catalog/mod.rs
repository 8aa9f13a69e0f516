//! # Catalog
//!
//! Paginated browsing.
//!
//! - `page` - one page of summaries
//! - `accumulator` - single-flight, append-only collection of enriched entries
//! - `events` - load lifecycle events

pub mod accumulator;
pub mod events;
pub mod page;

pub use accumulator::{CatalogAccumulator, CatalogSnapshot, LoadOutcome};
pub use events::{CatalogEvent, CatalogEventKind};
pub use page::{Page, PageFetcher};
