//! # Detail
//!
//! - `resolver` - name/summary → detail record or thumbnail
//! - `search` - user-typed name lookup

pub mod resolver;
pub mod search;

pub use resolver::DetailResolver;
pub use search::{normalize_term, SearchResolver};
