//! # API
//!
//! The boundary with the remote PokeAPI: a `get(url) -> JSON` transport
//! seam and the wire shapes the resolvers decode.
//!
//! - `transport` - [`Transport`] trait and the reqwest-backed [`HttpTransport`]
//! - `memory` - in-memory transport serving canned JSON (`test-support` feature)
//! - `wire` - serde shapes of the PokeAPI responses
//! - `fixtures` - canned response bodies for the memory transport (`test-support` feature)

#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod transport;
pub mod wire;

#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryTransport;
pub use transport::{HttpTransport, SharedTransport, Transport};
