//! # Evolution
//!
//! - `chain` - first-branch flattening of the evolution tree
//! - `resolver` - species/chain fetch and concurrent stage resolution

pub mod chain;
pub mod resolver;

pub use chain::flatten_chain;
pub use resolver::EvolutionChainResolver;
