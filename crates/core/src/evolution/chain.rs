//! # Chain Flattening
//!
//! Walks the evolution tree from the root, always taking the first child.
//! Sibling branches (Eevee's eight evolutions, say) are dropped; only the
//! first one listed by the API is kept.

use crate::api::wire::ChainLink;
use crate::error::{PokedexError, Result};

/// Species names root to leaf along the first branch
///
/// Fails when the walk would exceed `max_depth` stages; no real chain is
/// that long, so it is treated as malformed data.
pub fn flatten_chain(root: &ChainLink, max_depth: usize) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut current = Some(root);

    while let Some(link) = current {
        if names.len() >= max_depth {
            return Err(PokedexError::decode(
                "evolution chain",
                format!("more than {} stages", max_depth),
            ));
        }
        names.push(link.species.name.clone());
        current = link.evolves_to.first();
    }

    Ok(names)
}
