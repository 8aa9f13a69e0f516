//! # Pokédex Models
//!
//! Display-ready records produced by the resolvers. These are the only types
//! the presentation layer sees; the raw PokeAPI shapes live in `api::wire`.

use serde::{Deserialize, Serialize};

/// Lightweight listing entry: a name and the URL of its detail resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSummary {
    pub name: String,
    pub detail_url: String,
}

/// Listing entry enriched with its thumbnail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub image_url: String,
}

/// Fully resolved record for a single Pokémon
///
/// `weight_kg` and `height_m` are already converted from the source's
/// hectograms and decimeters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    /// Distinct type names in slot order
    pub types: Vec<String>,
    pub weight_kg: f64,
    pub height_m: f64,
    pub abilities: Vec<String>,
    /// Species resource, followed to find the evolution chain
    pub species_url: String,
}

/// One stage of an evolution sequence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvolutionNode {
    pub name: String,
    pub image_url: String,
}

impl From<CatalogEntry> for EvolutionNode {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            name: entry.name,
            image_url: entry.image_url,
        }
    }
}

/// Ordered evolution stages, base form first
pub type EvolutionChain = Vec<EvolutionNode>;

/// Detail record plus its evolution sequence, as shown in the detail view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailViewModel {
    pub detail: DetailRecord,
    /// Empty when the chain could not be resolved
    pub evolutions: EvolutionChain,
}
