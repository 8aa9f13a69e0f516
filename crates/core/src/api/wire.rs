//! # Wire Shapes
//!
//! Only the fields the resolvers read are modelled; serde ignores the rest
//! of PokeAPI's (large) payloads.

use crate::error::{PokedexError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// `{ name, url }` reference used all over PokeAPI
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// `GET /pokemon?limit=&offset=`
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Artwork,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    pub other: OtherSprites,
}

impl Sprites {
    /// The official artwork URL; absent artwork is a decode failure
    pub fn artwork_url(&self, context: &str) -> Result<String> {
        self.other
            .official_artwork
            .front_default
            .clone()
            .ok_or_else(|| PokedexError::decode(context, "official artwork is missing"))
    }
}

/// `GET /pokemon/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    /// Decimeters
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub sprites: Sprites,
    pub species: NamedResource,
}

/// Reduced projection of `GET /pokemon/{name}` used for thumbnails
#[derive(Debug, Clone, Deserialize)]
pub struct ThumbnailResponse {
    pub sprites: Sprites,
}

/// `GET <species.url>`
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesResponse {
    pub evolution_chain: ApiResource,
}

/// `GET <evolution_chain.url>`
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChainResponse {
    pub chain: ChainLink,
}

/// One node of the evolution tree
#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// Fail with `NotFound` when the body carries PokeAPI's not-found marker
///
/// Some deployments answer unknown resources with a 200 and a
/// `{"detail": "Not found."}` body, so the status alone is not enough.
pub fn ensure_found(value: &Value, resource: &str) -> Result<()> {
    let detail = value.get("detail").and_then(|d| d.as_str());
    if let Some(detail) = detail {
        if detail.to_ascii_lowercase().contains("not found") {
            return Err(PokedexError::not_found(resource));
        }
    }
    Ok(())
}

/// Check for the not-found marker, then decode into `T`
pub fn decode<T: DeserializeOwned>(value: Value, resource: &str) -> Result<T> {
    ensure_found(&value, resource)?;
    serde_json::from_value(value).map_err(|e| PokedexError::decode(resource, e))
}
