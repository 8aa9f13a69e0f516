//! # Detail Resolver
//!
//! Turns a name or a catalog summary into display records. This is the only
//! place the hectogram/decimeter conversion happens.

use crate::api::wire::{self, PokemonResponse, ThumbnailResponse};
use crate::api::SharedTransport;
use crate::config::PokedexConfig;
use crate::error::{PokedexError, Result};
use crate::models::{CatalogEntry, CatalogSummary, DetailRecord};
use std::sync::Arc;

/// Cheap to clone; clones share the transport and config
#[derive(Clone)]
pub struct DetailResolver {
    transport: SharedTransport,
    config: Arc<PokedexConfig>,
}

impl DetailResolver {
    pub fn new(transport: SharedTransport, config: Arc<PokedexConfig>) -> Self {
        Self { transport, config }
    }

    /// Resolve the full record for `name` with one call to `/pokemon/{name}`
    #[tracing::instrument(skip(self))]
    pub async fn resolve_by_name(&self, name: &str) -> Result<DetailRecord> {
        if name.trim().is_empty() {
            return Err(PokedexError::InvalidInput(
                "pokemon name is empty".to_string(),
            ));
        }

        let resource = format!("pokemon/{}", name);
        let body = self.transport.get(&self.config.detail_url(name)).await?;
        let response: PokemonResponse = wire::decode(body, &resource)?;
        project_detail(response, &resource)
    }

    /// Follow the summary's detail URL and keep only the artwork
    pub async fn resolve_thumbnail(&self, summary: &CatalogSummary) -> Result<CatalogEntry> {
        let resource = format!("pokemon/{}", summary.name);
        let body = self.transport.get(&summary.detail_url).await?;
        let response: ThumbnailResponse = wire::decode(body, &resource)?;

        Ok(CatalogEntry {
            name: summary.name.clone(),
            image_url: response.sprites.artwork_url(&resource)?,
        })
    }

    /// Thumbnail projection addressed by name (evolution stages)
    pub async fn resolve_thumbnail_by_name(&self, name: &str) -> Result<CatalogEntry> {
        let summary = CatalogSummary {
            name: name.to_string(),
            detail_url: self.config.detail_url(name),
        };
        self.resolve_thumbnail(&summary).await
    }
}

fn project_detail(response: PokemonResponse, resource: &str) -> Result<DetailRecord> {
    let image_url = response.sprites.artwork_url(resource)?;

    let mut types: Vec<String> = Vec::with_capacity(response.types.len());
    for slot in response.types {
        if !types.contains(&slot.kind.name) {
            types.push(slot.kind.name);
        }
    }

    Ok(DetailRecord {
        id: response.id,
        name: response.name,
        image_url,
        types,
        weight_kg: f64::from(response.weight) / 10.0,
        height_m: f64::from(response.height) / 10.0,
        abilities: response
            .abilities
            .into_iter()
            .map(|a| a.ability.name)
            .collect(),
        species_url: response.species.url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{fixtures, MemoryTransport};
    use serde_json::json;

    fn resolver(transport: MemoryTransport) -> DetailResolver {
        let config = PokedexConfig::default().with_base_url(fixtures::BASE_URL);
        DetailResolver::new(Arc::new(transport), Arc::new(config))
    }

    #[tokio::test]
    async fn test_resolve_by_name_converts_units() {
        let transport = MemoryTransport::new().with_json(
            fixtures::detail_url("pikachu"),
            fixtures::pokemon(25, "pikachu", &["electric"], 4, 60),
        );

        let record = resolver(transport).resolve_by_name("pikachu").await.unwrap();
        assert_eq!(record.id, 25);
        assert_eq!(record.name, "pikachu");
        assert_eq!(record.weight_kg, 6.0);
        assert_eq!(record.height_m, 0.4);
        assert_eq!(record.types, vec!["electric".to_string()]);
        assert_eq!(record.abilities, vec!["static", "lightning-rod"]);
        assert_eq!(record.image_url, fixtures::artwork_url(25));
        assert_eq!(record.species_url, fixtures::species_url("pikachu"));
    }

    #[tokio::test]
    async fn test_duplicate_types_collapse() {
        let transport = MemoryTransport::new().with_json(
            fixtures::detail_url("weird"),
            fixtures::pokemon(999, "weird", &["ghost", "ghost", "dark"], 10, 10),
        );

        let record = resolver(transport).resolve_by_name("weird").await.unwrap();
        assert_eq!(record.types, vec!["ghost", "dark"]);
    }

    #[tokio::test]
    async fn test_unknown_name_is_not_found() {
        let err = resolver(MemoryTransport::new())
            .resolve_by_name("agumon")
            .await
            .unwrap_err();
        assert!(matches!(err, PokedexError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_empty_name_makes_no_call() {
        let transport = Arc::new(MemoryTransport::new());
        let config = Arc::new(PokedexConfig::default().with_base_url(fixtures::BASE_URL));
        let resolver = DetailResolver::new(transport.clone(), config);

        let err = resolver.resolve_by_name("  ").await.unwrap_err();
        assert!(matches!(err, PokedexError::InvalidInput(_)));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_artwork_fails() {
        let mut body = fixtures::pokemon(201, "unown", &["psychic"], 5, 50);
        body["sprites"]["other"]["official-artwork"] = json!({ "front_default": null });
        let transport = MemoryTransport::new().with_json(fixtures::detail_url("unown"), body);

        let err = resolver(transport).resolve_by_name("unown").await.unwrap_err();
        assert!(matches!(err, PokedexError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_resolve_thumbnail_follows_detail_url() {
        let transport = MemoryTransport::new().with_json(
            "https://elsewhere.test/pokemon/1/",
            fixtures::pokemon(1, "bulbasaur", &["grass", "poison"], 7, 69),
        );
        let summary = CatalogSummary {
            name: "bulbasaur".to_string(),
            detail_url: "https://elsewhere.test/pokemon/1/".to_string(),
        };

        let entry = resolver(transport).resolve_thumbnail(&summary).await.unwrap();
        assert_eq!(entry.name, "bulbasaur");
        assert_eq!(entry.image_url, fixtures::artwork_url(1));
    }
}
