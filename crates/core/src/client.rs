//! # Pokédex Client
//!
//! Wires the resolvers over one shared transport and config. The two flows
//! (paginated catalog, on-demand detail) share nothing mutable; the catalog
//! is the only stateful piece and lives behind an `Arc` so a server can hand
//! it to many request handlers.

use crate::api::{HttpTransport, SharedTransport};
use crate::catalog::{CatalogAccumulator, CatalogEvent, PageFetcher};
use crate::config::PokedexConfig;
use crate::detail::{normalize_term, DetailResolver, SearchResolver};
use crate::error::{PokedexError, Result};
use crate::evolution::EvolutionChainResolver;
use crate::models::DetailViewModel;
use std::sync::Arc;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct Pokedex {
    config: Arc<PokedexConfig>,
    transport: SharedTransport,
    details: DetailResolver,
    search: SearchResolver,
    chains: EvolutionChainResolver,
    catalog: Arc<CatalogAccumulator>,
}

impl Pokedex {
    pub fn new(config: PokedexConfig, transport: SharedTransport) -> Self {
        let config = Arc::new(config);
        let details = DetailResolver::new(transport.clone(), config.clone());
        let search = SearchResolver::new(details.clone());
        let chains =
            EvolutionChainResolver::new(transport.clone(), details.clone(), config.max_chain_depth);
        let catalog = Arc::new(Self::build_catalog(&config, &transport, &details));

        Self {
            config,
            transport,
            details,
            search,
            chains,
            catalog,
        }
    }

    /// Build over the reqwest transport
    pub fn connect(config: PokedexConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::shared(&config)?;
        Ok(Self::new(config, transport))
    }

    /// Publish catalog lifecycle events on `tx`
    ///
    /// Replaces the catalog with a fresh, empty one; call before loading.
    pub fn with_catalog_events(mut self, tx: broadcast::Sender<CatalogEvent>) -> Self {
        let catalog = Self::build_catalog(&self.config, &self.transport, &self.details)
            .with_event_channel(tx);
        self.catalog = Arc::new(catalog);
        self
    }

    fn build_catalog(
        config: &Arc<PokedexConfig>,
        transport: &SharedTransport,
        details: &DetailResolver,
    ) -> CatalogAccumulator {
        CatalogAccumulator::new(
            PageFetcher::new(transport.clone(), config.clone()),
            details.clone(),
            config.page_size,
        )
    }

    pub fn config(&self) -> &PokedexConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<CatalogAccumulator> {
        &self.catalog
    }

    pub fn details(&self) -> &DetailResolver {
        &self.details
    }

    pub fn search(&self) -> &SearchResolver {
        &self.search
    }

    pub fn chains(&self) -> &EvolutionChainResolver {
        &self.chains
    }

    /// Detail view for a selected entry, evolutions degraded to empty on failure
    pub async fn view(&self, name: &str) -> Result<DetailViewModel> {
        let name = normalize_term(name)
            .ok_or_else(|| PokedexError::InvalidInput("pokemon name is empty".to_string()))?;
        let detail = self.details.resolve_by_name(&name).await?;
        Ok(self.chains.resolve_view(detail).await)
    }
}
