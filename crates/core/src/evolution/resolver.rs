//! # Evolution Chain Resolver
//!
//! detail → species → evolution chain → flattened names → one thumbnail per
//! name, fetched concurrently. The chain is all-or-nothing: if any stage
//! fails to resolve, the whole chain fails rather than showing a partial one.

use crate::api::wire::{self, EvolutionChainResponse, SpeciesResponse};
use crate::api::SharedTransport;
use crate::detail::DetailResolver;
use crate::error::Result;
use crate::evolution::chain::flatten_chain;
use crate::fanout::join_ordered;
use crate::models::{DetailRecord, DetailViewModel, EvolutionChain, EvolutionNode};
use crate::view;

#[derive(Clone)]
pub struct EvolutionChainResolver {
    transport: SharedTransport,
    resolver: DetailResolver,
    max_depth: usize,
}

impl EvolutionChainResolver {
    pub fn new(transport: SharedTransport, resolver: DetailResolver, max_depth: usize) -> Self {
        Self {
            transport,
            resolver,
            max_depth,
        }
    }

    #[tracing::instrument(skip(self, detail), fields(pokemon = %detail.name))]
    pub async fn resolve_chain(&self, detail: &DetailRecord) -> Result<EvolutionChain> {
        let species_resource = format!("pokemon-species/{}", detail.name);
        let body = self.transport.get(&detail.species_url).await?;
        let species: SpeciesResponse = wire::decode(body, &species_resource)?;

        let chain_url = species.evolution_chain.url;
        let body = self.transport.get(&chain_url).await?;
        let chain: EvolutionChainResponse = wire::decode(body, &chain_url)?;

        let names = flatten_chain(&chain.chain, self.max_depth)?;
        tracing::debug!(stages = names.len(), "evolution chain flattened");

        let tasks: Vec<_> = names
            .into_iter()
            .map(|name| {
                let resolver = self.resolver.clone();
                async move {
                    resolver
                        .resolve_thumbnail_by_name(&name)
                        .await
                        .map(EvolutionNode::from)
                }
            })
            .collect();

        join_ordered(tasks).await
    }

    /// Resolve the chain and assemble the view model
    ///
    /// A chain failure is logged and shown as an empty evolution section;
    /// the detail itself is always returned.
    pub async fn resolve_view(&self, detail: DetailRecord) -> DetailViewModel {
        let evolutions = match self.resolve_chain(&detail).await {
            Ok(chain) => chain,
            Err(e) => {
                tracing::warn!(pokemon = %detail.name, error = %e, "evolution chain unavailable");
                Vec::new()
            }
        };
        view::assemble(detail, evolutions)
    }
}
