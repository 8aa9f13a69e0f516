//! # Pokédex Core
//!
//! Catalog and detail resolution for a Pokédex browser, backed by PokeAPI.
//!
//! ## Architecture
//!
//! - `api/` - transport seam (`get(url) -> JSON`) and PokeAPI wire shapes
//! - `catalog/` - paginated, single-flight, append-only catalog
//! - `detail/` - detail records, thumbnails and name search
//! - `evolution/` - evolution chain flattening and concurrent stage resolution
//! - `view` - detail view model assembly
//! - `client` - [`Pokedex`], everything wired over one transport
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pokedex_core::{Pokedex, PokedexConfig};
//!
//! let pokedex = Pokedex::connect(PokedexConfig::default())?;
//! pokedex.catalog().load_more().await;
//! let view = pokedex.view("pikachu").await?;
//! ```

pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod detail;
pub mod error;
pub mod evolution;
mod fanout;
pub mod models;
pub mod view;

pub use client::Pokedex;
pub use config::PokedexConfig;
pub use error::{ErrorKind, PokedexError, Result};
pub use models::{
    CatalogEntry, CatalogSummary, DetailRecord, DetailViewModel, EvolutionChain, EvolutionNode,
};
