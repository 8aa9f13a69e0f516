//! # Configuration
//!
//! Settings shared by the transport and the resolvers.
//!
//! Layering, lowest to highest priority:
//! defaults → `.pokedex/config.json` → `POKEDEX_*` environment variables.
//! The binary applies CLI flags on top of whatever [`PokedexConfig::load`] returns.

use crate::error::{PokedexError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 10;

/// Runtime configuration for the Pokédex core
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PokedexConfig {
    /// Root of the versioned collection API, without trailing slash
    pub base_url: String,
    /// Entries requested per `load_more` call
    pub page_size: usize,
    /// Per-request timeout enforced by the HTTP client
    pub request_timeout_secs: u64,
    /// Upper bound on evolution chain length before the data is treated as malformed
    pub max_chain_depth: usize,
    pub user_agent: String,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: 10,
            max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH,
            user_agent: format!("pokedex/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl PokedexConfig {
    /// Point the config at a different API root (tests, mirrors)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Path of the optional JSON config file
    ///
    /// `POKEDEX_CONFIG_PATH` overrides the default `.pokedex/config.json`.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("POKEDEX_CONFIG_PATH") {
            return PathBuf::from(path);
        }

        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".pokedex")
            .join("config.json")
    }

    /// Load defaults, then the config file if present, then env overrides
    pub async fn load() -> Result<Self> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
                PokedexError::InvalidInput(format!("cannot read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&content)
                .map_err(|e| PokedexError::decode(path.display().to_string(), e))?
        } else {
            Self::default()
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `POKEDEX_*` environment overrides
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("POKEDEX_BASE_URL") {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(value) = std::env::var("POKEDEX_PAGE_SIZE") {
            self.page_size = parse_env("POKEDEX_PAGE_SIZE", &value)?;
        }
        if let Ok(value) = std::env::var("POKEDEX_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_env("POKEDEX_TIMEOUT_SECS", &value)?;
        }
        if let Ok(value) = std::env::var("POKEDEX_MAX_CHAIN_DEPTH") {
            self.max_chain_depth = parse_env("POKEDEX_MAX_CHAIN_DEPTH", &value)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(PokedexError::InvalidInput("base_url is empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(PokedexError::InvalidInput(
                "page_size must be positive".to_string(),
            ));
        }
        if self.max_chain_depth == 0 {
            return Err(PokedexError::InvalidInput(
                "max_chain_depth must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// `GET /pokemon?limit=&offset=`
    pub fn page_url(&self, limit: usize, offset: usize) -> String {
        format!("{}/pokemon?limit={}&offset={}", self.base_url, limit, offset)
    }

    /// `GET /pokemon/{name}`
    pub fn detail_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, urlencoding::encode(name))
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PokedexError::InvalidInput(format!("{} has invalid value {:?}", key, value)))
}
