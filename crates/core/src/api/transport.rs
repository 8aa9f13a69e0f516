//! # Transport
//!
//! `get(url) -> JSON` over HTTPS. The resolvers only ever see the trait,
//! which keeps them testable against canned responses.

use crate::config::PokedexConfig;
use crate::error::{PokedexError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and parse the body as JSON
    ///
    /// Implementations map a missing resource to [`PokedexError::NotFound`]
    /// when they can tell; callers still check the body themselves.
    async fn get(&self, url: &str) -> Result<Value>;
}

/// Transport handle shared between resolvers and spawned fan-out tasks
pub type SharedTransport = Arc<dyn Transport>;

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &PokedexConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    pub fn shared(config: &PokedexConfig) -> Result<SharedTransport> {
        Ok(Arc::new(Self::new(config)?))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Value> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PokedexError::not_found(url));
        }
        if !status.is_success() {
            return Err(PokedexError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PokedexError::decode(url, e))
    }
}
