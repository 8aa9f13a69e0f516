//! # Memory Transport
//!
//! Serves canned JSON keyed by exact URL. Unknown URLs answer with PokeAPI's
//! `{"detail": "Not found."}` body so the explicit not-found checks are
//! exercised the same way as against a live deployment.

use super::transport::Transport;
use crate::error::{PokedexError, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

#[derive(Debug, Default)]
pub struct MemoryTransport {
    responses: HashMap<String, Value>,
    failures: HashSet<String>,
    /// Requests whose URL starts with the prefix wait for a permit first
    gate: Option<(String, Arc<Semaphore>)>,
    calls: Mutex<Vec<String>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`
    pub fn with_json(mut self, url: impl Into<String>, body: Value) -> Self {
        self.responses.insert(url.into(), body);
        self
    }

    /// Answer `url` with a 500
    pub fn with_failure(mut self, url: impl Into<String>) -> Self {
        self.failures.insert(url.into());
        self
    }

    /// Hold requests under `prefix` until `semaphore` hands out a permit
    pub fn with_gate(mut self, prefix: impl Into<String>, semaphore: Arc<Semaphore>) -> Self {
        self.gate = Some((prefix.into(), semaphore));
        self
    }

    /// Every URL requested so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn get(&self, url: &str) -> Result<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(url.to_string());
        }

        if let Some((prefix, semaphore)) = &self.gate {
            if url.starts_with(prefix.as_str()) {
                let _permit = semaphore
                    .acquire()
                    .await
                    .map_err(|e| PokedexError::decode(url, e))?;
            }
        }

        if self.failures.contains(url) {
            return Err(PokedexError::Status {
                status: 500,
                url: url.to_string(),
            });
        }

        Ok(self
            .responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| json!({ "detail": "Not found." })))
    }
}
