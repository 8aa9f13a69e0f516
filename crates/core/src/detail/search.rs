//! # Search
//!
//! Direct lookup by a user-typed name. Independent of the paginated
//! catalog: it holds no handle to the accumulator, so a failed search can
//! never disturb the list.

use super::resolver::DetailResolver;
use crate::error::Result;
use crate::models::DetailRecord;

#[derive(Clone)]
pub struct SearchResolver {
    resolver: DetailResolver,
}

impl SearchResolver {
    pub fn new(resolver: DetailResolver) -> Self {
        Self { resolver }
    }

    /// Look up `term` by exact name
    ///
    /// Returns `Ok(None)` without touching the network when the term is
    /// blank. `NotFound` is returned as-is; render it with
    /// [`PokedexError::user_message`](crate::PokedexError::user_message).
    pub async fn search(&self, term: &str) -> Result<Option<DetailRecord>> {
        let Some(name) = normalize_term(term) else {
            return Ok(None);
        };

        let record = self.resolver.resolve_by_name(&name).await?;
        tracing::debug!(term = %name, id = record.id, "search hit");
        Ok(Some(record))
    }
}

/// Trim and lower-case; `None` when nothing is left
pub fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{fixtures, MemoryTransport};
    use crate::config::PokedexConfig;
    use crate::error::{ErrorKind, PokedexError};
    use std::sync::Arc;

    fn search_over(transport: Arc<MemoryTransport>) -> SearchResolver {
        let config = Arc::new(PokedexConfig::default().with_base_url(fixtures::BASE_URL));
        SearchResolver::new(DetailResolver::new(transport, config))
    }

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("  PikaChu "), Some("pikachu".to_string()));
        assert_eq!(normalize_term(""), None);
        assert_eq!(normalize_term(" \t "), None);
    }

    #[tokio::test]
    async fn test_blank_search_makes_no_call() {
        let transport = Arc::new(MemoryTransport::new());
        let search = search_over(transport.clone());

        assert!(search.search("").await.unwrap().is_none());
        assert!(search.search("   ").await.unwrap().is_none());
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_search_normalizes_before_lookup() {
        let transport = Arc::new(MemoryTransport::new().with_json(
            fixtures::detail_url("pikachu"),
            fixtures::pokemon(25, "pikachu", &["electric"], 4, 60),
        ));
        let search = search_over(transport.clone());

        let record = search.search("  Pikachu ").await.unwrap().unwrap();
        assert_eq!(record.id, 25);
        assert_eq!(record.weight_kg, 60.0 / 10.0);
        assert_eq!(transport.calls(), vec![fixtures::detail_url("pikachu")]);
    }

    #[tokio::test]
    async fn test_unknown_search_is_not_found() {
        let search = search_over(Arc::new(MemoryTransport::new()));

        let err = search.search("agumon").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(matches!(err, PokedexError::NotFound { .. }));
        assert_eq!(err.user_message(), "Pokémon not found.");
    }
}
