//! # Catalog Events
//!
//! Lifecycle events of the paginated load, for UIs that drive a
//! "loading..." footer or an activity log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of catalog event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CatalogEventKind {
    /// A page request went out
    LoadStarted,
    /// The page was resolved and appended
    LoadCompleted,
    /// The page failed and nothing was appended
    LoadDiscarded,
    /// `load_more` was called while a load was outstanding
    LoadSuppressed,
    /// The collection was cleared
    Reset,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub kind: CatalogEventKind,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl CatalogEvent {
    pub fn new(kind: CatalogEventKind) -> Self {
        let timestamp = Utc::now();
        Self {
            id: format!(
                "{:x}-{:?}",
                timestamp.timestamp_nanos_opt().unwrap_or_default(),
                kind
            ),
            timestamp,
            kind,
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = CatalogEvent::new(CatalogEventKind::LoadCompleted)
            .with_data(serde_json::json!({ "appended": 20 }));

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"kind\":\"load_completed\""));
        assert!(json.contains("\"appended\":20"));
    }
}
