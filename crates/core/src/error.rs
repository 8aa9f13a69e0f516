//! # Errors
//!
//! One error type for the whole core. Callers that only care about the
//! coarse outcome use [`PokedexError::kind`]: everything is either a
//! network-ish failure (retry may help) or a not-found (change the input).

use serde::Serialize;

/// Result alias used throughout `pokedex_core`
pub type Result<T> = std::result::Result<T, PokedexError>;

/// Coarse error classification surfaced to the presentation layer
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Transport or parse failure, retryable by user action
    Network,
    /// Valid request, no such item
    NotFound,
}

#[derive(Debug, thiserror::Error)]
pub enum PokedexError {
    /// The HTTP client failed before a response was read
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Unexpected HTTP status (404 is reported as `NotFound`)
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body did not have the expected shape
    #[error("could not decode {context}: {message}")]
    Decode { context: String, message: String },

    /// The remote resource reports that the item does not exist
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A fan-out task panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(String),
}

impl PokedexError {
    pub fn decode(context: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            context: context.into(),
            message: message.to_string(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Status { .. } | Self::Decode { .. } | Self::Task(_) => {
                ErrorKind::Network
            }
            Self::NotFound { .. } | Self::InvalidInput(_) => ErrorKind::NotFound,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Network
    }

    /// Text for the single alert shown when a search or detail lookup fails
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NotFound => "Pokémon not found.",
            ErrorKind::Network => "Could not reach the Pokédex. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(PokedexError::not_found("pokemon/missingno").kind(), ErrorKind::NotFound);
        assert_eq!(
            PokedexError::decode("pokemon/pikachu", "missing field `id`").kind(),
            ErrorKind::Network
        );
        let status = PokedexError::Status {
            status: 500,
            url: "https://pokeapi.co/api/v2/pokemon".to_string(),
        };
        assert!(status.is_retryable());
        assert!(!PokedexError::InvalidInput("empty name".to_string()).is_retryable());
    }

    #[test]
    fn test_user_message() {
        let err = PokedexError::not_found("pokemon/agumon");
        assert_eq!(err.user_message(), "Pokémon not found.");
        assert_eq!(err.to_string(), "pokemon/agumon not found");
    }
}
