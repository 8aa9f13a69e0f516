//! # HTTP API
//!
//! JSON endpoints the browse screen talks to.

pub mod catalog;
pub mod pokemon;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pokedex_core::{ErrorKind, PokedexError};
use serde::Serialize;
use utoipa::ToSchema;

/// Generic success/failure acknowledgement
#[derive(Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

/// Error body: the alert text to show plus a coarse kind
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    /// "not_found" or "network"
    pub kind: String,
    pub message: String,
    #[serde(skip)]
    #[schema(ignore)]
    status: StatusCode,
}

impl From<PokedexError> for ApiError {
    fn from(err: PokedexError) -> Self {
        tracing::debug!(error = %err, "request failed");
        let (status, kind) = match err.kind() {
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            ErrorKind::Network => (StatusCode::BAD_GATEWAY, "network"),
        };
        Self {
            kind: kind.to_string(),
            message: err.user_message().to_string(),
            status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(PokedexError::not_found("pokemon/agumon"));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.kind, "not_found");
        assert_eq!(err.message, "Pokémon not found.");
    }

    #[test]
    fn test_network_failure_maps_to_502() {
        let err = ApiError::from(PokedexError::Status {
            status: 500,
            url: "https://pokeapi.co/api/v2/pokemon/pikachu".to_string(),
        });
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(err.kind, "network");
        assert_eq!(err.message, "Could not reach the Pokédex. Please try again.");
    }

    #[test]
    fn test_error_response_carries_status() {
        let response = ApiError::from(PokedexError::not_found("pokemon/agumon")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
