//! # Catalog API
//!
//! Paginated list endpoints and the load lifecycle event stream.

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream};
use pokedex_core::catalog::{CatalogSnapshot, LoadOutcome};
use pokedex_core::CatalogEntry;
use serde::Serialize;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use utoipa::ToSchema;

use super::ApiResponse;
use crate::SharedState;

#[derive(Serialize, ToSchema)]
pub struct EntryResponse {
    pub name: String,
    pub image_url: String,
}

impl From<CatalogEntry> for EntryResponse {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            name: entry.name,
            image_url: entry.image_url,
        }
    }
}

/// Everything loaded so far plus the footer state
#[derive(Serialize, ToSchema)]
pub struct CatalogResponse {
    pub entries: Vec<EntryResponse>,
    pub offset: usize,
    /// A page is outstanding
    pub loading: bool,
    /// No more pages to load
    pub exhausted: bool,
}

impl From<CatalogSnapshot> for CatalogResponse {
    fn from(snapshot: CatalogSnapshot) -> Self {
        Self {
            entries: snapshot.entries.into_iter().map(Into::into).collect(),
            offset: snapshot.offset,
            loading: snapshot.loading,
            exhausted: snapshot.exhausted,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct LoadMoreResponse {
    /// "appended", "suppressed" or "discarded"
    pub outcome: String,
    pub appended: usize,
    /// Entries loaded after this call
    pub total: usize,
}

pub fn catalog_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(get_catalog))
        .route("/more", post(load_more))
        .route("/reset", post(reset_catalog))
        .route("/events", get(catalog_events))
}

/// Entries loaded so far
#[utoipa::path(
    get,
    path = "/api/v1/catalog",
    tag = "catalog",
    responses(
        (status = 200, description = "Loaded catalog entries", body = CatalogResponse)
    )
)]
pub async fn get_catalog(State(state): State<SharedState>) -> Json<CatalogResponse> {
    Json(state.pokedex.catalog().snapshot().await.into())
}

/// Load the next page (ignored while a page is already loading)
#[utoipa::path(
    post,
    path = "/api/v1/catalog/more",
    tag = "catalog",
    responses(
        (status = 200, description = "Result of the load request", body = LoadMoreResponse)
    )
)]
pub async fn load_more(State(state): State<SharedState>) -> Json<LoadMoreResponse> {
    let catalog = state.pokedex.catalog();
    let (outcome, appended) = match catalog.load_more().await {
        LoadOutcome::Appended { count } => ("appended", count),
        LoadOutcome::Suppressed => ("suppressed", 0),
        LoadOutcome::Discarded { .. } => ("discarded", 0),
    };

    Json(LoadMoreResponse {
        outcome: outcome.to_string(),
        appended,
        total: catalog.len().await,
    })
}

/// Clear the catalog and start again from the first page
#[utoipa::path(
    post,
    path = "/api/v1/catalog/reset",
    tag = "catalog",
    responses(
        (status = 200, description = "Catalog cleared", body = ApiResponse)
    )
)]
pub async fn reset_catalog(State(state): State<SharedState>) -> Json<ApiResponse> {
    state.pokedex.catalog().reset().await;
    Json(ApiResponse {
        success: true,
        message: "Catalog cleared".to_string(),
    })
}

/// SSE stream of catalog load events with heartbeat
pub async fn catalog_events(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.event_tx.subscribe();

    let stream = stream::unfold(rx, |mut rx| async move {
        loop {
            match tokio::time::timeout(Duration::from_secs(15), rx.recv()).await {
                Ok(Ok(event)) => {
                    let json = serde_json::to_string(&event).unwrap_or_default();
                    return Some((Ok(Event::default().data(json)), rx));
                }
                // Slow subscriber; skip what was dropped
                Ok(Err(RecvError::Lagged(_))) => continue,
                Ok(Err(RecvError::Closed)) => return None,
                Err(_) => return Some((Ok(Event::default().comment("heartbeat")), rx)),
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
