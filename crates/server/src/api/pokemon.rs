//! # Pokémon API
//!
//! Search by name and the detail view (record + evolution chain).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pokedex_core::{DetailRecord, DetailViewModel, EvolutionNode};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::ApiError;
use crate::SharedState;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Name to look up; trimmed and lower-cased
    #[serde(default)]
    pub term: String,
}

#[derive(Serialize, ToSchema)]
pub struct DetailResponse {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    pub types: Vec<String>,
    pub weight_kg: f64,
    pub height_m: f64,
    pub abilities: Vec<String>,
}

impl From<DetailRecord> for DetailResponse {
    fn from(record: DetailRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            image_url: record.image_url,
            types: record.types,
            weight_kg: record.weight_kg,
            height_m: record.height_m,
            abilities: record.abilities,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct EvolutionResponse {
    pub name: String,
    pub image_url: String,
}

impl From<EvolutionNode> for EvolutionResponse {
    fn from(node: EvolutionNode) -> Self {
        Self {
            name: node.name,
            image_url: node.image_url,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ViewResponse {
    pub detail: DetailResponse,
    /// Base form first; empty when the chain could not be resolved
    pub evolutions: Vec<EvolutionResponse>,
}

impl From<DetailViewModel> for ViewResponse {
    fn from(view: DetailViewModel) -> Self {
        Self {
            detail: view.detail.into(),
            evolutions: view.evolutions.into_iter().map(Into::into).collect(),
        }
    }
}

pub fn pokemon_routes() -> Router<SharedState> {
    Router::new().route("/:name", get(get_pokemon))
}

/// Search by exact name
#[utoipa::path(
    get,
    path = "/api/v1/search",
    tag = "pokemon",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching Pokémon", body = DetailResponse),
        (status = 204, description = "Blank search term, nothing looked up"),
        (status = 404, description = "No Pokémon with that name", body = ApiError),
        (status = 502, description = "PokeAPI unreachable", body = ApiError)
    )
)]
pub async fn search(
    State(state): State<SharedState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, ApiError> {
    match state.pokedex.search().search(&query.term).await? {
        Some(record) => Ok(Json(DetailResponse::from(record)).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Detail view with evolution chain
#[utoipa::path(
    get,
    path = "/api/v1/pokemon/{name}",
    tag = "pokemon",
    params(("name" = String, Path, description = "Pokémon name")),
    responses(
        (status = 200, description = "Detail and evolutions", body = ViewResponse),
        (status = 404, description = "No Pokémon with that name", body = ApiError),
        (status = 502, description = "PokeAPI unreachable", body = ApiError)
    )
)]
pub async fn get_pokemon(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<ViewResponse>, ApiError> {
    let view = state.pokedex.view(&name).await?;
    Ok(Json(view.into()))
}
