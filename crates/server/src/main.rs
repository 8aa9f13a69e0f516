//! Pokédex Server
//!
//! Axum server exposing the browse screen's data (catalog pages, search,
//! detail views with evolution chains) as JSON, plus CLI subcommands that
//! run the same flows from a terminal.

mod api;
mod cli;

use axum::{
    body::Body,
    http::{header, Response, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use pokedex_core::catalog::{CatalogEvent, LoadOutcome};
use pokedex_core::{Pokedex, PokedexConfig};
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::broadcast};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use api::catalog::{self as catalog_api, catalog_routes};
use api::pokemon::{self as pokemon_api, pokemon_routes};

/// Application state
pub struct AppState {
    pokedex: Pokedex,
    event_tx: broadcast::Sender<CatalogEvent>,
}

pub type SharedState = Arc<AppState>;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pokédex API",
        version = "1.0.0",
        description = "Catalog, search and evolution chains backed by PokeAPI"
    ),
    paths(
        catalog_api::get_catalog,
        catalog_api::load_more,
        catalog_api::reset_catalog,
        pokemon_api::search,
        pokemon_api::get_pokemon
    ),
    components(
        schemas(
            api::ApiResponse,
            api::ApiError,
            catalog_api::EntryResponse,
            catalog_api::CatalogResponse,
            catalog_api::LoadMoreResponse,
            pokemon_api::DetailResponse,
            pokemon_api::EvolutionResponse,
            pokemon_api::ViewResponse
        )
    ),
    tags(
        (name = "catalog", description = "Paginated catalog"),
        (name = "pokemon", description = "Search and detail views")
    )
)]
struct ApiDoc;

#[derive(Parser, Clone)]
#[command(author, version, about = "Pokédex - PokeAPI catalog browser")]
struct Args {
    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

/// Flags layered over the file/env configuration
#[derive(ClapArgs, Clone, Default)]
struct ConfigOverrides {
    /// PokeAPI root, e.g. https://pokeapi.co/api/v2
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Entries per catalog page
    #[arg(long, global = true)]
    page_size: Option<usize>,
}

impl ConfigOverrides {
    fn apply(&self, mut config: PokedexConfig) -> PokedexConfig {
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(page_size) = self.page_size {
            config = config.with_page_size(page_size);
        }
        config
    }
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Start the HTTP server (default)
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
    /// Print the first pages of the catalog
    List {
        /// Number of pages to load
        #[arg(short = 'n', long, default_value = "1")]
        pages: usize,
    },
    /// Look up a Pokémon by name
    Search {
        term: String,
    },
    /// Show a Pokémon with its evolution chain
    Show {
        name: String,
    },
}

async fn serve_openapi() -> impl IntoResponse {
    let spec = ApiDoc::openapi().to_json().unwrap_or_default();
    Response::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(spec))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

fn router(state: SharedState) -> Router {
    Router::new()
        .nest("/api/v1/catalog", catalog_routes())
        .nest("/api/v1/pokemon", pokemon_routes())
        .route("/api/v1/search", get(pokemon_api::search))
        .route("/api/v1/openapi.json", get(serve_openapi))
        .route("/health", get(health))
        .with_state(state)
}

async fn run_server(pokedex: Pokedex, port: u16) -> anyhow::Result<()> {
    let (event_tx, _) = broadcast::channel::<CatalogEvent>(100);
    let pokedex = pokedex.with_catalog_events(event_tx.clone());
    let state = Arc::new(AppState { pokedex, event_tx });

    // First page, like the screen's initial load
    let catalog = Arc::clone(state.pokedex.catalog());
    tokio::spawn(async move {
        match catalog.load_more().await {
            LoadOutcome::Discarded { reason } => {
                tracing::warn!(%reason, "initial catalog load failed")
            }
            outcome => tracing::info!(?outcome, "initial catalog load"),
        }
    });

    let app = router(state);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!(%addr, "Pokédex server listening");
    tracing::info!("routes: /api/v1/catalog[/more|/reset|/events], /api/v1/search, /api/v1/pokemon/:name");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init (tests) is harmless
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = Args::parse();
    let config = args.overrides.apply(PokedexConfig::load().await?);
    let pokedex = Pokedex::connect(config)?;

    match args.command {
        Some(CliCommand::List { pages }) => cli::list(&pokedex, pages).await,
        Some(CliCommand::Search { term }) => cli::search(&pokedex, &term).await,
        Some(CliCommand::Show { name }) => cli::show(&pokedex, &name).await,
        Some(CliCommand::Serve { port }) => run_server(pokedex, port).await,
        None => run_server(pokedex, 8080).await,
    }
}
