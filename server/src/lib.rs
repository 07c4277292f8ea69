//! PantryFinder Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: HTTP handlers
//! - geocode: Address lookup against a Nominatim-compatible service

use std::path::Path;
use std::sync::Arc;

use axum::http::Method;
use axum::routing::{delete, get};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod domain;
pub mod geocode;
pub mod repository;
pub mod state;
mod commands;

use commands::{
    create_candidate, create_pantry, delete_pantry, geocode_address, healthz, list_candidates,
    list_pantries, list_politicians,
};
use config::Config;
use geocode::NominatimGeocoder;
use repository::{apply_seed, init_db, SeedFile};
use state::AppState;

/// Routes served under the API prefix
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/pantries", get(list_pantries).post(create_pantry))
        .route("/pantries/:id", delete(delete_pantry))
        .route("/politicians", get(list_politicians))
        .route("/candidates", get(list_candidates).post(create_candidate))
        .route("/geocode", get(geocode_address))
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS]);

    let app = Router::new().route("/healthz", get(healthz));
    let app = if config.api_prefix == "/" {
        app.merge(api_routes())
    } else {
        app.nest(&config.api_prefix, api_routes())
    };
    let mut app = app.with_state(state);

    if let Some(dir) = &config.static_dir {
        info!("serving static files from {}", dir.display());
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).fallback(index));
    }

    app.layer(cors).layer(TraceLayer::new_for_http())
}

pub async fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load();

    let db = match init_db(&config.database_path).await {
        Ok(db) => db,
        Err(e) => {
            error!("failed to open database: {e}; falling back to an in-memory store");
            match init_db(Path::new(":memory:")).await {
                Ok(db) => db,
                Err(e) => {
                    error!("in-memory database unavailable: {e}");
                    std::process::exit(1);
                }
            }
        }
    };

    let state = AppState::new(&db, Arc::new(NominatimGeocoder::new(&config.geocoder_url)));

    if let Some(path) = &config.seed_file {
        let seeded = match SeedFile::read(path) {
            Ok(seed) => apply_seed(&seed, &state.pantry_repo, &state.politician_repo).await,
            Err(e) => Err(e),
        };
        if let Err(e) = seeded {
            warn!("seed import skipped: {e}");
        }
    }

    let app = build_router(state, &config);

    let listener = match TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {}: {e}", config.addr);
            std::process::exit(1);
        }
    };
    info!("listening on {} with API under {}", config.addr, config.api_prefix);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {e}");
    }

    info!("server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
