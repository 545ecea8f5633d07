//! Bourse - simulated stock-market game server
//!
//! Keeps one in-memory game state (companies, prices, portfolio, news) and
//! serves it over HTTP: fetch/replace the state, advance simulated time by
//! one day, and trade against current prices.

pub mod api;
pub mod config;
pub mod services;
pub mod types;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use services::GameStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<GameStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = GameStore::new(config.starting_cash);
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

/// Build the application router with CORS and request tracing applied.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
