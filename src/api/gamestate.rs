//! Game State API
//!
//! - GET  /api/gamestate   - fetch the full game state
//! - POST /api/gamestate   - replace the game state wholesale
//! - POST /api/advance-day - run one day of simulation
//! - POST /api/reset       - start a fresh game

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::types::GameState;
use crate::AppState;

/// Create the game-state router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/gamestate",
            get(get_gamestate).post(replace_gamestate),
        )
        .route("/api/advance-day", post(advance_day))
        .route("/api/reset", post(reset))
}

/// GET /api/gamestate
async fn get_gamestate(State(state): State<AppState>) -> Json<GameState> {
    Json(state.store.snapshot().await)
}

/// POST /api/gamestate
///
/// Replaces the singleton with the supplied state. The typed extractor
/// rejects payloads that do not deserialize into a `GameState`.
async fn replace_gamestate(
    State(state): State<AppState>,
    Json(next): Json<GameState>,
) -> Json<GameState> {
    Json(state.store.replace(next).await)
}

/// POST /api/advance-day
async fn advance_day(State(state): State<AppState>) -> Json<GameState> {
    Json(state.store.advance().await)
}

/// POST /api/reset
async fn reset(State(state): State<AppState>) -> Json<GameState> {
    Json(state.store.reset().await)
}
