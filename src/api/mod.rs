pub mod gamestate;
pub mod health;
pub mod trading;

use crate::AppState;
use axum::Router;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(gamestate::router())
        .nest("/api/trading", trading::router())
}
