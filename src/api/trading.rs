//! Trading API
//!
//! - POST /api/trading/buy  - buy shares at the current price
//! - POST /api/trading/sell - sell shares at the current price

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::services::TradeError;
use crate::types::GameState;
use crate::AppState;

/// Create the trading router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/buy", post(buy))
        .route("/sell", post(sell))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    pub company_id: String,
    pub shares: f64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Convert TradeError to HTTP response.
impl IntoResponse for TradeError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match &self {
            TradeError::CompanyNotFound(_) => (StatusCode::NOT_FOUND, "COMPANY_NOT_FOUND"),
            TradeError::NonPositiveShares => (StatusCode::BAD_REQUEST, "NON_POSITIVE_SHARES"),
            TradeError::InsufficientFunds { .. } => {
                (StatusCode::BAD_REQUEST, "INSUFFICIENT_FUNDS")
            }
            TradeError::InsufficientShares { .. } => {
                (StatusCode::BAD_REQUEST, "INSUFFICIENT_SHARES")
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

/// POST /api/trading/buy
async fn buy(
    State(state): State<AppState>,
    Json(request): Json<TradeRequest>,
) -> Result<Json<GameState>, TradeError> {
    let updated = state.store.buy(&request.company_id, request.shares).await?;
    Ok(Json(updated))
}

/// POST /api/trading/sell
async fn sell(
    State(state): State<AppState>,
    Json(request): Json<TradeRequest>,
) -> Result<Json<GameState>, TradeError> {
    let updated = state.store.sell(&request.company_id, request.shares).await?;
    Ok(Json(updated))
}
