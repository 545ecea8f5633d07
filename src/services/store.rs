//! Game State Store
//!
//! Owns the process-wide game state singleton behind a single writer lock.
//! Every mutation (replace, advance, trade, reset) goes through this store,
//! so each operation is atomic from the perspective of concurrent requests.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::services::catalog::initial_state;
use crate::services::market::advance_day;
use crate::services::sampler::ThreadSampler;
use crate::services::trading::{self, TradeError};
use crate::types::GameState;

/// The state singleton plus what is needed to rebuild it from scratch.
pub struct GameStore {
    state: RwLock<GameState>,
    starting_cash: f64,
}

impl GameStore {
    /// Create a store holding a fresh day-1 state.
    pub fn new(starting_cash: f64) -> Arc<Self> {
        Arc::new(Self {
            state: RwLock::new(initial_state(starting_cash)),
            starting_cash,
        })
    }

    /// A clone of the current state.
    pub async fn snapshot(&self) -> GameState {
        self.state.read().await.clone()
    }

    /// Replace the state wholesale with a client-supplied one.
    pub async fn replace(&self, next: GameState) -> GameState {
        let mut guard = self.state.write().await;
        info!(day = next.day, companies = next.companies.len(), "game state replaced");
        *guard = next;
        guard.clone()
    }

    /// Run one day of simulation and return the updated state.
    pub async fn advance(&self) -> GameState {
        let mut guard = self.state.write().await;
        advance_day(&mut guard, &mut ThreadSampler);
        info!(
            day = guard.day,
            trend = guard.market_trend,
            net_worth = guard.portfolio.net_worth,
            "advanced one day"
        );
        guard.clone()
    }

    /// Throw the current game away and start over from the catalog.
    pub async fn reset(&self) -> GameState {
        let mut guard = self.state.write().await;
        *guard = initial_state(self.starting_cash);
        info!("game reset");
        guard.clone()
    }

    /// Buy shares at the current price.
    pub async fn buy(&self, company_id: &str, shares: f64) -> Result<GameState, TradeError> {
        let mut guard = self.state.write().await;
        trading::buy(&mut guard, company_id, shares)?;
        Ok(guard.clone())
    }

    /// Sell shares at the current price.
    pub async fn sell(&self, company_id: &str, shares: f64) -> Result<GameState, TradeError> {
        let mut guard = self.state.write().await;
        trading::sell(&mut guard, company_id, shares)?;
        Ok(guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_is_stable_without_mutation() {
        let store = GameStore::new(100_000.0);
        let a = serde_json::to_string(&store.snapshot().await).unwrap();
        let b = serde_json::to_string(&store.snapshot().await).unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_advance_then_reset() {
        let store = GameStore::new(100_000.0);

        let advanced = store.advance().await;
        assert_eq!(advanced.day, 2);

        let fresh = store.reset().await;
        assert_eq!(fresh.day, 1);
        assert_eq!(fresh.portfolio.cash, 100_000.0);
        assert!(fresh.news.is_empty());
        assert!(fresh
            .companies
            .iter()
            .all(|c| c.price_history.len() == 1));
    }

    #[tokio::test]
    async fn test_replace_round_trips() {
        let store = GameStore::new(100_000.0);
        let mut custom = store.snapshot().await;
        custom.day = 42;
        custom.portfolio.cash = 5.0;

        let replaced = store.replace(custom).await;
        assert_eq!(replaced.day, 42);
        assert_eq!(store.snapshot().await.portfolio.cash, 5.0);
    }

    #[tokio::test]
    async fn test_store_trades() {
        let store = GameStore::new(100_000.0);
        let after_buy = store.buy("tech-1", 10.0).await.unwrap();
        assert!(after_buy.portfolio.holdings.contains_key("tech-1"));

        let after_sell = store.sell("tech-1", 10.0).await.unwrap();
        assert!(!after_sell.portfolio.holdings.contains_key("tech-1"));

        assert!(store.sell("tech-1", 1.0).await.is_err());
    }
}
