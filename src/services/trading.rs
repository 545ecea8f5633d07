//! Trading Service
//!
//! Buy and sell validation and execution against the game state: cost
//! basis tracking with share-weighted average purchase price, an
//! append-only transaction log, and immediate revaluation at current
//! prices.

use thiserror::Error;
use tracing::info;

use crate::services::market::revalue_portfolio;
use crate::types::{GameState, Holding, Transaction, TransactionKind};

/// Trading errors.
#[derive(Debug, Error)]
pub enum TradeError {
    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    #[error("Share count must be positive")]
    NonPositiveShares,

    #[error("Insufficient funds: need {needed:.2}, have {available:.2}")]
    InsufficientFunds { needed: f64, available: f64 },

    #[error("Insufficient shares: need {needed}, have {available}")]
    InsufficientShares { needed: f64, available: f64 },
}

fn record(
    state: &mut GameState,
    kind: TransactionKind,
    company_id: &str,
    company_name: &str,
    shares: f64,
    price: f64,
) {
    state.portfolio.transaction_history.push(Transaction {
        id: uuid::Uuid::new_v4().to_string(),
        kind,
        company_id: company_id.to_string(),
        company_name: company_name.to_string(),
        shares,
        price_per_share: price,
        total_amount: shares * price,
        timestamp: chrono::Utc::now().timestamp_millis(),
    });
}

/// Buy shares at the current price.
///
/// Fails without touching the portfolio if the share count is not positive,
/// the company is unknown, or the cost exceeds available cash. On success
/// the holding's average purchase price is the share-weighted mean across
/// all buys.
pub fn buy(state: &mut GameState, company_id: &str, shares: f64) -> Result<(), TradeError> {
    if shares <= 0.0 {
        return Err(TradeError::NonPositiveShares);
    }

    let company = state
        .companies
        .iter()
        .find(|c| c.id == company_id)
        .ok_or_else(|| TradeError::CompanyNotFound(company_id.to_string()))?;
    let price = company.current_price;
    let name = company.name.clone();

    let cost = price * shares;
    if cost > state.portfolio.cash {
        return Err(TradeError::InsufficientFunds {
            needed: cost,
            available: state.portfolio.cash,
        });
    }

    state.portfolio.cash -= cost;
    let holding = state
        .portfolio
        .holdings
        .entry(company_id.to_string())
        .or_insert(Holding {
            shares: 0.0,
            average_purchase_price: 0.0,
        });
    let total_shares = holding.shares + shares;
    let total_invested = holding.shares * holding.average_purchase_price + cost;
    holding.shares = total_shares;
    holding.average_purchase_price = total_invested / total_shares;

    record(state, TransactionKind::Buy, company_id, &name, shares, price);
    revalue_portfolio(&mut state.portfolio, &state.companies);

    info!(company = company_id, shares, price, "buy executed");
    Ok(())
}

/// Sell shares at the current price.
///
/// Fails without touching the portfolio if the share count is not positive,
/// the company is unknown, or fewer shares are held than requested. Selling
/// an entire position removes the holding.
pub fn sell(state: &mut GameState, company_id: &str, shares: f64) -> Result<(), TradeError> {
    if shares <= 0.0 {
        return Err(TradeError::NonPositiveShares);
    }

    let company = state
        .companies
        .iter()
        .find(|c| c.id == company_id)
        .ok_or_else(|| TradeError::CompanyNotFound(company_id.to_string()))?;
    let price = company.current_price;
    let name = company.name.clone();

    let held = state
        .portfolio
        .holdings
        .get(company_id)
        .map(|h| h.shares)
        .unwrap_or(0.0);
    if held < shares {
        return Err(TradeError::InsufficientShares {
            needed: shares,
            available: held,
        });
    }

    state.portfolio.cash += price * shares;
    if held == shares {
        state.portfolio.holdings.remove(company_id);
    } else if let Some(holding) = state.portfolio.holdings.get_mut(company_id) {
        holding.shares -= shares;
    }

    record(state, TransactionKind::Sell, company_id, &name, shares, price);
    revalue_portfolio(&mut state.portfolio, &state.companies);

    info!(company = company_id, shares, price, "sell executed");
    Ok(())
}
