//! Portfolio Types
//!
//! The player's cash, holdings, and transaction log. Net worth is a derived
//! field, recomputed after every day advance and every trade.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Buy,
    Sell,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Buy => write!(f, "buy"),
            TransactionKind::Sell => write!(f, "sell"),
        }
    }
}

/// Shares held in one company, with the share-weighted average price paid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub shares: f64,
    #[serde(default)]
    pub average_purchase_price: f64,
}

/// One executed trade, appended to the portfolio's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub company_id: String,
    pub company_name: String,
    pub shares: f64,
    pub price_per_share: f64,
    pub total_amount: f64,
    /// Unix milliseconds.
    pub timestamp: i64,
}

/// The player's portfolio.
///
/// `holdings` maps company id to position; companies with zero shares are
/// removed rather than kept at zero. `net_worth` is cash plus holdings
/// marked at current prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub cash: f64,
    #[serde(default)]
    pub holdings: HashMap<String, Holding>,
    #[serde(default)]
    pub transaction_history: Vec<Transaction>,
    #[serde(default)]
    pub net_worth: f64,
}

impl Portfolio {
    /// A fresh portfolio holding only cash.
    pub fn with_cash(cash: f64) -> Self {
        Self {
            cash,
            holdings: HashMap::new(),
            transaction_history: Vec::new(),
            net_worth: cash,
        }
    }
}
