use serde::{Deserialize, Serialize};

/// A listed company in the simulated market.
///
/// Identity fields never change after creation; `current_price` and
/// `price_history` are advanced once per simulated day. The history keeps
/// the raw (unclamped) price while `current_price` is floored at
/// [`MIN_PRICE`](crate::services::market::MIN_PRICE).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub description: String,
    pub sector: String,
    pub initial_price: f64,
    pub current_price: f64,
    #[serde(default)]
    pub price_history: Vec<f64>,
    /// Multiplier in (0, 1] amplifying news sentiment on this stock.
    pub volatility: f64,
}

impl Company {
    /// Daily return implied by the last two history points, if available.
    pub fn last_return(&self) -> Option<f64> {
        let n = self.price_history.len();
        if n > 1 {
            let prev = self.price_history[n - 2];
            Some((self.price_history[n - 1] - prev) / prev)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(history: Vec<f64>) -> Company {
        Company {
            id: "tech-1".to_string(),
            name: "NexaTech Solutions".to_string(),
            ticker: "NTS".to_string(),
            description: "Cloud computing".to_string(),
            sector: "Technology".to_string(),
            initial_price: 100.0,
            current_price: *history.last().unwrap_or(&100.0),
            price_history: history,
            volatility: 0.8,
        }
    }

    #[test]
    fn test_last_return() {
        let c = company(vec![100.0, 110.0]);
        let r = c.last_return().unwrap();
        assert!((r - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_last_return_needs_two_points() {
        assert!(company(vec![100.0]).last_return().is_none());
        assert!(company(vec![]).last_return().is_none());
    }

    #[test]
    fn test_serde_field_names() {
        let c = company(vec![100.0]);
        let json = serde_json::to_value(&c).unwrap();
        assert!(json.get("initialPrice").is_some());
        assert!(json.get("currentPrice").is_some());
        assert!(json.get("priceHistory").is_some());
        assert!(json.get("volatility").is_some());
        assert!(json.get("initial_price").is_none());
    }
}
