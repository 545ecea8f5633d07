use serde::{Deserialize, Serialize};

/// A generated news item. Immutable once created.
///
/// `affected_companies` holds the ids the item applies to; an item listing
/// the entire roster is market-wide and hits every stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub headline: String,
    pub body: String,
    pub affected_companies: Vec<String>,
    /// Signed price impact, scaled by each affected company's volatility.
    pub sentiment: f64,
    /// Unix milliseconds.
    pub timestamp: i64,
}

impl NewsItem {
    /// Whether this item moves the company with the given id, given the
    /// total roster size (full-roster items are market-wide).
    pub fn applies_to(&self, company_id: &str, roster_size: usize) -> bool {
        self.affected_companies.iter().any(|id| id == company_id)
            || self.affected_companies.len() == roster_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(affected: Vec<&str>) -> NewsItem {
        NewsItem {
            id: "n1".to_string(),
            headline: "Headline".to_string(),
            body: "Body".to_string(),
            affected_companies: affected.into_iter().map(String::from).collect(),
            sentiment: 0.1,
            timestamp: 0,
        }
    }

    #[test]
    fn test_applies_to_direct_mention() {
        let n = item(vec!["tech-1"]);
        assert!(n.applies_to("tech-1", 8));
        assert!(!n.applies_to("tech-2", 8));
    }

    #[test]
    fn test_market_wide_applies_to_everyone() {
        let n = item(vec!["a", "b", "c"]);
        assert!(n.applies_to("d", 3));
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(item(vec!["tech-1"])).unwrap();
        assert!(json.get("affectedCompanies").is_some());
        assert!(json.get("sentiment").is_some());
        assert!(json.get("timestamp").is_some());
    }
}
