//! Daily news generation.
//!
//! Every simulated day produces 1-3 company items drawn from fixed template
//! tables, with a 20% chance of one additional market-wide item on top.

use crate::services::sampler::Sampler;
use crate::types::{Company, NewsItem};

/// Upper bound on company-specific items per day.
pub const MAX_NEWS_PER_DAY: usize = 3;

/// Probability of one market-wide item per day.
pub const MARKET_NEWS_CHANCE: f64 = 0.2;

struct NewsTemplate {
    headline: &'static str,
    impact: f64,
}

const POSITIVE: &[NewsTemplate] = &[
    NewsTemplate { headline: "{company} Reports Record Quarterly Profits", impact: 0.15 },
    NewsTemplate { headline: "{company} Announces Revolutionary New Product", impact: 0.2 },
    NewsTemplate { headline: "{company} Expands into New Markets", impact: 0.1 },
    NewsTemplate { headline: "{company} Exceeds Analyst Expectations", impact: 0.12 },
    NewsTemplate { headline: "Investors Bullish on {company}'s Future", impact: 0.08 },
    NewsTemplate { headline: "{company} Secures Major Partnership Deal", impact: 0.15 },
    NewsTemplate { headline: "{company} Stock Upgraded by Analysts", impact: 0.1 },
];

const NEGATIVE: &[NewsTemplate] = &[
    NewsTemplate { headline: "{company} Faces Regulatory Investigation", impact: -0.18 },
    NewsTemplate { headline: "{company} Recalls Defective Products", impact: -0.15 },
    NewsTemplate { headline: "{company} CEO Steps Down Amid Controversy", impact: -0.2 },
    NewsTemplate { headline: "{company} Reports Disappointing Earnings", impact: -0.12 },
    NewsTemplate { headline: "{company} Loses Key Client", impact: -0.1 },
    NewsTemplate { headline: "Analysts Downgrade {company} Stock", impact: -0.08 },
    NewsTemplate { headline: "{company} Faces Increased Competition", impact: -0.1 },
];

const NEUTRAL: &[NewsTemplate] = &[
    NewsTemplate { headline: "{company} Announces Leadership Restructuring", impact: 0.03 },
    NewsTemplate { headline: "{company} to Present at Industry Conference", impact: 0.02 },
    NewsTemplate { headline: "{company} Maintains Current Outlook", impact: 0.01 },
    NewsTemplate { headline: "{company} Releases Sustainability Report", impact: 0.02 },
    NewsTemplate { headline: "{company} Updates Corporate Policies", impact: 0.01 },
];

const MARKET: &[NewsTemplate] = &[
    NewsTemplate { headline: "Market Rallies on Economic Data", impact: 0.05 },
    NewsTemplate { headline: "Investors Concerned About Inflation", impact: -0.05 },
    NewsTemplate { headline: "Central Bank Adjusts Interest Rates", impact: -0.03 },
    NewsTemplate { headline: "Economic Growth Exceeds Expectations", impact: 0.04 },
    NewsTemplate { headline: "Global Trade Tensions Escalate", impact: -0.06 },
];

fn news_body(headline: &str) -> String {
    format!(
        "{}. Analysts are closely watching how this development will impact \
         the company's financial performance and market position in the \
         coming quarters.",
        headline
    )
}

fn make_item(headline: String, affected: Vec<String>, sentiment: f64) -> NewsItem {
    NewsItem {
        id: uuid::Uuid::new_v4().to_string(),
        body: news_body(&headline),
        headline,
        affected_companies: affected,
        sentiment,
        timestamp: chrono::Utc::now().timestamp_millis(),
    }
}

/// Generate one day's news for the given roster.
///
/// Draws 1-3 company items; with probability [`MARKET_NEWS_CHANCE`] a
/// market-wide item (affecting the whole roster) is prepended on top of
/// that count. An empty roster yields no company items, so the result can
/// be empty.
pub fn generate_news(companies: &[Company], sampler: &mut dyn Sampler) -> Vec<NewsItem> {
    let count = sampler.index(MAX_NEWS_PER_DAY) + 1;
    let mut news = Vec::with_capacity(count + 1);

    if sampler.uniform(0.0, 1.0) < MARKET_NEWS_CHANCE {
        let template = &MARKET[sampler.index(MARKET.len())];
        let affected = companies.iter().map(|c| c.id.clone()).collect();
        news.push(make_item(
            template.headline.to_string(),
            affected,
            template.impact,
        ));
    }

    if companies.is_empty() {
        return news;
    }

    for _ in 0..count {
        let company = &companies[sampler.index(companies.len())];
        let roll = sampler.uniform(0.0, 1.0);
        let table = if roll < 0.33 {
            POSITIVE
        } else if roll < 0.66 {
            NEGATIVE
        } else {
            NEUTRAL
        };
        let template = &table[sampler.index(table.len())];
        let headline = template.headline.replace("{company}", &company.name);
        news.push(make_item(
            headline,
            vec![company.id.clone()],
            template.impact,
        ));
    }

    news
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::initial_companies;
    use crate::services::sampler::{SequenceSampler, ThreadSampler};

    #[test]
    fn test_template_tables_sized_like_the_source() {
        assert_eq!(POSITIVE.len(), 7);
        assert_eq!(NEGATIVE.len(), 7);
        assert_eq!(NEUTRAL.len(), 5);
        assert_eq!(MARKET.len(), 5);
    }

    #[test]
    fn test_sentiment_signs() {
        assert!(POSITIVE.iter().all(|t| t.impact > 0.0));
        assert!(NEGATIVE.iter().all(|t| t.impact < 0.0));
        assert!(NEUTRAL.iter().all(|t| t.impact > 0.0 && t.impact <= 0.03));
    }

    #[test]
    fn test_scripted_single_positive_item() {
        let companies = initial_companies();
        // count draw 0 (-> 1 item), market roll 0.9 (no market item),
        // company index 0, sentiment roll 0.1 (positive), template index 1.
        let mut sampler = SequenceSampler::new([0.9, 0.1], [0, 0, 1]);
        let news = generate_news(&companies, &mut sampler);

        assert_eq!(news.len(), 1);
        assert_eq!(
            news[0].headline,
            "NexaTech Solutions Announces Revolutionary New Product"
        );
        assert_eq!(news[0].sentiment, 0.2);
        assert_eq!(news[0].affected_companies, vec!["tech-1".to_string()]);
        assert!(news[0].body.starts_with(&news[0].headline));
    }

    #[test]
    fn test_scripted_market_item_is_on_top_of_count() {
        let companies = initial_companies();
        // count draw 2 (-> 3 items), market roll 0.05 (fires), market
        // template 4, then three company items (neutral, negative, neutral).
        let mut sampler = SequenceSampler::new(
            [0.05, 0.7, 0.5, 0.99],
            [2, 4, 0, 0, 1, 0, 2, 4],
        );
        let news = generate_news(&companies, &mut sampler);

        assert_eq!(news.len(), 4);
        assert_eq!(news[0].headline, "Global Trade Tensions Escalate");
        assert_eq!(news[0].sentiment, -0.06);
        assert_eq!(news[0].affected_companies.len(), companies.len());
    }

    #[test]
    fn test_sentiment_category_boundaries() {
        let companies = initial_companies();
        // Rolls of exactly 0.33 and 0.66 land in negative and neutral.
        let mut sampler = SequenceSampler::new([0.9, 0.33, 0.66], [1, 0, 0, 0, 0]);
        let news = generate_news(&companies, &mut sampler);
        assert_eq!(news.len(), 2);
        assert!(news[0].sentiment < 0.0);
        assert!(news[1].sentiment > 0.0 && news[1].sentiment <= 0.03);
    }

    #[test]
    fn test_empty_roster_yields_no_company_items() {
        let mut sampler = SequenceSampler::new([0.9], [2]);
        let news = generate_news(&[], &mut sampler);
        assert!(news.is_empty());
    }

    #[test]
    fn test_company_count_always_one_to_three() {
        let companies = initial_companies();
        for _ in 0..200 {
            let news = generate_news(&companies, &mut ThreadSampler);
            let company_items = news
                .iter()
                .filter(|n| n.affected_companies.len() == 1)
                .count();
            assert!((1..=MAX_NEWS_PER_DAY).contains(&company_items));
            assert!(news.len() <= MAX_NEWS_PER_DAY + 1);
        }
    }
}
