//! Market Simulation
//!
//! The day-advance core: a bounded random price walk shaped by the prior
//! market trend and the day's news, a trend estimate derived from the
//! resulting price history, and portfolio revaluation.
//!
//! Two different trend values exist on every advance: the perturbed
//! pre-day trend that drives the price walk, and the trend recomputed from
//! the updated history that is stored for the next day. `update_prices`
//! returns the former; `market_trend` produces the latter.

use tracing::debug;

use crate::services::news::generate_news;
use crate::services::sampler::Sampler;
use crate::types::{Company, GameState, NewsItem, Portfolio};

/// Base daily fluctuation: uniform(-1, 1) scaled by this.
pub const BASE_MARKET_FLUCTUATION: f64 = 0.02;

/// Weight of the day's trend in each company's price change.
pub const TREND_WEIGHT: f64 = 0.01;

/// Daily perturbation applied to the prior trend before the walk.
pub const TREND_DRIFT: f64 = 0.1;

/// Scale factor turning the mean last-step return into a trend signal.
pub const TREND_SCALE: f64 = 5.0;

/// Prices never fall below one cent.
pub const MIN_PRICE: f64 = 0.01;

/// How many news items the rolling buffer retains.
pub const NEWS_BUFFER_CAP: usize = 10;

/// Apply one day's price movement to every company.
///
/// The prior trend is perturbed once by `uniform(-TREND_DRIFT, TREND_DRIFT)`
/// and clamped to [-1, 1]; that shared value feeds every company's walk.
/// Each company then moves by base fluctuation + trend influence + the
/// sentiment (scaled by volatility) of every news item that applies to it.
///
/// The raw new price is appended to the history; `current_price` is the
/// same value floored at [`MIN_PRICE`]. The asymmetry is deliberate: the
/// trend estimator reads history, not the clamped price.
///
/// Returns the perturbed trend that drove the walk.
pub fn update_prices(
    companies: &mut [Company],
    prior_trend: f64,
    news: &[NewsItem],
    sampler: &mut dyn Sampler,
) -> f64 {
    let day_trend = (prior_trend + sampler.uniform(-TREND_DRIFT, TREND_DRIFT)).clamp(-1.0, 1.0);
    let roster_size = companies.len();

    for company in companies.iter_mut() {
        let mut change = sampler.uniform(-1.0, 1.0) * BASE_MARKET_FLUCTUATION
            + day_trend * TREND_WEIGHT;

        for item in news {
            if item.applies_to(&company.id, roster_size) {
                change += item.sentiment * company.volatility;
            }
        }

        let new_price = company.current_price * (1.0 + change);
        company.price_history.push(new_price);
        company.current_price = new_price.max(MIN_PRICE);
    }

    day_trend
}

/// Estimate the market trend from the latest price moves.
///
/// Mean of each company's last-step return, scaled by [`TREND_SCALE`] and
/// clamped to [-1, 1]. Companies with fewer than two history points
/// contribute nothing; an empty roster yields 0.
pub fn market_trend(companies: &[Company]) -> f64 {
    if companies.is_empty() {
        return 0.0;
    }

    let total_change: f64 = companies.iter().filter_map(Company::last_return).sum();
    (total_change / companies.len() as f64 * TREND_SCALE).clamp(-1.0, 1.0)
}

/// Recompute net worth: cash plus holdings marked at current prices.
///
/// A holding whose company id is not in the roster contributes nothing.
pub fn revalue_portfolio(portfolio: &mut Portfolio, companies: &[Company]) {
    let stock_value: f64 = portfolio
        .holdings
        .iter()
        .filter_map(|(company_id, holding)| {
            companies
                .iter()
                .find(|c| &c.id == company_id)
                .map(|c| holding.shares * c.current_price)
        })
        .sum();
    portfolio.net_worth = portfolio.cash + stock_value;
}

/// Advance the game by one day, in place.
///
/// Order matters: news first, then prices (consuming the news and the
/// perturbed prior trend), then the stored trend from the updated history,
/// then revaluation, then the day counter and the capped news buffer.
pub fn advance_day(state: &mut GameState, sampler: &mut dyn Sampler) {
    let news = generate_news(&state.companies, sampler);
    let day_trend = update_prices(&mut state.companies, state.market_trend, &news, sampler);
    state.market_trend = market_trend(&state.companies);
    revalue_portfolio(&mut state.portfolio, &state.companies);
    state.day += 1;

    state.news.extend(news);
    let excess = state.news.len().saturating_sub(NEWS_BUFFER_CAP);
    if excess > 0 {
        state.news.drain(..excess);
    }

    debug!(
        day = state.day,
        walk_trend = day_trend,
        stored_trend = state.market_trend,
        "day advanced"
    );
}
