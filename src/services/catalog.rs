//! Static company catalog and initial game state.

use crate::types::{Company, GameSpeed, GameState, Portfolio};

struct Listing {
    id: &'static str,
    name: &'static str,
    ticker: &'static str,
    description: &'static str,
    sector: &'static str,
    price: f64,
    volatility: f64,
}

const LISTINGS: &[Listing] = &[
    Listing {
        id: "tech-1",
        name: "NexaTech Solutions",
        ticker: "NTS",
        description: "Leading provider of cloud computing and AI solutions",
        sector: "Technology",
        price: 245.75,
        volatility: 0.8,
    },
    Listing {
        id: "tech-2",
        name: "Quantum Dynamics",
        ticker: "QDY",
        description: "Specializes in quantum computing and advanced algorithms",
        sector: "Technology",
        price: 189.30,
        volatility: 0.9,
    },
    Listing {
        id: "energy-1",
        name: "SolarPeak Energy",
        ticker: "SPE",
        description: "Renewable energy company focused on solar power solutions",
        sector: "Energy",
        price: 78.45,
        volatility: 0.6,
    },
    Listing {
        id: "finance-1",
        name: "Atlas Financial Group",
        ticker: "AFG",
        description: "Global financial services and investment management",
        sector: "Finance",
        price: 156.20,
        volatility: 0.5,
    },
    Listing {
        id: "health-1",
        name: "BioGenesis Labs",
        ticker: "BGL",
        description: "Biotechnology company developing innovative treatments",
        sector: "Healthcare",
        price: 112.80,
        volatility: 0.7,
    },
    Listing {
        id: "consumer-1",
        name: "Evergreen Goods",
        ticker: "EVG",
        description: "Consumer goods company with sustainable product lines",
        sector: "Consumer Goods",
        price: 67.35,
        volatility: 0.4,
    },
    Listing {
        id: "manufacturing-1",
        name: "Titan Industries",
        ticker: "TTI",
        description: "Heavy machinery and industrial equipment manufacturer",
        sector: "Manufacturing",
        price: 92.15,
        volatility: 0.5,
    },
    Listing {
        id: "retail-1",
        name: "Urban Marketplace",
        ticker: "UMP",
        description: "E-commerce platform for urban lifestyle products",
        sector: "Retail",
        price: 45.60,
        volatility: 0.6,
    },
];

/// The fixed company roster, each starting at its listed price with a
/// single-point history.
pub fn initial_companies() -> Vec<Company> {
    LISTINGS
        .iter()
        .map(|listing| Company {
            id: listing.id.to_string(),
            name: listing.name.to_string(),
            ticker: listing.ticker.to_string(),
            description: listing.description.to_string(),
            sector: listing.sector.to_string(),
            initial_price: listing.price,
            current_price: listing.price,
            price_history: vec![listing.price],
            volatility: listing.volatility,
        })
        .collect()
}

/// A fresh day-1 game state with the full catalog and the given bankroll.
pub fn initial_state(starting_cash: f64) -> GameState {
    GameState {
        day: 1,
        companies: initial_companies(),
        news: Vec::new(),
        portfolio: Portfolio::with_cash(starting_cash),
        leaderboard: Vec::new(),
        market_trend: 0.0,
        game_speed: GameSpeed::Normal,
        is_paused: false,
    }
}
