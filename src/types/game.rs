//! Game State Types
//!
//! The aggregate root for one game session. A single instance lives behind
//! the store for the whole process; the advance-day orchestration replaces
//! its simulation fields once per request.

use serde::{Deserialize, Serialize};

use super::{Company, NewsItem, Portfolio};

/// UI-facing pacing flag; the simulation never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

/// A finished run, recorded for the end-of-game screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub net_worth: f64,
    pub day: u32,
}

/// The whole game state, as served over `/api/gamestate`.
///
/// Field names are the wire contract consumed by the frontend; they must
/// stay camelCase exactly as written here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(default = "default_day")]
    pub day: u32,
    pub companies: Vec<Company>,
    /// Rolling buffer of the most recent items, oldest first.
    #[serde(default)]
    pub news: Vec<NewsItem>,
    pub portfolio: Portfolio,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Smoothed momentum signal in [-1, 1], fed into the next day's walk.
    #[serde(default)]
    pub market_trend: f64,
    #[serde(default)]
    pub game_speed: GameSpeed,
    #[serde(default)]
    pub is_paused: bool,
}

fn default_day() -> u32 {
    1
}
