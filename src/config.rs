use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Cash a fresh game starts with.
    pub starting_cash: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            starting_cash: env::var("STARTING_CASH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100_000.0),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
