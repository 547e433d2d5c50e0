use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_API_BASE: &str = "https://tbc-recruit.onrender.com";

/// Board configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub port: u16,
    pub rust_log: String,
    pub upstream_timeout: Duration,
    /// Empty means any origin may call the board.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base: env_or("RECRUIT_API_BASE", DEFAULT_API_BASE),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            upstream_timeout: Duration::from_secs(
                env_or("UPSTREAM_TIMEOUT_SECS", "30")
                    .parse::<u64>()
                    .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", "")),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
