use crate::engine::MIN_STRIKE_RATE_BALLS;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub scorecard_cache_capacity: usize,
    pub min_strike_rate_balls: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = parse_or_default(&env_map, "PORT", 8080u16, "must be a valid u16")?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_PATH".to_string()))?;

        let scorecard_cache_capacity = parse_or_default(
            &env_map,
            "SCORECARD_CACHE_CAPACITY",
            256usize,
            "must be a non-negative integer",
        )?;

        let min_strike_rate_balls = parse_or_default(
            &env_map,
            "MIN_STRIKE_RATE_BALLS",
            MIN_STRIKE_RATE_BALLS,
            "must be a valid u32",
        )?;

        Ok(Config {
            port,
            database_path,
            scorecard_cache_capacity,
            min_strike_rate_balls,
        })
    }
}

fn parse_or_default<T: std::str::FromStr>(
    env_map: &HashMap<String, String>,
    key: &str,
    default: T,
    reason: &str,
) -> Result<T, ConfigError> {
    match env_map.get(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue(key.to_string(), reason.to_string())),
        None => Ok(default),
    }
}
