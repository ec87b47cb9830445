use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Synergy algorithm selected with `SYNERGY_STRATEGY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SynergyStrategyKind {
    /// Number of distinct cards in the deck.
    #[default]
    CardCount,
    /// Shared themes and interactions between card pairs.
    ThemeOverlap,
}

impl FromStr for SynergyStrategyKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "card_count" => Ok(Self::CardCount),
            "theme_overlap" => Ok(Self::ThemeOverlap),
            other => Err(ConfigError::InvalidEnvVar {
                name: "SYNERGY_STRATEGY".to_string(),
                reason: format!("unknown strategy '{}'", other),
            }),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub request_timeout: Duration,
    pub synergy_strategy: SynergyStrategyKind,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let request_timeout = match std::env::var("REQUEST_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "REQUEST_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let synergy_strategy = match std::env::var("SYNERGY_STRATEGY") {
            Ok(value) => value.parse::<SynergyStrategyKind>()?,
            Err(_) => SynergyStrategyKind::default(),
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            request_timeout: Duration::from_secs(request_timeout),
            synergy_strategy,
        })
    }
}
