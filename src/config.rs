//! Configuration loader and application settings.

use crate::errors::{AppError, Result};
use std::path::PathBuf;

const DEFAULT_SYMBOLS: &str = "BTC/USDT,ETH/USDT,SOL/USDT,ADA/USDT,XRP/USDT";

/// Consolidated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Canonical symbols to poll each cycle.
    pub symbols: Vec<String>,
    /// Fixed USD size of each simulated trade.
    pub notional_usd: f64,
    /// Fee fraction charged per trade leg (applied twice per round-trip).
    pub fee_rate: f64,
    /// Wait between polling cycles, in seconds.
    pub poll_interval_secs: u64,
    /// Append-only trade log path.
    pub trade_log: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults, and validate it before the first cycle runs.
    pub fn load() -> Result<Self> {
        let symbols: Vec<String> = std::env::var("SYMBOLS")
            .unwrap_or_else(|_| DEFAULT_SYMBOLS.into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let notional_usd: f64 = parse_env("NOTIONAL_USD", 1000.0)?;
        let fee_rate: f64 = parse_env("FEE_RATE", 0.0001)?;
        let poll_interval_secs: u64 = parse_env("POLL_INTERVAL_SECS", 5)?;
        let trade_log =
            PathBuf::from(std::env::var("TRADE_LOG").unwrap_or_else(|_| "trades.log".into()));

        let cfg = Self {
            symbols,
            notional_usd,
            fee_rate,
            poll_interval_secs,
            trade_log,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbols.is_empty() {
            return Err(AppError::Config("symbol set is empty".into()));
        }
        if !(self.fee_rate >= 0.0 && self.fee_rate < 1.0) {
            return Err(AppError::Config(format!(
                "fee_rate must be in [0, 1), got {}",
                self.fee_rate
            )));
        }
        if !(self.notional_usd > 0.0) {
            return Err(AppError::Config(format!(
                "notional_usd must be positive, got {}",
                self.notional_usd
            )));
        }
        if self.poll_interval_secs == 0 {
            return Err(AppError::Config("poll_interval_secs must be positive".into()));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("{key} is not a valid number: {raw}"))),
        Err(_) => Ok(default),
    }
}
