//! Shared data structures used throughout the application.

use chrono::NaiveDateTime;

/// Best bid/ask snapshot for one symbol on one exchange.
///
/// Absent bid or ask means the fetch failed; such a quote never
/// participates in detection.
#[derive(Debug, Clone)]
pub struct Quote {
    pub symbol: String,
    pub source: String,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
}

impl Quote {
    pub fn new(symbol: &str, source: &str, bid: Option<f64>, ask: Option<f64>) -> Self {
        Self {
            symbol: symbol.to_string(),
            source: source.to_string(),
            // Zero or negative prices are invalid and treated as absent.
            bid: bid.filter(|p| *p > 0.0),
            ask: ask.filter(|p| *p > 0.0),
        }
    }

    /// Quote for a failed fetch.
    pub fn unavailable(symbol: &str, source: &str) -> Self {
        Self::new(symbol, source, None, None)
    }

    /// Both sides, only when present and strictly positive.
    pub fn prices(&self) -> Option<(f64, f64)> {
        Some((self.bid?, self.ask?))
    }
}

/// One `Net Profit: $…` entry reconstructed from the trade log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitEvent {
    pub timestamp: NaiveDateTime,
    pub net_profit: f64,
}

/// One row of the cumulative-profit series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativePoint {
    pub timestamp: NaiveDateTime,
    pub net_profit: f64,
    pub cumulative_profit: f64,
}
