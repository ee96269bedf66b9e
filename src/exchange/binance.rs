//! Binance spot book-ticker REST client.

use crate::errors::Result;
use crate::models::Quote;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

const BINANCE_API: &str = "https://api.binance.com/api/v3/ticker/bookTicker";
pub const NAME: &str = "Binance";

/// Binance encodes prices as strings.
#[derive(Debug, Deserialize)]
struct BookTicker {
    #[serde(rename = "bidPrice")]
    bid_price: String,
    #[serde(rename = "askPrice")]
    ask_price: String,
}

#[derive(Debug, Clone)]
pub struct BinanceTicker {
    client: reqwest::Client,
    endpoint: String,
}

impl BinanceTicker {
    pub fn new() -> Self {
        Self::with_endpoint(BINANCE_API)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    async fn fetch(&self, symbol: &str) -> Result<Quote> {
        let ticker: BookTicker = self
            .client
            .get(&self.endpoint)
            .query(&[("symbol", symbol)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(Quote::new(
            symbol,
            NAME,
            ticker.bid_price.parse().ok(),
            ticker.ask_price.parse().ok(),
        ))
    }
}

impl Default for BinanceTicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl super::QuoteSource for BinanceTicker {
    fn name(&self) -> &str {
        NAME
    }

    async fn best_quote(&self, symbol: &str) -> Quote {
        match self.fetch(symbol).await {
            Ok(quote) => quote,
            Err(e) => {
                warn!(symbol, error = %e, "[CEX] Binance ticker fetch failed");
                Quote::unavailable(symbol, NAME)
            }
        }
    }
}
