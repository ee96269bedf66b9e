//! Coinbase Exchange product-ticker REST client.

use crate::errors::Result;
use crate::models::Quote;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

const COINBASE_API: &str = "https://api.exchange.coinbase.com/products";
pub const NAME: &str = "Coinbase";

#[derive(Debug, Deserialize)]
struct ProductTicker {
    bid: String,
    ask: String,
}

#[derive(Debug, Clone)]
pub struct CoinbaseTicker {
    client: reqwest::Client,
    endpoint: String,
}

impl CoinbaseTicker {
    pub fn new() -> Self {
        Self::with_endpoint(COINBASE_API)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        // Coinbase rejects requests without a User-Agent.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    async fn fetch(&self, symbol: &str) -> Result<Quote> {
        let url = format!("{}/{}/ticker", self.endpoint, symbol);
        let ticker: ProductTicker = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(Quote::new(
            symbol,
            NAME,
            ticker.bid.parse().ok(),
            ticker.ask.parse().ok(),
        ))
    }
}

impl Default for CoinbaseTicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl super::QuoteSource for CoinbaseTicker {
    fn name(&self) -> &str {
        NAME
    }

    async fn best_quote(&self, symbol: &str) -> Quote {
        match self.fetch(symbol).await {
            Ok(quote) => quote,
            Err(e) => {
                warn!(symbol, error = %e, "[CEX] Coinbase ticker fetch failed");
                Quote::unavailable(symbol, NAME)
            }
        }
    }
}
