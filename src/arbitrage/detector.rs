//! Cross-exchange spread evaluation and the per-symbol check.

use super::types::{ArbitrageOpportunity, DetectorConfig};
use crate::errors::Result;
use crate::exchange::{QuoteSource, SymbolMapper};
use crate::models::Quote;
use crate::tradelog::TradeLogWriter;
use std::sync::Arc;

/// Evaluate both trade directions for a quote pair.
///
/// Direction 1 buys on B and sells on A; direction 2 is the reverse. At most
/// one direction can trigger for a given pair, since the inequalities point
/// in opposite senses. Quotes with absent prices never participate.
pub fn evaluate_pair(
    symbol: &str,
    quote_a: &Quote,
    quote_b: &Quote,
    config: &DetectorConfig,
) -> Option<ArbitrageOpportunity> {
    let (bid_a, ask_a) = quote_a.prices()?;
    let (bid_b, ask_b) = quote_b.prices()?;

    let fee_adjustment = 1.0 + 2.0 * config.fee_rate;
    if bid_a > ask_b * fee_adjustment {
        simulate_trade(symbol, &quote_b.source, &quote_a.source, ask_b, bid_a, config)
    } else if bid_b > ask_a * fee_adjustment {
        simulate_trade(symbol, &quote_a.source, &quote_b.source, ask_a, bid_b, config)
    } else {
        None
    }
}

/// Simulate a fixed-notional round-trip for one triggered direction.
fn simulate_trade(
    symbol: &str,
    buy_exchange: &str,
    sell_exchange: &str,
    buy_price: f64,
    sell_price: f64,
    config: &DetectorConfig,
) -> Option<ArbitrageOpportunity> {
    let profit_fraction = (sell_price - buy_price) / buy_price - 2.0 * config.fee_rate;
    // The triggering inequality is necessary but not sufficient once the fee
    // rate is nonzero; recheck before emitting.
    if profit_fraction <= 0.0 {
        return None;
    }

    let amount = config.notional_usd / buy_price;
    let gross_profit = amount * (sell_price - buy_price);
    let net_profit_usd = gross_profit * (1.0 - 2.0 * config.fee_rate);

    Some(ArbitrageOpportunity {
        symbol: symbol.to_string(),
        buy_exchange: buy_exchange.to_string(),
        sell_exchange: sell_exchange.to_string(),
        buy_price,
        sell_price,
        profit_fraction,
        notional_usd: config.notional_usd,
        net_profit_usd,
    })
}

/// Pulls quotes from two sources for one canonical symbol, evaluates both
/// directions, and records any simulated trade in the trade log.
pub struct ArbitrageDetector {
    source_a: Arc<dyn QuoteSource>,
    source_b: Arc<dyn QuoteSource>,
    mapper: SymbolMapper,
    config: DetectorConfig,
}

impl ArbitrageDetector {
    pub fn new(
        source_a: Arc<dyn QuoteSource>,
        source_b: Arc<dyn QuoteSource>,
        mapper: SymbolMapper,
        config: DetectorConfig,
    ) -> Self {
        Self {
            source_a,
            source_b,
            mapper,
            config,
        }
    }

    /// Check one canonical symbol. A failed fetch on either side aborts the
    /// check for this cycle with a log entry, not an error; the polling
    /// loop's repetition is the retry.
    pub async fn check(
        &self,
        symbol: &str,
        log: &mut TradeLogWriter,
    ) -> Result<Option<ArbitrageOpportunity>> {
        let quote_a = self.fetch_and_report(&self.source_a, symbol, log).await?;
        let quote_b = self.fetch_and_report(&self.source_b, symbol, log).await?;

        let Some(opp) = evaluate_pair(symbol, &quote_a, &quote_b, &self.config) else {
            return Ok(None);
        };

        log.info(&format!(
            "Arbitrage detected! Buy {} on {} @ {}, Sell on {} @ {}. Est. Profit: {:.4}%",
            opp.symbol,
            opp.buy_exchange,
            opp.buy_price,
            opp.sell_exchange,
            opp.sell_price,
            opp.profit_fraction * 100.0
        ))?;

        let base = symbol.split('/').next().unwrap_or(symbol);
        let amount = opp.notional_usd / opp.buy_price;
        log.info(&format!(
            "Simulated: Bought {:.6} {} for ${}. Net Profit: ${:.2}",
            amount, base, opp.notional_usd, opp.net_profit_usd
        ))?;

        Ok(Some(opp))
    }

    async fn fetch_and_report(
        &self,
        source: &Arc<dyn QuoteSource>,
        symbol: &str,
        log: &mut TradeLogWriter,
    ) -> Result<Quote> {
        let native = self.mapper.to_native(symbol, source.name());
        let quote = source.best_quote(&native).await;
        match quote.prices() {
            Some((bid, ask)) => log.info(&format!(
                "Fetched {} on {}: Bid={}, Ask={}",
                quote.symbol, quote.source, bid, ask
            ))?,
            None => log.error(&format!(
                "Failed to fetch {} on {}",
                quote.symbol, quote.source
            ))?,
        }
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::QuoteSource;
    use async_trait::async_trait;

    const A: &str = "AlphaEx";
    const B: &str = "BetaEx";

    fn quote(source: &str, bid: f64, ask: f64) -> Quote {
        Quote::new("BTC/USDT", source, Some(bid), Some(ask))
    }

    fn config() -> DetectorConfig {
        DetectorConfig {
            fee_rate: 0.0001,
            notional_usd: 1000.0,
        }
    }

    #[test]
    fn triggers_buy_b_sell_a_direction() {
        // bid_A clearly above ask_B after the fee adjustment
        let a = quote(A, 101.0, 101.5);
        let b = quote(B, 99.5, 100.0);
        let opp = evaluate_pair("BTC/USDT", &a, &b, &config()).expect("should trigger");
        assert_eq!(opp.buy_exchange, B);
        assert_eq!(opp.sell_exchange, A);
        assert_eq!(opp.buy_price, 100.0);
        assert_eq!(opp.sell_price, 101.0);
        assert!(opp.profit_fraction > 0.0);
    }

    #[test]
    fn triggers_buy_a_sell_b_direction() {
        let a = quote(A, 99.5, 100.0);
        let b = quote(B, 101.0, 101.5);
        let opp = evaluate_pair("BTC/USDT", &a, &b, &config()).expect("should trigger");
        assert_eq!(opp.buy_exchange, A);
        assert_eq!(opp.sell_exchange, B);
    }

    #[test]
    fn no_trigger_when_spread_within_fees() {
        let a = quote(A, 100.0, 100.1);
        let b = quote(B, 100.0, 100.1);
        assert!(evaluate_pair("BTC/USDT", &a, &b, &config()).is_none());
    }

    #[test]
    fn absent_quote_aborts_detection() {
        let a = quote(A, 101.0, 101.5);
        let b = Quote::unavailable("BTC/USDT", B);
        assert!(evaluate_pair("BTC/USDT", &a, &b, &config()).is_none());
    }

    #[test]
    fn net_profit_matches_fee_adjusted_formula() {
        let cfg = config();
        let a = quote(A, 102.0, 102.5);
        let b = quote(B, 99.0, 100.0);
        let opp = evaluate_pair("BTC/USDT", &a, &b, &cfg).expect("should trigger");
        let amount = cfg.notional_usd / opp.buy_price;
        let expected = amount * (opp.sell_price - opp.buy_price) * (1.0 - 2.0 * cfg.fee_rate);
        assert!((opp.net_profit_usd - expected).abs() < 1e-9);
        let expected_fraction =
            (opp.sell_price - opp.buy_price) / opp.buy_price - 2.0 * cfg.fee_rate;
        assert!((opp.profit_fraction - expected_fraction).abs() < 1e-12);
    }

    #[test]
    fn raising_fee_rate_shrinks_profit_and_can_flip_to_none() {
        let a = quote(A, 100.3, 100.4);
        let b = quote(B, 99.9, 100.0);
        let cheap = DetectorConfig {
            fee_rate: 0.0001,
            notional_usd: 1000.0,
        };
        let low = evaluate_pair("BTC/USDT", &a, &b, &cheap).expect("should trigger");

        let pricier = DetectorConfig {
            fee_rate: 0.001,
            notional_usd: 1000.0,
        };
        if let Some(high) = evaluate_pair("BTC/USDT", &a, &b, &pricier) {
            assert!(high.net_profit_usd < low.net_profit_usd);
        }

        // 0.3% spread cannot survive a 0.5% fee per leg
        let prohibitive = DetectorConfig {
            fee_rate: 0.005,
            notional_usd: 1000.0,
        };
        assert!(evaluate_pair("BTC/USDT", &a, &b, &prohibitive).is_none());
    }

    struct StaticSource {
        name: &'static str,
        bid: f64,
        ask: f64,
    }

    #[async_trait]
    impl QuoteSource for StaticSource {
        fn name(&self) -> &str {
            self.name
        }

        async fn best_quote(&self, symbol: &str) -> Quote {
            Quote::new(symbol, self.name, Some(self.bid), Some(self.ask))
        }
    }

    #[tokio::test]
    async fn check_emits_one_profit_line_per_opportunity() {
        let detector = ArbitrageDetector::new(
            Arc::new(StaticSource {
                name: A,
                bid: 101.0,
                ask: 101.5,
            }),
            Arc::new(StaticSource {
                name: B,
                bid: 99.5,
                ask: 100.0,
            }),
            SymbolMapper::default_rules(),
            config(),
        );

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("trades.log");
        let mut log = TradeLogWriter::append(&path).expect("open log");

        let opp = detector
            .check("BTC/USDT", &mut log)
            .await
            .expect("check should not fail")
            .expect("should emit an opportunity");
        assert_eq!(opp.buy_exchange, B);

        let contents = std::fs::read_to_string(&path).expect("read log");
        let profit_lines = contents
            .lines()
            .filter(|l| l.contains("Net Profit: $"))
            .count();
        assert_eq!(profit_lines, 1);
        assert!(contents.contains("Arbitrage detected!"));
    }
}
