//! Exchange connectivity.
//!
//! Responsibilities:
//! • Expose the latest best bid / ask for a symbol on one exchange.
//! • Collapse every transport or exchange failure into an absent-price
//!   quote so the detector branches on presence, not on errors.
//! • Translate canonical symbols into each exchange's native syntax.

pub mod binance;
pub mod coinbase;
pub mod symbol;

use crate::models::Quote;
use async_trait::async_trait;

pub use binance::BinanceTicker;
pub use coinbase::CoinbaseTicker;
pub use symbol::{MappingRule, SymbolMapper};

/// One exchange connection, reduced to a best bid/ask poll.
///
/// `best_quote` is infallible by contract: network errors, exchange-reported
/// errors, and decode faults all yield a quote with absent prices plus a
/// diagnostic log entry. No retry happens here; the polling loop's natural
/// repetition is the retry mechanism.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    fn name(&self) -> &str;

    async fn best_quote(&self, symbol: &str) -> Quote;
}
