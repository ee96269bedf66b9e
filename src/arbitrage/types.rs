/// Configuration for spread evaluation.
#[derive(Debug, Clone, Copy)]
pub struct DetectorConfig {
    /// Fee fraction charged per trade leg; the simulated round-trip pays it twice.
    pub fee_rate: f64,
    /// Fixed USD size of each simulated trade.
    pub notional_usd: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            fee_rate: 0.0001,
            notional_usd: 1000.0,
        }
    }
}

/// A detected, simulated, profitable cross-exchange trade.
///
/// Created only when the fee-adjusted profit fraction is positive; immutable
/// once created. Emitting one of these produces exactly one trade-log event
/// and one ledger update.
#[derive(Debug, Clone)]
pub struct ArbitrageOpportunity {
    pub symbol: String,
    pub buy_exchange: String,
    pub sell_exchange: String,
    pub buy_price: f64,
    pub sell_price: f64,
    pub profit_fraction: f64,
    pub notional_usd: f64,
    pub net_profit_usd: f64,
}
