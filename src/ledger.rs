//! Running total of simulated net profit.

/// Process-lifetime accumulator, owned by the polling loop.
///
/// Mutated only by [`Ledger::add`] with a newly emitted opportunity's net
/// profit; read only through [`Ledger::snapshot`] for the cycle report.
#[derive(Debug, Default)]
pub struct Ledger {
    cumulative_net_profit: f64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, net_profit_usd: f64) {
        self.cumulative_net_profit += net_profit_usd;
    }

    pub fn snapshot(&self) -> f64 {
        self.cumulative_net_profit
    }
}
