//! The polling loop driving detection and the ledger.

use crate::arbitrage::ArbitrageDetector;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::ledger::Ledger;
use crate::tradelog::TradeLogWriter;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// Run the polling loop until the shutdown token flips.
///
/// Each cycle checks every configured symbol sequentially, applies each
/// emitted opportunity to the ledger, then writes the cycle report line.
/// Shutdown is only observed between cycles, so every check-and-log step
/// completes as a unit and no event is partially recorded.
pub async fn run_polling_loop(
    config: &AppConfig,
    detector: &ArbitrageDetector,
    ledger: &mut Ledger,
    log: &mut TradeLogWriter,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let mut ticker = tokio::time::interval(Duration::from_secs(config.poll_interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                for symbol in &config.symbols {
                    if let Some(opp) = detector.check(symbol, log).await? {
                        ledger.add(opp.net_profit_usd);
                    }
                }
                log.warning(&format!(
                    "Current Total Simulated Profit: ${:.2}",
                    ledger.snapshot()
                ))?;
            }
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    tracing::info!("shutdown requested, stopping polling loop");
                    break;
                }
            }
        }
    }
    Ok(())
}
