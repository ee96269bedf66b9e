use anyhow::Result;
use arbitrage_simulator::{
    arbitrage::{ArbitrageDetector, DetectorConfig},
    config::AppConfig,
    exchange::{BinanceTicker, CoinbaseTicker, SymbolMapper},
    ledger::Ledger,
    poller,
    tradelog::TradeLogWriter,
    utils,
};
use std::sync::Arc;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let config = AppConfig::load()?;
    tracing::info!(
        symbols = ?config.symbols,
        notional_usd = config.notional_usd,
        fee_rate = config.fee_rate,
        poll_interval_secs = config.poll_interval_secs,
        "[INIT] arbitrage-simulator starting"
    );

    let detector = ArbitrageDetector::new(
        Arc::new(BinanceTicker::new()),
        Arc::new(CoinbaseTicker::new()),
        SymbolMapper::default_rules(),
        DetectorConfig {
            fee_rate: config.fee_rate,
            notional_usd: config.notional_usd,
        },
    );
    let mut ledger = Ledger::new();
    let mut log = TradeLogWriter::append(&config.trade_log)?;
    log.info("Starting arbitrage bot...")?;

    // Graceful shutdown: Ctrl-C flips the token, the loop exits after the
    // in-flight cycle completes.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    poller::run_polling_loop(&config, &detector, &mut ledger, &mut log, shutdown_rx).await?;

    log.info(&format!(
        "Stopped. Final total simulated profit: ${:.2}",
        ledger.snapshot()
    ))?;
    Ok(())
}
