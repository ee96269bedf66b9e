//! Offline analyzer: trade log → cumulative series → CSV table + chart.

use anyhow::Result;
use arbitrage_simulator::{analysis, errors::AppError, tradelog, utils};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "analyze",
    about = "Rebuild the simulated-profit series from a trade log"
)]
struct Args {
    /// Trade log produced by the bot
    #[arg(long, default_value = "trades.log")]
    log: PathBuf,

    /// Output CSV table
    #[arg(long, default_value = "profits.csv")]
    csv: PathBuf,

    /// Output chart image
    #[arg(long, default_value = "profits_plot.png")]
    chart: PathBuf,

    /// Plot against trade number instead of timestamp (useful when
    /// timestamps are too clustered)
    #[arg(long)]
    index_axis: bool,
}

fn main() -> Result<()> {
    utils::init_logging();
    let args = Args::parse();

    let events = tradelog::parse_file(&args.log)?;
    let series = match analysis::build_series(events) {
        Ok(series) => series,
        Err(AppError::EmptyLog) => {
            tracing::warn!(log = %args.log.display(), "no profit events found; nothing to plot");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    series.write_csv(&args.csv)?;
    analysis::render(&series, &args.chart, args.index_axis)?;

    tracing::info!(
        events = series.points().len(),
        total = %format!("{:.2}", series.total()),
        csv = %args.csv.display(),
        chart = %args.chart.display(),
        "analysis complete"
    );
    Ok(())
}
