//! Cumulative-profit series construction and export.

use crate::errors::{AppError, Result};
use crate::models::{CumulativePoint, ProfitEvent};
use std::path::Path;

/// Profit events ordered by timestamp with a running cumulative sum.
///
/// Never empty by construction; [`build_series`] rejects empty input.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeSeries {
    points: Vec<CumulativePoint>,
}

/// Build the series from events in any order.
///
/// Sorting is stable, so events sharing a timestamp keep their encounter
/// order; this fully compensates for out-of-order emission in the log.
pub fn build_series(mut events: Vec<ProfitEvent>) -> Result<CumulativeSeries> {
    if events.is_empty() {
        return Err(AppError::EmptyLog);
    }
    events.sort_by_key(|e| e.timestamp);

    let mut running = 0.0;
    let points = events
        .into_iter()
        .map(|e| {
            running += e.net_profit;
            CumulativePoint {
                timestamp: e.timestamp,
                net_profit: e.net_profit,
                cumulative_profit: running,
            }
        })
        .collect();
    Ok(CumulativeSeries { points })
}

impl CumulativeSeries {
    pub fn points(&self) -> &[CumulativePoint] {
        &self.points
    }

    /// Final cumulative total.
    pub fn total(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.cumulative_profit)
    }

    /// Flat three-column table, one row per event, sorted by timestamp.
    /// Deterministic for identical input.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("timestamp,net_profit,cumulative_profit\n");
        for p in &self.points {
            out.push_str(&format!(
                "{},{},{}\n",
                p.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
                p.net_profit,
                p.cumulative_profit
            ));
        }
        out
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_csv())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(secs: u32, profit: f64) -> ProfitEvent {
        ProfitEvent {
            timestamp: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(10, 0, secs)
                .unwrap(),
            net_profit: profit,
        }
    }

    #[test]
    fn sorts_before_accumulating() {
        // Stream order T3, T1, T2 with profits 5, 10, -2.
        let events = vec![at(3, 5.0), at(1, 10.0), at(2, -2.0)];
        let series = build_series(events).expect("non-empty");
        let points = series.points();
        let profits: Vec<f64> = points.iter().map(|p| p.net_profit).collect();
        let cumulative: Vec<f64> = points.iter().map(|p| p.cumulative_profit).collect();
        assert_eq!(profits, vec![10.0, -2.0, 5.0]);
        assert_eq!(cumulative, vec![10.0, 8.0, 13.0]);
        assert!(points.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn empty_input_is_a_distinct_error() {
        assert!(matches!(build_series(vec![]), Err(AppError::EmptyLog)));
    }

    #[test]
    fn equal_timestamps_keep_encounter_order() {
        let events = vec![at(1, 1.0), at(1, 2.0), at(1, 3.0)];
        let series = build_series(events).expect("non-empty");
        let profits: Vec<f64> = series.points().iter().map(|p| p.net_profit).collect();
        assert_eq!(profits, vec![1.0, 2.0, 3.0]);
        assert_eq!(series.total(), 6.0);
    }

    #[test]
    fn csv_export_is_deterministic() {
        let events = vec![at(2, -2.0), at(1, 10.0)];
        let a = build_series(events.clone()).unwrap().to_csv();
        let b = build_series(events).unwrap().to_csv();
        assert_eq!(a, b);
        assert!(a.starts_with("timestamp,net_profit,cumulative_profit\n"));
        assert_eq!(a.lines().count(), 3);
        assert!(a.contains("2024-05-01 10:00:01.000,10,10"));
    }
}
