//! Cumulative-profit chart rendering.

use super::series::CumulativeSeries;
use crate::errors::{AppError, Result};
use crate::models::CumulativePoint;
use chrono::NaiveDateTime;
use plotters::coord::types::RangedDateTime;
use plotters::prelude::*;
use std::path::Path;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 600;

/// Chart title with the final total at two decimal places.
pub fn chart_title(total: f64) -> String {
    format!("Cumulative Simulated Profits Over Time (Total: ${total:.2})")
}

/// Render the series as a PNG line chart at `out`.
///
/// With `use_index_axis` the x-axis is the 1-based trade number, useful when
/// timestamps are too clustered to read; otherwise it is the timestamp.
pub fn render(series: &CumulativeSeries, out: &Path, use_index_axis: bool) -> Result<()> {
    let root = BitMapBackend::new(out, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| AppError::Chart(e.to_string()))?;

    let points = series.points();
    let (y_min, y_max) = y_bounds(points);
    let title = chart_title(series.total());

    if use_index_axis {
        let x_max = points.len() as f64 + 1.0;
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..x_max, y_min..y_max)
            .map_err(|e| AppError::Chart(e.to_string()))?;
        chart
            .configure_mesh()
            .x_desc("Trade Number")
            .y_desc("Cumulative Profit ($)")
            .draw()
            .map_err(|e| AppError::Chart(e.to_string()))?;
        chart
            .draw_series(LineSeries::new(
                points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| ((i + 1) as f64, p.cumulative_profit)),
                &BLUE,
            ))
            .map_err(|e| AppError::Chart(e.to_string()))?;
        chart
            .draw_series(points.iter().enumerate().map(|(i, p)| {
                Circle::new(((i + 1) as f64, p.cumulative_profit), 3, BLUE.filled())
            }))
            .map_err(|e| AppError::Chart(e.to_string()))?;
    } else {
        let start = points.first().map(|p| p.timestamp).unwrap_or_default();
        let mut end = points.last().map(|p| p.timestamp).unwrap_or_default();
        if end == start {
            // A single event (or identical timestamps) would make the axis
            // range degenerate.
            end = end + chrono::Duration::seconds(1);
        }
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(RangedDateTime::from(start..end), y_min..y_max)
            .map_err(|e| AppError::Chart(e.to_string()))?;
        chart
            .configure_mesh()
            .x_labels(8)
            .x_label_formatter(&|ts: &NaiveDateTime| ts.format("%H:%M:%S").to_string())
            .x_desc("Timestamp")
            .y_desc("Cumulative Profit ($)")
            .draw()
            .map_err(|e| AppError::Chart(e.to_string()))?;
        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.timestamp, p.cumulative_profit)),
                &BLUE,
            ))
            .map_err(|e| AppError::Chart(e.to_string()))?;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|p| Circle::new((p.timestamp, p.cumulative_profit), 3, BLUE.filled())),
            )
            .map_err(|e| AppError::Chart(e.to_string()))?;
    }

    root.present().map_err(|e| AppError::Chart(e.to_string()))?;
    Ok(())
}

fn y_bounds(points: &[CumulativePoint]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points {
        min = min.min(p.cumulative_profit);
        max = max.max(p.cumulative_profit);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((max - min).abs() * 0.1).max(1.0);
    (min - pad, max + pad)
}
