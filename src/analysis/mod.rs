//! Offline analysis: profit events → cumulative series → artifacts.

pub mod chart;
pub mod series;

pub use chart::{chart_title, render};
pub use series::{CumulativeSeries, build_series};
