pub mod detector;
pub mod types;

pub use detector::{ArbitrageDetector, evaluate_pair};
pub use types::{ArbitrageOpportunity, DetectorConfig};
