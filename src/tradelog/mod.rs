//! The trade log as an explicit interface.
//!
//! The bot and the analyzer communicate through an append-only text stream,
//! one event per line. This module owns both sides of the format contract:
//! the writer emits `TIMESTAMP - LEVEL - message` lines, and the parser
//! extracts the `Net Profit: $` events back out, tolerant of everything else.

pub mod parser;
pub mod writer;

pub use parser::{parse, parse_file, parse_line};
pub use writer::TradeLogWriter;

/// Timestamp prefix format, millisecond precision: `2024-05-01 10:00:00,123`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Marker carried by exactly the lines that record a simulated trade.
pub const PROFIT_MARKER: &str = "Net Profit: $";

/// Separator between the timestamp, level, and message fields.
pub const FIELD_SEPARATOR: &str = " - ";
