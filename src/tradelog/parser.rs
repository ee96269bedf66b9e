//! Consumer side of the trade-log contract.

use super::{FIELD_SEPARATOR, PROFIT_MARKER, TIMESTAMP_FORMAT};
use crate::errors::Result;
use crate::models::ProfitEvent;
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Extract profit events from a log stream, in encounter order.
///
/// Lines without the profit marker are ignored; marker lines whose timestamp
/// fails to parse are skipped with a diagnostic. The stream is not assumed
/// to be sorted — ordering is the series builder's job.
pub fn parse<R: BufRead>(reader: R) -> Vec<ProfitEvent> {
    let mut events = Vec::new();
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "skipping unreadable log line");
                continue;
            }
        };
        if let Some(event) = parse_line(&line) {
            events.push(event);
        }
    }
    events
}

pub fn parse_file(path: &Path) -> Result<Vec<ProfitEvent>> {
    let file = File::open(path)?;
    Ok(parse(BufReader::new(file)))
}

/// Parse a single line; `None` means the line carries no profit event.
pub fn parse_line(line: &str) -> Option<ProfitEvent> {
    let marker_at = line.find(PROFIT_MARKER)?;

    let timestamp_str = line.split(FIELD_SEPARATOR).next().unwrap_or("");
    let timestamp = match NaiveDateTime::parse_from_str(timestamp_str, TIMESTAMP_FORMAT) {
        Ok(ts) => ts,
        Err(_) => {
            warn!(%line, "skipping profit line with invalid timestamp");
            return None;
        }
    };

    let raw = &line[marker_at + PROFIT_MARKER.len()..];
    let net_profit = leading_decimal(raw)?;
    Some(ProfitEvent {
        timestamp,
        net_profit,
    })
}

/// Longest leading signed decimal of `raw`, e.g. `"12.34 more text"` → 12.34.
fn leading_decimal(raw: &str) -> Option<f64> {
    let mut end = 0;
    for (i, c) in raw.char_indices() {
        if c.is_ascii_digit() || c == '.' || (i == 0 && c == '-') {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    raw[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LOG: &str = "\
2024-05-01 10:00:00,000 - INFO - Fetched BTCUSDT on Binance: Bid=64010.1, Ask=64010.9
2024-05-01 10:00:00,120 - INFO - Simulated: Bought 0.015624 BTC for $1000. Net Profit: $12.34
2024-05-01 10:00:05,000 - WARNING - Current Total Simulated Profit: $12.34
2024-05-01 10:00:09,500 - INFO - Simulated: Bought 9.876543 SOL for $1000. Net Profit: $-0.50
";

    #[test]
    fn extracts_only_marker_lines_in_encounter_order() {
        let events = parse(Cursor::new(LOG));
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].net_profit, 12.34);
        assert_eq!(events[1].net_profit, -0.50);
        assert!(events[0].timestamp < events[1].timestamp);
    }

    #[test]
    fn reparsing_is_idempotent() {
        let first = parse(Cursor::new(LOG));
        let second = parse(Cursor::new(LOG));
        assert_eq!(first, second);
    }

    #[test]
    fn missing_timestamp_is_skipped_not_fatal() {
        let log = "\
garbage line without timestamp Net Profit: $3.00
2024-05-01 10:00:00,000 - INFO - Simulated: Bought 1.0 ETH for $1000. Net Profit: $7.77
";
        let events = parse(Cursor::new(log));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].net_profit, 7.77);
    }

    #[test]
    fn marker_without_parsable_value_is_skipped() {
        let log = "2024-05-01 10:00:00,000 - INFO - Net Profit: $not-a-number\n";
        assert!(parse(Cursor::new(log)).is_empty());
    }

    #[test]
    fn report_lines_do_not_match_the_marker() {
        let line = "2024-05-01 10:00:05,000 - WARNING - Current Total Simulated Profit: $45.00";
        assert!(parse_line(line).is_none());
    }
}
