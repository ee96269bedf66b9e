//! Producer side of the trade-log contract.

use super::{FIELD_SEPARATOR, TIMESTAMP_FORMAT};
use crate::errors::Result;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append-only trade-log writer.
///
/// Each event is written and flushed as one complete line, so entries stay
/// atomic and a reader never observes a partial event. Every line is
/// mirrored to `tracing` for console visibility.
pub struct TradeLogWriter {
    file: File,
}

impl TradeLogWriter {
    pub fn append(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    pub fn info(&mut self, message: &str) -> Result<()> {
        self.write_line("INFO", message)
    }

    pub fn warning(&mut self, message: &str) -> Result<()> {
        self.write_line("WARNING", message)
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        self.write_line("ERROR", message)
    }

    fn write_line(&mut self, level: &str, message: &str) -> Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        writeln!(
            self.file,
            "{timestamp}{FIELD_SEPARATOR}{level}{FIELD_SEPARATOR}{message}"
        )?;
        self.file.flush()?;
        match level {
            "WARNING" => tracing::warn!("{message}"),
            "ERROR" => tracing::error!("{message}"),
            _ => tracing::info!("{message}"),
        }
        Ok(())
    }
}
