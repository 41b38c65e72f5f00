//! Log sinks
//!
//! A sink receives fully formatted lines (level tag included) that already
//! passed the logger's level gate.

use super::Level;

/// Destination for log lines
#[cfg_attr(test, mockall::automock)]
pub trait LogSink: Send + Sync {
    fn write(&self, level: Level, line: &str);
}

/// Forwards lines to `tracing` at the matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, level: Level, line: &str) {
        match level {
            Level::Debug => tracing::debug!("{}", line),
            Level::Info => tracing::info!("{}", line),
            Level::Warn => tracing::warn!("{}", line),
            Level::Error => tracing::error!("{}", line),
        }
    }
}
