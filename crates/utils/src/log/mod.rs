//! Environment-gated logging facade
//!
//! `debug` and `info` are only forwarded in dev mode; `warn` and `error` are
//! always forwarded. The gate is chosen once when the [`Logger`] is built.
//!
//! For console-style variadic calls use the macros:
//!
//! ```
//! use std::sync::Arc;
//! use cip_utils::log::{Logger, TracingSink};
//! use cip_utils::log_warn;
//!
//! let log = Logger::quiet(Arc::new(TracingSink));
//! log_warn!(log, "retrying request", 3, "of", 5);
//! ```

mod sink;

use std::fmt::{self, Display};
use std::sync::Arc;

#[cfg(test)]
pub use sink::MockLogSink;
pub use sink::{LogSink, TracingSink};

/// Log severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Bracketed tag prepended to every forwarded line.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Debug => "[DEBUG]",
            Level::Info => "[INFO]",
            Level::Warn => "[WARN]",
            Level::Error => "[ERROR]",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Leveled logger writing to a [`LogSink`]
#[derive(Clone)]
pub struct Logger {
    min_level: Level,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new(min_level: Level, sink: Arc<dyn LogSink>) -> Self {
        Self { min_level, sink }
    }

    /// Forwards every level.
    pub fn verbose(sink: Arc<dyn LogSink>) -> Self {
        Self::new(Level::Debug, sink)
    }

    /// Forwards only warnings and errors.
    pub fn quiet(sink: Arc<dyn LogSink>) -> Self {
        Self::new(Level::Warn, sink)
    }

    /// Verbose in dev mode, quiet otherwise.
    pub fn for_environment(dev_mode: bool, sink: Arc<dyn LogSink>) -> Self {
        if dev_mode {
            Self::verbose(sink)
        } else {
            Self::quiet(sink)
        }
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    pub fn log(&self, level: Level, message: impl Display) {
        if !self.is_enabled(level) {
            return;
        }
        let line = format!("{} {}", level.tag(), message);
        self.sink.write(level, &line);
    }

    pub fn debug(&self, message: impl Display) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl Display) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: impl Display) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: impl Display) {
        self.log(Level::Error, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

/// Join displayable arguments with single spaces, console style.
pub fn join_args(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&arg.to_string());
    }
    out
}

/// Log any number of displayable arguments at the given level.
///
/// Arguments are only formatted when the level passes the logger's gate.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:expr),+ $(,)?) => {{
        let logger: &$crate::log::Logger = &$logger;
        let level: $crate::log::Level = $level;
        if logger.is_enabled(level) {
            logger.log(
                level,
                $crate::log::join_args(&[$(&$arg as &dyn ::std::fmt::Display),+]),
            );
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::log::Level::Debug, $($arg),+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::log::Level::Info, $($arg),+)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::log::Level::Warn, $($arg),+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log_at!($logger, $crate::log::Level::Error, $($arg),+)
    };
}
