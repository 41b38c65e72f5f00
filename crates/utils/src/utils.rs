//! The `Utils` namespace
//!
//! Groups the debouncer, templates, escaper and logger behind one value built
//! once from [`UtilsConfig`]. The logger's dev-mode gate is decided here.

use std::fmt::Display;
use std::sync::Arc;

use crate::config::UtilsConfig;
use crate::debounce::Debouncer;
use crate::html;
use crate::log::{LogSink, Logger};
use crate::platform;

/// Shared helper namespace
#[derive(Debug, Clone)]
pub struct Utils {
    config: UtilsConfig,
    log: Logger,
}

impl Utils {
    /// Build with the platform's default log sink (tracing natively, the
    /// developer console in the browser).
    pub fn new(config: UtilsConfig) -> Self {
        Self::with_sink(config, platform::default_sink())
    }

    pub fn with_sink(config: UtilsConfig, sink: Arc<dyn LogSink>) -> Self {
        let dev_mode = config.is_dev_mode();
        let log = Logger::for_environment(dev_mode, sink);
        tracing::debug!(
            dev_mode,
            host = ?config.host,
            icons = config.icon_registry.len(),
            "Utils initialized"
        );
        Self { config, log }
    }

    pub fn config(&self) -> &UtilsConfig {
        &self.config
    }

    pub fn log(&self) -> &Logger {
        &self.log
    }

    /// Debounce `callback` with the configured delay.
    pub fn debounce<A, F>(&self, callback: F) -> Debouncer<A>
    where
        A: Send + 'static,
        F: Fn(A) + Send + Sync + 'static,
    {
        Debouncer::new(self.config.debounce_delay, callback)
    }

    pub fn loading_html(&self) -> String {
        html::loading_html()
    }

    /// Error panel using the configured icon registry. `message` is not escaped.
    pub fn error_html(&self, message: &str) -> String {
        html::error_html(message, &self.config.icon_registry)
    }

    pub fn error_html_escaped(&self, message: &str) -> String {
        html::error_html_escaped(message, &self.config.icon_registry)
    }

    pub fn escape_html(&self, value: impl Display) -> String {
        html::escape_html(value)
    }

    pub fn sanitize_html(&self, value: impl Display) -> String {
        html::sanitize_html(value)
    }
}
