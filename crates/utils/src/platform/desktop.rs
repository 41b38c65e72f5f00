//! Desktop platform implementations
//!
//! Uses the Tokio runtime for timers and tasks and `tracing` for logs.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;

use crate::log::{LogSink, TracingSink};

/// Timer future that completes after `delay`.
///
/// The deadline is fixed when this is called, not when the future is first
/// polled. Must be called from within a Tokio runtime.
pub fn sleep(delay: Duration) -> BoxFuture<'static, ()> {
    Box::pin(tokio::time::sleep(delay))
}

/// Spawn a detached task on the current Tokio runtime.
pub fn spawn<F>(task: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(task);
}

pub fn default_sink() -> Arc<dyn LogSink> {
    Arc::new(TracingSink)
}
