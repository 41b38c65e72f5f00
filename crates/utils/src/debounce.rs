//! Trailing-edge debouncer
//!
//! Rapid calls collapse into one delayed invocation that uses the arguments of
//! the last call. Each [`Debouncer`] owns at most one pending timer; a new call
//! aborts it before scheduling the next one.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::{AbortHandle, Abortable};

use crate::platform;

/// Delay used when none is configured.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Wraps a callback so that only the last of a burst of calls runs.
///
/// The callback's result is discarded. On native targets the debouncer must be
/// used from within a Tokio runtime. Dropping the debouncer does not cancel an
/// invocation that is already scheduled; call [`Debouncer::cancel`] for that.
pub struct Debouncer<A> {
    delay: Duration,
    callback: Arc<dyn Fn(A) + Send + Sync>,
    pending: Option<AbortHandle>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    /// Debouncer with the 300 ms default delay.
    pub fn with_default_delay<F>(callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::new(DEFAULT_DEBOUNCE_DELAY, callback)
    }

    /// Cancel the pending invocation (if any) and schedule `args` to run after
    /// the delay.
    ///
    /// The callback never runs synchronously, even with a zero delay.
    pub fn call(&mut self, args: A) {
        self.cancel();

        let (handle, registration) = AbortHandle::new_pair();
        let timer = platform::sleep(self.delay);
        let callback = Arc::clone(&self.callback);
        let task = Abortable::new(
            async move {
                timer.await;
                callback(args);
            },
            registration,
        );

        platform::spawn(async move {
            // Err(Aborted) means a later call replaced this one
            let _ = task.await;
        });
        self.pending = Some(handle);
    }

    /// Drop the pending invocation without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            tracing::trace!("Debounced call cancelled");
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A> fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}
