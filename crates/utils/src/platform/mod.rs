//! Platform-specific implementations
//!
//! Timers, task spawning and the default log sink differ between native and
//! browser builds. The correct platform is selected at compile time based on
//! the target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::{default_sink, sleep, spawn, window_config, ConsoleSink};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{default_sink, sleep, spawn};
