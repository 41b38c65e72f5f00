//! CIP Utils
//!
//! Client-side helpers shared across the application:
//! - [`Debouncer`]: collapse bursts of calls into one trailing call
//! - [`html`]: loading/error markup builders and markup escaping
//! - [`log`]: leveled logging gated on the development environment
//!
//! [`Utils`] bundles all of them behind one value built from [`UtilsConfig`].
//! Multi-platform support (native and `wasm32`) is provided via compile-time
//! `cfg` selection in [`platform`].

pub mod config;
pub mod debounce;
pub mod error;
pub mod html;
pub mod log;
pub mod platform;
mod utils;

#[cfg(target_arch = "wasm32")]
pub mod bindings;

pub use config::UtilsConfig;
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_DELAY};
pub use error::ConfigError;
pub use html::{error_html, escape_html, loading_html, sanitize_html, IconRegistry};
pub use log::{Level, LogSink, Logger};
pub use utils::Utils;
