//! WASM platform implementations
//!
//! Browser timers via `gloo-timers`, tasks via `spawn_local`, logs via the
//! developer console, and configuration read from `window` globals.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Object, Reflect};
use send_wrapper::SendWrapper;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::UtilsConfig;
use crate::html::IconRegistry;
use crate::log::{Level, LogSink};

/// Timer future that completes after `delay`.
///
/// `TimeoutFuture` is `!Send`; the browser runs everything on one thread so
/// the `SendWrapper` never crosses threads.
pub fn sleep(delay: Duration) -> BoxFuture<'static, ()> {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    Box::pin(SendWrapper::new(TimeoutFuture::new(millis)))
}

/// Spawn a detached task on the browser event loop.
pub fn spawn<F>(task: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    wasm_bindgen_futures::spawn_local(task);
}

pub fn default_sink() -> Arc<dyn LogSink> {
    Arc::new(ConsoleSink)
}

/// Writes lines to the browser developer console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: Level, line: &str) {
        let line = JsValue::from_str(line);
        match level {
            Level::Debug => web_sys::console::debug_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Error => web_sys::console::error_1(&line),
        }
    }
}

/// Build configuration from `window.DEBUG`, `window.location.hostname` and
/// `window.ICONS`.
pub fn window_config() -> UtilsConfig {
    let mut config = UtilsConfig::default();
    let Some(window) = web_sys::window() else {
        return config;
    };
    let global: &JsValue = window.as_ref();

    config.dev_mode_override = Reflect::get(global, &JsValue::from_str("DEBUG"))
        .ok()
        .and_then(|value| value.as_bool());
    config.host = window.location().hostname().ok();
    config.icon_registry = Reflect::get(global, &JsValue::from_str("ICONS"))
        .map(|icons| read_icons(&icons))
        .unwrap_or_default();

    config
}

/// Collect the string-valued entries of a JS object. Anything else is skipped.
fn read_icons(icons: &JsValue) -> IconRegistry {
    let Some(icons) = icons.dyn_ref::<Object>() else {
        return IconRegistry::new();
    };
    Object::entries(icons)
        .iter()
        .filter_map(|entry| {
            let pair = entry.dyn_into::<Array>().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}
