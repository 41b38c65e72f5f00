//! JavaScript exports
//!
//! Exposes the markup helpers to the page under their browser names.

use js_sys::Object;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::html;
use crate::platform;

/// `String(value)` semantics for arbitrary JS values.
fn js_to_string(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if value.is_null() {
        return "null".to_string();
    }
    if value.is_undefined() {
        return "undefined".to_string();
    }
    value.unchecked_ref::<Object>().to_string().into()
}

#[wasm_bindgen(js_name = escapeHTML)]
pub fn escape_html(value: JsValue) -> String {
    html::escape_html(js_to_string(&value))
}

#[wasm_bindgen(js_name = sanitizeHTML)]
pub fn sanitize_html(value: JsValue) -> String {
    html::sanitize_html(js_to_string(&value))
}

#[wasm_bindgen(js_name = createLoadingHTML)]
pub fn create_loading_html() -> String {
    html::loading_html()
}

/// Reads `window.ICONS` on every call so icons registered later are picked up.
/// The message is not escaped.
#[wasm_bindgen(js_name = createErrorHTML)]
pub fn create_error_html(message: &str) -> String {
    let config = platform::window_config();
    html::error_html(message, &config.icon_registry)
}
