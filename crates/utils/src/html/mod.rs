//! Markup helpers: escaping, icon registry and the loading/error templates.

pub mod escape;
pub mod icons;
pub mod templates;

pub use escape::{escape_html, sanitize_html, ESCAPE_MAP};
pub use icons::{IconRegistry, ERROR_ICON};
pub use templates::{
    error_html, error_html_escaped, loading_html, DEFAULT_ERROR_ICON, ERROR_TITLE,
};
