//! Error types
//!
//! Every helper in this crate is total. The only fallible surface is loading
//! [`UtilsConfig`](crate::config::UtilsConfig) from the environment.

use std::path::PathBuf;

/// Errors raised while building configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false/1/0), got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("Failed to read icon registry {path:?}: {source}")]
    IconFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Icon registry is not a JSON object of strings: {0}")]
    IconJson(#[from] serde_json::Error),
}
