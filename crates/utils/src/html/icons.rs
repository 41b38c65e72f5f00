//! Icon registry
//!
//! Maps icon names (e.g. `"error"`) to markup. Templates fall back to their
//! own inline SVG when a name is missing.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the icon used by the error panel.
pub const ERROR_ICON: &str = "error";

/// Icon name to markup mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRegistry {
    icons: HashMap<String, String>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a registry from a JSON object of `name -> markup`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a registry from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::IconFile {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json_str(&json)?;
        tracing::debug!(path = ?path, icons = registry.len(), "Loaded icon registry");
        Ok(registry)
    }

    pub fn insert(&mut self, name: impl Into<String>, markup: impl Into<String>) {
        self.icons.insert(name.into(), markup.into());
    }

    /// Builder-style variant of [`IconRegistry::insert`].
    pub fn with_icon(mut self, name: impl Into<String>, markup: impl Into<String>) -> Self {
        self.insert(name, markup);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.icons.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl FromIterator<(String, String)> for IconRegistry {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            icons: iter.into_iter().collect(),
        }
    }
}
