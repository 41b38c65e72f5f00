//! Utils configuration
//!
//! Everything the helpers read from their environment (the debug flag, the
//! host name, the icon registry) arrives here explicitly instead of through
//! globals.

use std::env;
use std::time::Duration;

use crate::debounce::DEFAULT_DEBOUNCE_DELAY;
use crate::error::ConfigError;
use crate::html::IconRegistry;

/// Host name treated as a local development machine.
pub const LOCAL_DEV_HOST: &str = "localhost";

pub const ENV_DEBUG: &str = "CIP_DEBUG";
pub const ENV_HOST: &str = "CIP_HOST";
pub const ENV_ICONS_PATH: &str = "CIP_ICONS_PATH";
pub const ENV_DEBOUNCE_MS: &str = "CIP_DEBOUNCE_MS";

/// Configuration for [`Utils`](crate::Utils)
#[derive(Debug, Clone, PartialEq)]
pub struct UtilsConfig {
    /// Explicit debug flag. Only `Some(true)` forces dev mode.
    pub dev_mode_override: Option<bool>,
    /// Current host name, used to detect local development
    pub host: Option<String>,
    /// Icons available to the templates
    pub icon_registry: IconRegistry,
    /// Delay for debouncers created through `Utils::debounce`
    pub debounce_delay: Duration,
}

impl Default for UtilsConfig {
    fn default() -> Self {
        Self {
            dev_mode_override: None,
            host: None,
            icon_registry: IconRegistry::default(),
            debounce_delay: DEFAULT_DEBOUNCE_DELAY,
        }
    }
}

impl UtilsConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from browser globals (`window.DEBUG`,
    /// `window.location.hostname`, `window.ICONS`)
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Self {
        crate::platform::window_config()
    }

    /// Load configuration through `lookup`, which returns the value of a
    /// variable or `None` when unset. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let dev_mode_override = get(ENV_DEBUG)
            .map(|value| parse_bool(ENV_DEBUG, &value))
            .transpose()?;

        let icon_registry = match get(ENV_ICONS_PATH) {
            Some(path) => IconRegistry::load(path)?,
            None => IconRegistry::default(),
        };

        let debounce_delay = match get(ENV_DEBOUNCE_MS) {
            Some(value) => Duration::from_millis(value.parse().map_err(|_| {
                ConfigError::InvalidNumber {
                    var: ENV_DEBOUNCE_MS,
                    value: value.clone(),
                }
            })?),
            None => DEFAULT_DEBOUNCE_DELAY,
        };

        Ok(Self {
            dev_mode_override,
            host: get(ENV_HOST),
            icon_registry,
            debounce_delay,
        })
    }

    pub fn with_dev_mode_override(mut self, enabled: bool) -> Self {
        self.dev_mode_override = Some(enabled);
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_icon_registry(mut self, icons: IconRegistry) -> Self {
        self.icon_registry = icons;
        self
    }

    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    /// True when the debug flag is set, or the host is a local dev host.
    pub fn is_dev_mode(&self) -> bool {
        self.dev_mode_override == Some(true) || self.host.as_deref().is_some_and(is_local_host)
    }
}

/// Whether `host` names the local development machine.
pub fn is_local_host(host: &str) -> bool {
    host.eq_ignore_ascii_case(LOCAL_DEV_HOST)
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = UtilsConfig::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config, UtilsConfig::default());
        assert_eq!(config.debounce_delay, Duration::from_millis(300));
        assert!(!config.is_dev_mode());
    }

    #[test]
    fn test_reads_all_variables() {
        let mut icons = tempfile::NamedTempFile::new().expect("temp file");
        write!(icons, r#"{{"error": "<svg id=\"e\"/>"}}"#).expect("write icons");
        let path = icons.path().to_string_lossy().to_string();

        let config = UtilsConfig::from_lookup(lookup(&[
            (ENV_DEBUG, "true"),
            (ENV_HOST, "app.example.com"),
            (ENV_ICONS_PATH, path.as_str()),
            (ENV_DEBOUNCE_MS, "150"),
        ]))
        .expect("config");

        assert_eq!(config.dev_mode_override, Some(true));
        assert_eq!(config.host.as_deref(), Some("app.example.com"));
        assert_eq!(config.icon_registry.get("error"), Some("<svg id=\"e\"/>"));
        assert_eq!(config.debounce_delay, Duration::from_millis(150));
    }

    #[test]
    fn test_bool_spellings() {
        for (raw, expected) in [("1", true), ("TRUE", true), ("0", false), ("False", false)] {
            let config =
                UtilsConfig::from_lookup(lookup(&[(ENV_DEBUG, raw)])).expect("config");
            assert_eq!(config.dev_mode_override, Some(expected), "raw: {raw}");
        }
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = UtilsConfig::from_lookup(lookup(&[(ENV_DEBUG, "  "), (ENV_HOST, "")]))
            .expect("config");
        assert_eq!(config.dev_mode_override, None);
        assert_eq!(config.host, None);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let result = UtilsConfig::from_lookup(lookup(&[(ENV_DEBUG, "yes please")]));
        assert!(matches!(result, Err(ConfigError::InvalidBool { .. })));

        let result = UtilsConfig::from_lookup(lookup(&[(ENV_DEBOUNCE_MS, "-5")]));
        assert!(matches!(result, Err(ConfigError::InvalidNumber { .. })));
    }

    #[test]
    fn test_rejects_missing_icon_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("icons.json").to_string_lossy().to_string();
        let result = UtilsConfig::from_lookup(lookup(&[(ENV_ICONS_PATH, path.as_str())]));
        assert!(matches!(result, Err(ConfigError::IconFile { .. })));
    }

    #[test]
    fn test_dev_mode_predicate() {
        assert!(UtilsConfig::default().with_dev_mode_override(true).is_dev_mode());
        assert!(UtilsConfig::default().with_host("localhost").is_dev_mode());
        assert!(UtilsConfig::default().with_host("LocalHost").is_dev_mode());
        assert!(!UtilsConfig::default().with_host("example.com").is_dev_mode());
        assert!(!UtilsConfig::default().with_host("127.0.0.1").is_dev_mode());

        // An explicit `false` does not hide a local host
        assert!(UtilsConfig::default()
            .with_dev_mode_override(false)
            .with_host("localhost")
            .is_dev_mode());
        assert!(!UtilsConfig::default()
            .with_dev_mode_override(false)
            .is_dev_mode());
    }
}
