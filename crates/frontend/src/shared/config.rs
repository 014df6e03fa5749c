//! Application configuration.
//!
//! The configuration is a TOML document compiled into the wasm bundle.
//! It is parsed once on first access; a broken document falls back to the
//! built-in defaults with a warning in the console.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// localStorage key holding the JSON array of registrations
    pub registrations_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Filename is `<prefix>-<ISO timestamp>.csv`
    pub filename_prefix: String,
    /// Notice shown when there is nothing to export
    pub empty_message: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[storage]
registrations_key = "registrations"

[export]
filename_prefix = "registrations"
empty_message = "No registrations to export."
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                registrations_key: "registrations".to_string(),
            },
            export: ExportConfig {
                filename_prefix: "registrations".to_string(),
                empty_message: "No registrations to export.".to_string(),
            },
        }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Invalid embedded config, using defaults: {}", e);
        AppConfig::default()
    }
});

/// Parse the embedded configuration
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    toml::from_str(DEFAULT_CONFIG)
}

/// Shared configuration instance
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), AppConfig::default());
    }

    #[test]
    fn test_registrations_key_is_stable() {
        assert_eq!(config().storage.registrations_key, "registrations");
    }
}
