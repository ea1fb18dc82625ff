//! # Client Configuration
//!
//! Settings the repository layer needs: where the REST backend lives and
//! which language user-facing messages are written in.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SALON_API_BASE_URL=https://api.salon.example                       │
//! │     SALON_LOCALE=en                                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/salon-client/salon.toml (Linux)                          │
//! │     ~/Library/Application Support/com.salon.client/salon.toml (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:3000, ko                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here decides between HTTP and IPC. That is the resolver's job and
//! it only looks at the host context.
//!
//! ## Configuration File Format
//! ```toml
//! # salon.toml
//! [api]
//! base_url = "http://localhost:3000"
//!
//! [ui]
//! locale = "ko"  # ko | en
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ConfigError, ConfigResult};
use crate::messages::Locale;

/// Environment variable overriding [`ApiSettings::base_url`].
pub const ENV_API_BASE_URL: &str = "SALON_API_BASE_URL";

/// Environment variable overriding [`UiSettings::locale`].
pub const ENV_LOCALE: &str = "SALON_LOCALE";

// =============================================================================
// Sections
// =============================================================================

/// REST backend settings (web target only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL the `/api/...` paths are joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default)]
    pub locale: Locale,
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl ClientConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (salon.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading client config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load client config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Client config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::Invalid(format!("api.base_url '{}': {}", self.api.base_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Invalid(format!(
                "api.base_url must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }

        Ok(())
    }

    /// Applies overrides from a variable lookup (the process environment in
    /// [`load`](Self::load)).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_BASE_URL) {
            debug!(url = %url, "Overriding API base URL from environment");
            self.api.base_url = url;
        }

        if let Some(locale) = lookup(ENV_LOCALE) {
            match locale.parse() {
                Ok(parsed) => self.ui.locale = parsed,
                Err(_) => warn!(locale = %locale, "Unknown locale in environment"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "salon", "client")
            .map(|dirs| dirs.config_dir().join("salon.toml"))
    }

    /// Returns the configured locale.
    pub fn locale(&self) -> Locale {
        self.ui.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.locale(), Locale::Ko);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: ClientConfig = toml::from_str("[ui]\nlocale = \"en\"\n").unwrap();
        assert_eq!(config.locale(), Locale::En);
        assert_eq!(config.api.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_validation_rejects_non_http_urls() {
        let mut config = ClientConfig::default();

        config.api.base_url = "ws://localhost:3000".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "https://salon.example".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_API_BASE_URL, "https://api.salon.example"),
            (ENV_LOCALE, "EN"),
        ]
        .into_iter()
        .collect();

        let mut config = ClientConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "https://api.salon.example");
        assert_eq!(config.locale(), Locale::En);
    }

    #[test]
    fn test_unknown_locale_override_is_ignored() {
        let mut config = ClientConfig::default();
        config.apply_overrides(|key| (key == ENV_LOCALE).then(|| "fr".to_string()));
        assert_eq!(config.locale(), Locale::Ko);
    }

    #[test]
    fn test_save_then_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("salon.toml");

        let mut config = ClientConfig::default();
        config.api.base_url = "http://10.0.0.5:3000".to_string();
        config.save(Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[api]"));

        let parsed: ClientConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("salon.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        assert!(matches!(
            ClientConfig::load(Some(path.clone())),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(ClientConfig::load_or_default(Some(path)).api.base_url, "http://localhost:3000");
    }
}
