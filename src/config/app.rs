//! Main application configuration
//!
//! This module defines the configuration structures for the charging console,
//! including environment variable loading, TOML files and validation.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

use super::ui::UiSettings;

/// Path of the charging management API under the server root
pub const DEFAULT_API_PATH: &str = "/charging-server-rest-management/api/charging";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub backend: BackendSettings,
    pub ui: UiSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in logs
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Charging management backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Server root, e.g. http://localhost:8080
    pub server_url: String,
    /// Path of the management API under the server root
    pub api_path: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "charging-console".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
        }
    }
}

impl BackendSettings {
    /// Full base URL of the management API
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.server_url.trim_end_matches('/'),
            self.api_path.trim_matches('/')
        )
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text (missing keys take defaults)
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Ok(url) = env::var("CHARGING_SERVER_URL") {
            self.backend.server_url = url;
        }
        if let Ok(path) = env::var("CHARGING_API_PATH") {
            self.backend.api_path = path;
        }
        if let Ok(limit) = env::var("ENTRY_LIMIT") {
            self.ui.entry_limit = limit
                .parse()
                .map_err(|_| anyhow!("Invalid ENTRY_LIMIT value: {}", limit))?;
        }
        if let Ok(max_size) = env::var("PAGINATION_MAX_SIZE") {
            self.ui.max_size = max_size
                .parse()
                .map_err(|_| anyhow!("Invalid PAGINATION_MAX_SIZE value: {}", max_size))?;
        }
        if let Ok(duration) = env::var("FLASH_DURATION_MS") {
            self.ui.flash_duration_ms = duration
                .parse()
                .map_err(|_| anyhow!("Invalid FLASH_DURATION_MS value: {}", duration))?;
        }
        Ok(())
    }

    /// Get the banner lifetime as Duration
    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.ui.flash_duration_ms)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.backend.server_url.is_empty() {
        return Err(anyhow!("Charging server URL cannot be empty"));
    }
    if !config.backend.server_url.starts_with("http://")
        && !config.backend.server_url.starts_with("https://")
    {
        return Err(anyhow!(
            "Charging server URL must start with http:// or https://: {}",
            config.backend.server_url
        ));
    }

    if config.ui.entry_limit == 0 {
        return Err(anyhow!("Entry limit must be greater than 0"));
    }
    if config.ui.max_size == 0 {
        return Err(anyhow!("Pagination max size must be greater than 0"));
    }
    if config.ui.flash_duration_ms == 0 {
        return Err(anyhow!("Flash duration must be greater than 0"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.ui.entry_limit, 10);
        assert_eq!(config.ui.max_size, 5);
        assert_eq!(config.flash_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_base_url_joins_segments() {
        let backend = BackendSettings {
            server_url: "http://charging.local:8080/".to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
        };
        assert_eq!(
            backend.base_url(),
            "http://charging.local:8080/charging-server-rest-management/api/charging"
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [backend]
            server_url = "http://10.0.0.5:8080"

            [ui]
            entry_limit = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.server_url, "http://10.0.0.5:8080");
        assert_eq!(config.backend.api_path, DEFAULT_API_PATH);
        assert_eq!(config.ui.entry_limit, 25);
        assert_eq!(config.ui.max_size, 5);
        assert_eq!(config.service.log_level, "warn");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.backend.server_url = "charging.local".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.ui.entry_limit = 0;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.ui.flash_duration_ms = 0;
        assert!(validate_config(&config).is_err());
    }
}
