/*
[INPUT]:  Optional YAML configuration file, CLI overrides
[OUTPUT]: Parsed storefront configuration with defaults for every field
[POS]:    Configuration layer - service endpoint and UI settings
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use bookstore_adapter::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the storefront
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorefrontConfig {
    /// Bookstore service connection
    #[serde(default)]
    pub api: ApiConfig,
    /// Terminal UI settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// Bookstore service connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Root URL of the bookstore service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Symbol printed in front of catalog prices and totals without a known currency
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Redraw interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Lines kept for the Logs tab
    #[serde(default = "default_log_buffer_capacity")]
    pub log_buffer_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            tick_ms: default_tick_ms(),
            log_buffer_capacity: default_log_buffer_capacity(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

fn default_tick_ms() -> u64 {
    250
}

fn default_log_buffer_capacity() -> usize {
    2000
}

impl StorefrontConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration: explicit path, then the per-user default file, then defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("api.base_url must not be empty");
        }
        if self.api.timeout_secs == 0 {
            anyhow::bail!("api.timeout_secs must be greater than zero");
        }
        if self.ui.tick_ms == 0 {
            anyhow::bail!("ui.tick_ms must be greater than zero");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.api.timeout_secs),
            connect_timeout: Duration::from_secs(self.api.connect_timeout_secs),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms)
    }
}

/// `<config_dir>/bookstore/storefront.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bookstore").join("storefront.yaml"))
}
