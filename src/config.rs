//! Registry client configuration
//!
//! Loaded from a TOML file with an optional `[registry]` table:
//!
//! ```toml
//! [registry]
//! endpoint = "https://tckimlik.nvi.gov.tr/Service/KPSPublic.asmx"
//! action = "http://tckimlik.nvi.gov.tr/WS/TCKimlikNoDogrula"
//! timeout_secs = 30
//! ```
//!
//! Missing fields fall back to the official NVİ values. Environment
//! variables (`TCKIMLIK_NVI_ENDPOINT`, `TCKIMLIK_NVI_ACTION`,
//! `TCKIMLIK_NVI_TIMEOUT_SECS`) override the file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Official KPSPublic endpoint
pub const DEFAULT_ENDPOINT: &str = "https://tckimlik.nvi.gov.tr/Service/KPSPublic.asmx";

/// SOAP action of the `TCKimlikNoDogrula` operation
pub const DEFAULT_ACTION: &str = "http://tckimlik.nvi.gov.tr/WS/TCKimlikNoDogrula";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "TCKIMLIK_NVI_ENDPOINT";

/// Environment variable overriding the SOAP action
pub const ENV_ACTION: &str = "TCKIMLIK_NVI_ACTION";

/// Environment variable overriding the timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "TCKIMLIK_NVI_TIMEOUT_SECS";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has wrong field types
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Timeout is zero or not a number
    #[error("invalid registry timeout: {0:?}")]
    InvalidTimeout(String),
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Registry client settings
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Settings for the NVİ registry client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// SOAP endpoint URL
    pub endpoint: String,

    /// Value of the `SOAPAction` header
    pub action: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            action: DEFAULT_ACTION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.registry.validate()?;
        Ok(config)
    }
}

impl RegistryConfig {
    /// Configuration pointing at a custom endpoint, other fields default
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Default configuration with environment overrides applied
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `TCKIMLIK_NVI_*` environment overrides
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Ok(action) = std::env::var(ENV_ACTION) {
            self.action = action;
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
        }
        self.validate()
    }

    /// Reject settings the client cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("0".to_string()));
        }
        Ok(())
    }

    /// Per-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
