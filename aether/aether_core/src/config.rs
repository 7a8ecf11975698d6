//! Configuration for the AetherStream launcher.
//!
//! Configuration is read from an optional TOML file. Every field has a
//! default, so an empty file (or no file) yields a usable configuration.
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [host]
//! data_dir = "/var/lib/aetherstream"
//! run_for_secs = 3600
//! tick_interval_ms = 250
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::utils::LogLevel;

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written to stderr, unless `RUST_LOG` is set
    #[serde(default)]
    pub level: LogLevel,
}

/// Stream host configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Directory holding the session lock
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Stop after this many seconds; run until interrupted when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_for_secs: Option<u64>,

    /// How often the run loop checks for a stop request
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("aetherstream"))
        .unwrap_or_else(|| PathBuf::from("./aether-data"))
}

fn default_tick_interval_ms() -> u64 {
    250
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            run_for_secs: None,
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl HostConfig {
    /// Check that the values can be used to start a host.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("host.data_dir must not be empty".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "host.tick_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Stream host configuration
    #[serde(default)]
    pub host: HostConfig,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.message().to_string()))
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading configuration");
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check the whole configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.host.validate()
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
