//! Configuration: storage, profile defaults, observability.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`POSHA_DB_PATH`, `POSHA_LOG`)
//! 2. Config file passed to [`PoshaConfig::load`]
//! 3. Compiled defaults

pub mod defaults;
pub mod observability_config;
pub mod profile_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use profile_config::ProfileConfig;
pub use storage_config::StorageConfig;

use crate::errors::ConfigError;

/// Environment variable overriding `storage.db_path`.
pub const ENV_DB_PATH: &str = "POSHA_DB_PATH";
/// Environment variable overriding `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "POSHA_LOG";

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PoshaConfig {
    pub storage: StorageConfig,
    pub profile: ProfileConfig,
    pub observability: ObservabilityConfig,
}

impl PoshaConfig {
    /// Load configuration from an optional file, then apply env overrides
    /// and validate the result.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(db_path) = std::env::var(ENV_DB_PATH) {
            if !db_path.is_empty() {
                self.storage.db_path = db_path;
            }
        }
        // `POSHA_LOG` may hold a full filter directive; only a bare level
        // is copied into the config.
        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            let level = level.trim().to_ascii_lowercase();
            if defaults::VALID_LOG_LEVELS.contains(&level.as_str()) {
                self.observability.log_level = level;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.db_path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "storage.db_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !defaults::VALID_LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "expected one of {}, got '{}'",
                    defaults::VALID_LOG_LEVELS.join(", "),
                    self.observability.log_level
                ),
            });
        }
        if self.profile.default_skin_tone.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "profile.default_skin_tone".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}
