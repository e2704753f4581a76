use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::failover::FailoverConfig;
use super::logging::{LogFormat, LoggingConfig};
use super::provider::ProviderConfig;

const LOCAL_CONFIG_PATH: &str = "weighted-failover.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/weighted-failover/config.toml";

/// Main configuration structure for weighted failover
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Record pair and hosted zone to act on
    #[serde(default)]
    pub failover: FailoverConfig,

    /// DNS provider client settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order for the file:
    /// 1. Explicitly provided path
    /// 2. weighted-failover.toml in current directory
    /// 3. /etc/weighted-failover/config.toml
    /// 4. Default configuration
    ///
    /// Process environment variables are applied on top, then CLI overrides.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::load_with_env(path, cli_overrides, |name| std::env::var(name).ok())
    }

    /// Same as [`Config::load`] with an explicit environment lookup.
    pub fn load_with_env<F>(
        path: Option<&str>,
        cli_overrides: CliOverrides,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_env_overrides(env)?;
        config.apply_cli_overrides(cli_overrides)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply the deployment environment (the variable names a Lambda
    /// function is typically configured with).
    pub fn apply_env_overrides<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(zone) = env("HOSTED_ZONE_ID") {
            self.failover.hosted_zone_id = zone;
        }
        if let Some(name) = env("RECORD_SET_NAME") {
            self.failover.record_set_name = name;
        }
        if let Some(id) = env("PRIMARY_IDENTIFIER") {
            self.failover.primary_identifier = id;
        }
        if let Some(id) = env("SECONDARY_IDENTIFIER") {
            self.failover.secondary_identifier = id;
        }
        if let Some(record_type) = env("RECORD_TYPE") {
            self.failover.record_type = record_type
                .parse()
                .map_err(|_| ConfigError::InvalidOverride("RECORD_TYPE".into(), record_type))?;
        }
        if let Some(level) = env("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = env("LOG_FORMAT") {
            self.logging.format = format
                .parse()
                .map_err(|e| ConfigError::InvalidOverride("LOG_FORMAT".into(), e))?;
        }
        Ok(())
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) -> Result<(), ConfigError> {
        if let Some(zone) = overrides.hosted_zone_id {
            self.failover.hosted_zone_id = zone;
        }
        if let Some(name) = overrides.record_set_name {
            self.failover.record_set_name = name;
        }
        if let Some(record_type) = overrides.record_type {
            self.failover.record_type = record_type
                .parse()
                .map_err(|_| ConfigError::InvalidOverride("--record-type".into(), record_type))?;
        }
        if let Some(id) = overrides.primary_identifier {
            self.failover.primary_identifier = id;
        }
        if let Some(id) = overrides.secondary_identifier {
            self.failover.secondary_identifier = id;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let failover = &self.failover;

        if failover.hosted_zone_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "hosted_zone_id is required".to_string(),
            ));
        }

        if failover.record_set_name.is_empty() {
            return Err(ConfigError::Validation(
                "record_set_name is required".to_string(),
            ));
        }

        if !failover.record_set_name.ends_with('.') {
            return Err(ConfigError::Validation(format!(
                "record_set_name '{}' must be fully qualified with a trailing dot",
                failover.record_set_name
            )));
        }

        if failover.primary_identifier.is_empty() || failover.secondary_identifier.is_empty() {
            return Err(ConfigError::Validation(
                "primary_identifier and secondary_identifier are required".to_string(),
            ));
        }

        if failover.primary_identifier == failover.secondary_identifier {
            return Err(ConfigError::Validation(format!(
                "primary and secondary identifiers are both '{}'",
                failover.primary_identifier
            )));
        }

        if self.provider.call_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "provider.call_timeout_ms cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub hosted_zone_id: Option<String>,
    pub record_set_name: Option<String>,
    pub record_type: Option<String>,
    pub primary_identifier: Option<String>,
    pub secondary_identifier: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}
