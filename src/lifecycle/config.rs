//! Runtime settings for the order system.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const ORDER_BUFFER_SIZE_ENV: &str = "ORDER_BUFFER_SIZE";
pub const ORDER_EVENT_CAPACITY_ENV: &str = "ORDER_EVENT_CAPACITY";
/// Path of an optional TOML config file, read by the demo binary.
pub const ORDER_CONFIG_ENV: &str = "ORDER_CONFIG";

fn default_order_buffer_size() -> usize {
    32
}

fn default_event_capacity() -> usize {
    64
}

/// Channel sizes for the order actor and its event publisher.
///
/// ```toml
/// order_buffer_size = 64
/// event_capacity = 256
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    /// Requests that may queue for the order actor before callers wait.
    #[serde(default = "default_order_buffer_size")]
    pub order_buffer_size: usize,
    /// Events a subscriber may fall behind before it starts missing them.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            order_buffer_size: default_order_buffer_size(),
            event_capacity: default_event_capacity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid config: {0}")]
    Parse(String),
}

impl SystemConfig {
    /// Reads overrides from `ORDER_BUFFER_SIZE` and `ORDER_EVENT_CAPACITY`. Unset variables
    /// keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parses TOML config text. Missing keys keep their defaults; unknown keys are rejected.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Same as [`SystemConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ORDER_BUFFER_SIZE_ENV) {
            config.order_buffer_size = parse_size(ORDER_BUFFER_SIZE_ENV, &value)?;
        }
        if let Some(value) = lookup(ORDER_EVENT_CAPACITY_ENV) {
            config.event_capacity = parse_size(ORDER_EVENT_CAPACITY_ENV, &value)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Both channels panic on creation with a zero capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order_buffer_size == 0 {
            return Err(ConfigError::Zero("order_buffer_size"));
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::Zero("event_capacity"));
        }
        Ok(())
    }
}

fn parse_size(name: &'static str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}
