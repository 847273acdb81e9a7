//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server binding

pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Errors raised while reading configuration from the environment
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Location of the prefecture seed data
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DataConfig {
    /// JSON seed file; the embedded fixture is used when unset
    #[serde(default)]
    pub prefecture_data_path: Option<PathBuf>,
}

impl DataConfig {
    pub fn from_env() -> Self {
        Self {
            prefecture_data_path: env_var("PREFECTURE_DATA_PATH").map(PathBuf::from),
        }
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Seed data configuration
    #[serde(default)]
    pub data: DataConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            logging: LoggingConfig::for_environment(env),
            data: DataConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env()?;

        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::for_environment(environment).with_env_overrides()?,
            data: DataConfig::from_env(),
        })
    }
}

/// Read a variable, treating empty values as unset.
pub(crate) fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
