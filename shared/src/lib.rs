//! Shared utilities and common types for the GeoRef server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Wire-level error response structures

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, DataConfig, Environment, LogFormat, LoggingConfig, ServerConfig,
};
pub use errors::{ErrorResponse, FieldViolation};
