//! Core error types for energy-command-core.
//!
//! Month synthesis itself cannot fail once a valid [`MonthKey`] exists, so
//! the hierarchy is small: configuration I/O and input validation.
//!
//! [`MonthKey`]: crate::energy::MonthKey

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for energy-command-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Month index outside 0..=11
    #[error("Month index {month0} out of range (expected 0-11)")]
    MonthOutOfRange { month0: u32 },

    /// Year outside the representable calendar
    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),

    /// Date string could not be parsed
    #[error("Invalid date '{input}': expected {expected}")]
    InvalidDate { input: String, expected: &'static str },

    /// Task title missing or blank
    #[error("Task title must not be empty")]
    EmptyTitle,

    /// Task time not in HH:MM form
    #[error("Invalid task time '{0}': expected HH:MM")]
    InvalidTime(String),

    /// No generated or custom task has this id
    #[error("Unknown task id '{0}'")]
    UnknownTask(String),

    /// Unknown impact type name
    #[error("Unknown impact type '{0}': expected reduction, shift or generation")]
    UnknownImpactType(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
