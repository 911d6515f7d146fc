//! Unified error types for alarmctl
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed cause carried by [`StoreError::Load`]
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the alarm store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Alarm type outside the supported set
    #[error("Invalid alarm type: '{0}' (expected one of: cpu, mem, disk)")]
    InvalidAlarmType(String),

    /// Threshold is NaN or infinite
    #[error("Invalid threshold: {0} (must be a finite number)")]
    NonFiniteThreshold(f64),
}

/// Errors from the persistent alarm store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Top-level document is not a list of alarm objects
    #[error("'{}' is not the expected file format (expected a list of alarms)", .path.display())]
    Format { path: PathBuf },

    /// An entry could not be parsed or coerced; nothing was loaded
    #[error("Could not read '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: BoxedCause,
    },

    /// Positional index does not address an existing alarm
    #[error("Alarm index {index} out of range (store holds {len} alarm(s))")]
    IndexOutOfRange { index: isize, len: usize },

    /// Filesystem failure while reading or writing the backing file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Alarm rejected by domain validation
    #[error("Invalid alarm: {0}")]
    Domain(#[from] DomainError),

    /// Failed to serialize the collection
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
