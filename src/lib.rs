//! alarmctl - threshold alarm definition store
//!
//! This library persists a list of cpu/mem/disk threshold alarms to a JSON
//! file with crash-safe atomic replacement, and provides the CLI built on it.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`store`]: File-backed alarm store

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod store;

pub use domain::{AlarmType, ThresholdAlarm};
pub use error::{AppError, Result};
pub use store::AlarmStore;
