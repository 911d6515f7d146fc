//! Domain models for alarmctl
//!
//! This module contains all domain types with validation.
//! Types are validated on construction (fail-fast pattern).

pub mod alarm;

pub use alarm::{AlarmType, ThresholdAlarm};
