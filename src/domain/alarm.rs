//! Threshold alarm domain types
//!
//! Provides the resource kind enumeration and the alarm definition record
//! stored by [`crate::store::AlarmStore`].

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of resource an alarm watches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmType {
    /// Processor utilization
    Cpu,
    /// Memory utilization
    Mem,
    /// Disk utilization
    Disk,
}

impl AlarmType {
    /// Lowercase name as written to the backing file
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Mem => "mem",
            Self::Disk => "disk",
        }
    }
}

impl fmt::Display for AlarmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AlarmType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpu" => Ok(Self::Cpu),
            "mem" => Ok(Self::Mem),
            "disk" => Ok(Self::Disk),
            _ => Err(DomainError::InvalidAlarmType(s.to_string())),
        }
    }
}

/// A single alarm definition: resource kind plus trigger level
///
/// The threshold range is not checked; any finite value is accepted.
/// Alarms have no identity of their own, only a position in the store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdAlarm {
    /// Monitored resource kind
    #[serde(rename = "type")]
    pub alarm_type: AlarmType,
    /// Trigger level
    #[serde(deserialize_with = "deserialize_threshold")]
    pub threshold: f64,
}

impl ThresholdAlarm {
    /// Create a new alarm definition
    ///
    /// # Errors
    /// Returns `DomainError::NonFiniteThreshold` for NaN or infinite thresholds
    pub fn new(alarm_type: AlarmType, threshold: f64) -> Result<Self, DomainError> {
        if !threshold.is_finite() {
            return Err(DomainError::NonFiniteThreshold(threshold));
        }
        Ok(Self {
            alarm_type,
            threshold,
        })
    }
}

impl fmt::Display for ThresholdAlarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > {}", self.alarm_type, self.threshold)
    }
}

/// Threshold as it may appear on disk: a number or a numeric string
#[derive(Deserialize)]
#[serde(untagged)]
enum RawThreshold {
    Number(f64),
    Text(String),
}

fn deserialize_threshold<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = match RawThreshold::deserialize(deserializer)
        .map_err(|_| D::Error::custom("threshold must be a number or numeric string"))?
    {
        RawThreshold::Number(v) => v,
        RawThreshold::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("threshold '{}' is not a number", s)))?,
    };

    if !value.is_finite() {
        return Err(D::Error::custom(DomainError::NonFiniteThreshold(value)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_type_from_str() {
        assert_eq!("cpu".parse::<AlarmType>().unwrap(), AlarmType::Cpu);
        assert_eq!("MEM".parse::<AlarmType>().unwrap(), AlarmType::Mem);
        assert_eq!(" disk ".parse::<AlarmType>().unwrap(), AlarmType::Disk);
        assert!(matches!(
            "gpu".parse::<AlarmType>(),
            Err(DomainError::InvalidAlarmType(_))
        ));
    }

    #[test]
    fn test_alarm_type_display_matches_serde() {
        for alarm_type in [AlarmType::Cpu, AlarmType::Mem, AlarmType::Disk] {
            let json = serde_json::to_string(&alarm_type).unwrap();
            assert_eq!(json, format!("\"{}\"", alarm_type));
        }
    }

    #[test]
    fn test_new_accepts_any_finite_threshold() {
        assert!(ThresholdAlarm::new(AlarmType::Cpu, -5.0).is_ok());
        assert!(ThresholdAlarm::new(AlarmType::Disk, 250.0).is_ok());
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(matches!(
            ThresholdAlarm::new(AlarmType::Cpu, f64::NAN),
            Err(DomainError::NonFiniteThreshold(_))
        ));
        assert!(ThresholdAlarm::new(AlarmType::Mem, f64::INFINITY).is_err());
    }

    #[test]
    fn test_serialize_shape() {
        let alarm = ThresholdAlarm::new(AlarmType::Cpu, 80.0).unwrap();
        let json = serde_json::to_string(&alarm).unwrap();
        assert_eq!(json, r#"{"type":"cpu","threshold":80.0}"#);
    }

    #[test]
    fn test_deserialize_coerces_threshold() {
        let alarm: ThresholdAlarm =
            serde_json::from_str(r#"{"type":"mem","threshold":75}"#).unwrap();
        assert_eq!(alarm.threshold, 75.0);

        let alarm: ThresholdAlarm =
            serde_json::from_str(r#"{"type":"disk","threshold":"90.5"}"#).unwrap();
        assert_eq!(alarm.alarm_type, AlarmType::Disk);
        assert_eq!(alarm.threshold, 90.5);
    }

    #[test]
    fn test_deserialize_rejects_bad_threshold() {
        let inputs = [
            r#"{"type":"cpu","threshold":"high"}"#,
            r#"{"type":"cpu","threshold":"inf"}"#,
            r#"{"type":"cpu","threshold":true}"#,
            r#"{"type":"cpu","threshold":null}"#,
            r#"{"type":"cpu"}"#,
        ];
        for input in inputs {
            assert!(
                serde_json::from_str::<ThresholdAlarm>(input).is_err(),
                "{} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_deserialize_rejects_unknown_type() {
        assert!(
            serde_json::from_str::<ThresholdAlarm>(r#"{"type":"gpu","threshold":1.0}"#).is_err()
        );
    }

    #[test]
    fn test_display() {
        let alarm = ThresholdAlarm::new(AlarmType::Mem, 75.5).unwrap();
        assert_eq!(alarm.to_string(), "mem > 75.5");
    }
}
