//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::ThresholdAlarm;
use serde::Serialize;
use std::io::{self, Write};

/// Format output into a writer based on the selected format
pub fn write_output<W: Write, T: Serialize + TableDisplay>(
    out: &mut W,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(out, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// One alarm with its position in the store
#[derive(Debug, Clone, Serialize)]
pub struct AlarmEntry {
    pub index: usize,
    #[serde(flatten)]
    pub alarm: ThresholdAlarm,
}

impl TableDisplay for AlarmEntry {
    fn to_table(&self) -> String {
        format!(
            "[{}] {:<4} threshold {}",
            self.index, self.alarm.alarm_type, self.alarm.threshold
        )
    }

    fn to_compact(&self) -> String {
        format!("{}:{}", self.index, self.alarm)
    }
}

/// Alarm list for display
#[derive(Debug, Clone, Serialize)]
pub struct AlarmList {
    pub file: String,
    pub alarms: Vec<AlarmEntry>,
}

impl AlarmList {
    /// Number alarms by their current position
    pub fn new(file: String, alarms: &[ThresholdAlarm]) -> Self {
        let alarms = alarms
            .iter()
            .enumerate()
            .map(|(index, alarm)| AlarmEntry {
                index,
                alarm: *alarm,
            })
            .collect();
        Self { file, alarms }
    }
}

impl TableDisplay for AlarmList {
    fn to_table(&self) -> String {
        if self.alarms.is_empty() {
            return format!("No alarms configured ({})", self.file);
        }

        let mut output = format!("Alarm File: {}\n", self.file);
        output.push_str(&format!("Alarms: {}\n\n", self.alarms.len()));

        for entry in &self.alarms {
            output.push_str(&entry.to_table());
            output.push('\n');
        }

        output
    }

    fn to_compact(&self) -> String {
        self.alarms
            .iter()
            .map(|a| a.to_compact())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Kind of change applied by a mutating command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
}

/// Result of an add or remove
#[derive(Debug, Clone, Serialize)]
pub struct AlarmChange {
    pub action: ChangeKind,
    pub index: usize,
    pub alarm: ThresholdAlarm,
}

impl TableDisplay for AlarmChange {
    fn to_table(&self) -> String {
        let verb = match self.action {
            ChangeKind::Added => "Added",
            ChangeKind::Removed => "Removed",
        };
        format!("{} alarm [{}]: {}", verb, self.index, self.alarm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlarmType;

    fn sample() -> Vec<ThresholdAlarm> {
        vec![
            ThresholdAlarm::new(AlarmType::Cpu, 80.0).unwrap(),
            ThresholdAlarm::new(AlarmType::Mem, 75.5).unwrap(),
        ]
    }

    #[test]
    fn test_list_table() {
        let list = AlarmList::new("alarms.json".to_string(), &sample());
        let table = list.to_table();
        assert!(table.contains("Alarms: 2"));
        assert!(table.contains("[0] cpu  threshold 80"));
        assert!(table.contains("[1] mem  threshold 75.5"));
    }

    #[test]
    fn test_empty_list_table() {
        let list = AlarmList::new("alarms.json".to_string(), &[]);
        assert_eq!(list.to_table(), "No alarms configured (alarms.json)");
    }

    #[test]
    fn test_list_compact() {
        let list = AlarmList::new("alarms.json".to_string(), &sample());
        assert_eq!(list.to_compact(), "0:cpu > 80, 1:mem > 75.5");
    }

    #[test]
    fn test_list_json_flattens_alarm() {
        let list = AlarmList::new("alarms.json".to_string(), &sample());
        let mut buf = Vec::new();
        write_output(&mut buf, &list, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            value["alarms"][1],
            serde_json::json!({ "index": 1, "type": "mem", "threshold": 75.5 })
        );
    }

    #[test]
    fn test_change_table() {
        let change = AlarmChange {
            action: ChangeKind::Removed,
            index: 0,
            alarm: sample()[0],
        };
        assert_eq!(change.to_table(), "Removed alarm [0]: cpu > 80");
    }
}
