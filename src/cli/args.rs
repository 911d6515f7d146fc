//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::domain::AlarmType;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Threshold alarm definition manager
///
/// Add, list, and remove cpu/mem/disk alarm thresholds stored in a JSON file.
#[derive(Parser, Debug)]
#[command(name = "alarmctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ALARMCTL_CONFIG")]
    pub config: Option<String>,

    /// Alarm store file (overrides the configured path)
    #[arg(short, long, global = true, env = "ALARMCTL_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all configured alarms
    List,

    /// Add a new alarm
    Add(AddArgs),

    /// Remove an alarm by position
    Remove(RemoveArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Resource to watch
    #[arg(value_enum)]
    pub alarm_type: AlarmTypeArg,

    /// Trigger level
    #[arg(allow_negative_numbers = true)]
    pub threshold: f64,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Zero-based position as shown by `list` (negative counts from the end)
    #[arg(allow_negative_numbers = true)]
    pub index: isize,
}

/// Alarm type argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmTypeArg {
    /// Processor utilization
    Cpu,
    /// Memory utilization
    Mem,
    /// Disk utilization
    Disk,
}

impl From<AlarmTypeArg> for AlarmType {
    fn from(arg: AlarmTypeArg) -> Self {
        match arg {
            AlarmTypeArg::Cpu => AlarmType::Cpu,
            AlarmTypeArg::Mem => AlarmType::Mem,
            AlarmTypeArg::Disk => AlarmType::Disk,
        }
    }
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
