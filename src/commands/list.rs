//! List command implementation
//!
//! Lists all stored alarm definitions.

use crate::cli::args::OutputFormat;
use crate::cli::output::{write_output, AlarmList};
use crate::config::Config;
use crate::error::Result;
use crate::store::AlarmStore;
use std::io::Write;

/// Execute the list command
pub fn run_list<W: Write>(out: &mut W, config: &Config, format: OutputFormat) -> Result<()> {
    let store = AlarmStore::open(&config.store.path)?;

    let list = AlarmList::new(store.path().display().to_string(), store.alarms());
    write_output(out, &list, format)?;

    Ok(())
}
