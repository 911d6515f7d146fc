//! Remove command implementation

use crate::cli::args::{OutputFormat, RemoveArgs};
use crate::cli::output::{write_output, AlarmChange, ChangeKind};
use crate::config::Config;
use crate::error::Result;
use crate::store::AlarmStore;
use std::io::Write;

/// Execute the remove command
pub fn run_remove<W: Write>(
    out: &mut W,
    args: &RemoveArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let mut store = AlarmStore::open(&config.store.path)?;
    let index = store.resolve_index(args.index)?;

    let alarm = store.remove_index(args.index)?;
    log::info!("Removed {} from {}", alarm, store.path().display());

    let change = AlarmChange {
        action: ChangeKind::Removed,
        index,
        alarm,
    };
    write_output(out, &change, format)?;

    Ok(())
}
