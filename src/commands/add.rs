//! Add command implementation

use crate::cli::args::{AddArgs, OutputFormat};
use crate::cli::output::{write_output, AlarmChange, ChangeKind};
use crate::config::Config;
use crate::error::Result;
use crate::store::AlarmStore;
use std::io::Write;

/// Execute the add command
pub fn run_add<W: Write>(
    out: &mut W,
    args: &AddArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let mut store = AlarmStore::open(&config.store.path)?;

    let alarm = store.add(args.alarm_type.into(), args.threshold)?;
    log::info!("Added {} to {}", alarm, store.path().display());

    let change = AlarmChange {
        action: ChangeKind::Added,
        index: store.len() - 1,
        alarm,
    };
    write_output(out, &change, format)?;

    Ok(())
}
