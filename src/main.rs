//! alarmctl - threshold alarm definition manager
//!
//! A command-line tool for adding, listing, and removing cpu/mem/disk
//! threshold alarms stored in a JSON file.

use alarmctl::cli::args::{generate_completions, Cli, Commands};
use alarmctl::commands::{run_add, run_list, run_remove};
use alarmctl::config::ConfigBuilder;
use alarmctl::error::{AppError, StoreError};
use clap::Parser;
use std::io;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        init_logging(cli.verbose);
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    if let Commands::Completions { shell } = &cli.command {
        generate_completions(*shell);
        return Ok(());
    }

    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .with_store_path(cli.file.clone())
        .build();

    init_logging(config.general.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::List => run_list(&mut out, &config, cli.format),

        Commands::Add(args) => run_add(&mut out, args, &config, cli.format),

        Commands::Remove(args) => run_remove(&mut out, args, &config, cli.format),

        Commands::Completions { .. } => Ok(()),
    }
}

/// Initialize env_logger once; RUST_LOG still takes precedence
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .format_timestamp(None)
    .try_init();
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Store(StoreError::Format { path })
        | AppError::Store(StoreError::Load { path, .. }) => {
            eprintln!();
            eprintln!("Hint: {} must be a JSON list such as", path.display());
            eprintln!("      [{{\"type\": \"cpu\", \"threshold\": 80.0}}]");
        }
        AppError::Store(StoreError::IndexOutOfRange { .. }) => {
            eprintln!();
            eprintln!("Hint: Run 'alarmctl list' to see valid positions.");
        }
        _ => {}
    }
}
