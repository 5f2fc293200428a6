use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use log::{error, info};

use unix_artifact_collector::catalog::{default_weasel_catalog, Catalog};
use unix_artifact_collector::cli::WeaselArgs;
use unix_artifact_collector::collectors::Collector;
use unix_artifact_collector::constants::{SUPERUSER_ERROR_CODE, WEASEL_LOG_DIRECTORY};
use unix_artifact_collector::privileges;
use unix_artifact_collector::sinks::StructuredLogSink;
use unix_artifact_collector::utils::logging::initialize_logging;

fn main() -> Result<()> {
    let args = WeaselArgs::parse();

    let log_dir = args
        .log_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(WEASEL_LOG_DIRECTORY));
    initialize_logging(args.verbose, &log_dir)?;

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown host".to_string());
    info!("Starting artifact collection on {}", host);

    // No partial collection without superuser privileges.
    if let Err(e) = privileges::check_root_access() {
        error!("{} Exiting...", e);
        process::exit(SUPERUSER_ERROR_CODE);
    }

    let catalog = load_catalog(&args)?;
    info!("Catalog holds {} commands", catalog.command_count());

    let mut collector = Collector::new(catalog, StructuredLogSink::new());
    collector.run()?;
    Ok(())
}

/// Use the YAML catalog when one was given, the compiled-in one otherwise
fn load_catalog(args: &WeaselArgs) -> Result<Catalog> {
    match &args.catalog {
        Some(path) => Catalog::from_yaml_file(path),
        None => Ok(default_weasel_catalog()),
    }
}
