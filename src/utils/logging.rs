//! Logging bootstrap: a per-run log file mirrored to the terminal.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use log::{info, warn, LevelFilter};
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

use crate::constants::LOG_TIMESTAMP_FORMAT;

/// Initialize logging to the terminal and a timestamped log file under
/// `log_dir`, e.g. `/var/log/artifactcollector/2026-08-23_10:04:11.log`.
///
/// The console mirrors the log stream in real time. If the log file
/// cannot be created (typically an unprivileged run, which terminates at
/// the privilege check anyway), logging degrades to terminal-only.
pub fn initialize_logging(verbose: bool, log_dir: &Path) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_path = log_dir.join(format!("{}.log", Local::now().format(LOG_TIMESTAMP_FORMAT)));

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    let file_error: Option<io::Error> =
        match fs::create_dir_all(log_dir).and_then(|_| File::create(&log_path)) {
            Ok(file) => {
                loggers.push(WriteLogger::new(level, Config::default(), file));
                None
            }
            Err(e) => Some(e),
        };

    CombinedLogger::init(loggers).context("Failed to initialize logger")?;

    info!("Started execution");
    match file_error {
        None => info!("Logging to {}", log_path.display()),
        Some(e) => warn!(
            "Unable to open log file {}, terminal only: {}",
            log_path.display(),
            e
        ),
    }
    Ok(())
}
