//! # unix_artifact_collector
//!
//! A host forensic-artifact collector for Unix systems. Run as a
//! privileged process, it executes a fixed catalog of diagnostic and
//! forensic shell commands (kernel info, network state, process lists,
//! credential files, scheduled jobs, package inventories, SSH
//! configuration) and persists each result.
//!
//! Two binary variants share this library and differ only in command
//! catalog and output sink:
//!
//! - `artifact-collector` writes each command's stdout to a categorized
//!   file tree (`output/<section>/<command>.txt`).
//! - `artifact-weasel` emits one structured syslog-style record per
//!   command (`SECTION=… COMMAND=… ERROR=… OUTPUT=…`).
//!
//! ## Pipeline
//!
//! Catalog → [`collectors::Collector`] → [`runner`] → [`sinks::ResultSink`].
//!
//! Execution is strictly sequential, one child process at a time, with no
//! timeout. No individual command failure aborts a run; the only fatal
//! precondition is running without superuser privileges.
//!
//! ```no_run
//! use unix_artifact_collector::catalog::default_collector_catalog;
//! use unix_artifact_collector::collectors::Collector;
//! use unix_artifact_collector::sinks::FileTreeSink;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut collector = Collector::new(default_collector_catalog(), FileTreeSink::new("output"));
//! let summary = collector.run()?;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod collectors;
pub mod constants;
pub mod models;
pub mod privileges;
pub mod runner;
pub mod sinks;
pub mod utils;
