//! Global constants for the artifact collector.
//!
//! This module centralizes exit codes and filesystem paths so the two
//! binary variants stay in agreement.

// Process exit codes
/// Exit code for a referenced file that does not exist.
///
/// Carried as a logical outcome tag; the baseline flow never actually
/// terminates with this code.
pub const FILE_NOT_FOUND_ERROR_CODE: i32 = 1;

/// Exit code used when the process lacks superuser privileges.
pub const SUPERUSER_ERROR_CODE: i32 = 2;

/// Effective user id of the superuser.
pub const SUPERUSER_ID: u32 = 0;

// Filesystem layout
/// Root directory for per-section output files (file-tree sink).
pub const OUTPUT_DIRECTORY: &str = "output";

/// Log directory for the file-tree collector variant.
pub const COLLECTOR_LOG_DIRECTORY: &str = "/var/log/artifactcollector";

/// Log directory for the structured-log collector variant.
pub const WEASEL_LOG_DIRECTORY: &str = "/var/log/unixartifactweasel";

/// Timestamp format used in per-run log file names.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";
