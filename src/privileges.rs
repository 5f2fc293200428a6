//! Superuser privilege check.
//!
//! The catalog reads credential files, audit logs and spool directories
//! that only root can access, so the collector refuses to run without
//! superuser privileges rather than producing a partial collection.

use anyhow::{bail, Result};
use log::info;

use crate::constants::SUPERUSER_ID;

/// Check if the process is running with the superuser's effective uid
pub fn is_root() -> bool {
    unsafe { libc::geteuid() == SUPERUSER_ID }
}

/// Verify the superuser precondition, failing with a re-run hint.
///
/// Callers terminate the process with `SUPERUSER_ERROR_CODE` on failure;
/// no collection occurs under insufficient privilege.
pub fn check_root_access() -> Result<()> {
    info!("Checking effective user permissions");
    if !is_root() {
        bail!("Runtime does not have superuser privileges. Re-run program with sudo.");
    }
    info!("Confirmed superuser privileges, running...");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_agrees_with_effective_uid() {
        // CI may run as either uid; the check must agree with geteuid.
        if is_root() {
            assert!(check_root_access().is_ok());
        } else {
            assert!(check_root_access().is_err());
        }
    }
}
