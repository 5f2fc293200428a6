//! Result sinks: destination strategies for captured command output.
//!
//! Both sinks consume one execution result at a time with no buffering.
//! The file-tree sink persists stdout to a categorized directory tree;
//! the structured-log sink emits one quoted-field log record per command.

mod file_tree;
mod structured_log;

pub use file_tree::FileTreeSink;
pub use structured_log::StructuredLogSink;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::models::ExecutionResult;

/// Destination strategy for captured command output.
pub trait ResultSink {
    /// One-time bootstrap before the first result arrives. The file-tree
    /// sink creates its per-section directories here; the structured-log
    /// sink has nothing to set up.
    fn prepare(&mut self, _catalog: &Catalog) -> Result<()> {
        Ok(())
    }

    /// Consume one execution result.
    fn consume(&mut self, result: &ExecutionResult) -> Result<()>;
}
