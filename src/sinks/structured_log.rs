use anyhow::Result;
use log::info;

use crate::models::{ExecutionResult, Outcome};
use crate::sinks::ResultSink;

/// Emits one structured log record per successful command at info level:
///
/// ```text
/// SECTION="<section>" COMMAND="<command>" ERROR="<TRUE|FALSE>" OUTPUT="<text>"
/// ```
///
/// `ERROR` is `TRUE` when the command wrote to stderr, in which case
/// `OUTPUT` carries the stderr text instead of stdout, never both.
/// Embedded quote characters in captured text are not escaped; consumers
/// must tolerate the literal format.
#[derive(Debug, Default)]
pub struct StructuredLogSink;

impl StructuredLogSink {
    pub fn new() -> Self {
        StructuredLogSink
    }

    /// Render the record for one result, or `None` when the execution
    /// failed and there is no decoded text to report.
    pub fn render(result: &ExecutionResult) -> Option<String> {
        if result.outcome != Outcome::Success {
            return None;
        }

        let stdout = result.stdout.trim_end();
        let stderr = result.stderr.trim_end();
        let (error, output) = if stderr.is_empty() {
            ("FALSE", stdout)
        } else {
            ("TRUE", stderr)
        };

        Some(format!(
            "SECTION=\"{}\" COMMAND=\"{}\" ERROR=\"{}\" OUTPUT=\"{}\"",
            result.section, result.command, error, output
        ))
    }
}

impl ResultSink for StructuredLogSink {
    fn consume(&mut self, result: &ExecutionResult) -> Result<()> {
        if let Some(record) = Self::render(result) {
            info!("{}", record);
        }
        Ok(())
    }
}
