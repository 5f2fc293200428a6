use std::fmt;

/// Classified result of attempting to execute one catalog command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The child process ran and its output decoded cleanly.
    Success,
    /// The target executable or referenced file does not exist.
    CommandNotFound,
    /// Captured bytes were not valid UTF-8; the raw bytes are discarded.
    DecodeError,
    /// Any other process-creation or OS-level failure.
    ProcessError(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "success"),
            Outcome::CommandNotFound => write!(f, "command or file not found"),
            Outcome::DecodeError => write!(f, "error decoding output"),
            Outcome::ProcessError(detail) => write!(f, "process error: {}", detail),
        }
    }
}

/// One command execution as handed to a result sink.
///
/// Created once per command, consumed exactly once, never retained.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub section: String,
    pub command: String,
    pub stdout: String,
    pub stderr: String,
    pub outcome: Outcome,
}

/// Per-run counters, logged when the catalog has been drained.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub not_found: usize,
    pub decode_errors: usize,
    pub process_errors: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        self.attempted += 1;
        match outcome {
            Outcome::Success => self.succeeded += 1,
            Outcome::CommandNotFound => self.not_found += 1,
            Outcome::DecodeError => self.decode_errors += 1,
            Outcome::ProcessError(_) => self.process_errors += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} commands attempted: {} succeeded, {} not found, {} decode errors, {} process errors",
            self.attempted, self.succeeded, self.not_found, self.decode_errors, self.process_errors
        )
    }
}
