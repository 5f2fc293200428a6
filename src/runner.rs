//! Execution of a single catalog command.
//!
//! Spawns exactly one child process per call, waits for it synchronously,
//! and classifies the result. There is no timeout: a hung child blocks the
//! run, an accepted limitation of the sequential design.

use std::io::ErrorKind;
use std::process::Command;

use crate::catalog::CatalogCommand;
use crate::models::Outcome;

/// Captured output and classified outcome of one command execution.
#[derive(Debug, Clone)]
pub struct CommandExecution {
    pub stdout: String,
    pub stderr: String,
    pub outcome: Outcome,
}

impl CommandExecution {
    fn failed(outcome: Outcome) -> Self {
        CommandExecution {
            stdout: String::new(),
            stderr: String::new(),
            outcome,
        }
    }
}

/// Execute one catalog command and capture its output.
///
/// Commands marked `needs_shell` are handed to `sh -c` so globs,
/// environment variables and pipelines resolve; everything else is split
/// into an argument vector and spawned directly, avoiding the shell
/// injection surface for the common case.
pub fn run(command: &CatalogCommand) -> CommandExecution {
    let output = if command.needs_shell {
        Command::new("sh").arg("-c").arg(&command.line).output()
    } else {
        let argv = match split_command_line(&command.line) {
            Some(argv) if !argv.is_empty() => argv,
            _ => {
                return CommandExecution::failed(Outcome::ProcessError(format!(
                    "malformed command line: {}",
                    command.line
                )))
            }
        };
        Command::new(&argv[0]).args(&argv[1..]).output()
    };

    match output {
        Ok(output) => {
            // Strict decode: garbled output is discarded, never persisted.
            match (
                String::from_utf8(output.stdout),
                String::from_utf8(output.stderr),
            ) {
                (Ok(stdout), Ok(stderr)) => CommandExecution {
                    stdout,
                    stderr,
                    outcome: Outcome::Success,
                },
                _ => CommandExecution::failed(Outcome::DecodeError),
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            CommandExecution::failed(Outcome::CommandNotFound)
        }
        Err(e) => CommandExecution::failed(Outcome::ProcessError(e.to_string())),
    }
}

/// Split a command line into an argument vector, honoring single and
/// double quotes. Returns `None` for an unterminated quote or trailing
/// backslash.
fn split_command_line(line: &str) -> Option<Vec<String>> {
    let mut argv = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_single = false;
    let mut in_double = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' if !in_double => {
                in_single = !in_single;
                in_token = true;
            }
            '"' if !in_single => {
                in_double = !in_double;
                in_token = true;
            }
            '\\' if !in_single => {
                current.push(chars.next()?);
                in_token = true;
            }
            c if c.is_whitespace() && !in_single && !in_double => {
                if in_token {
                    argv.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_single || in_double {
        return None;
    }
    if in_token {
        argv.push(current);
    }
    Some(argv)
}
