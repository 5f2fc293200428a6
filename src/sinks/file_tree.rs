use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::catalog::Catalog;
use crate::models::{ExecutionResult, Outcome};
use crate::sinks::ResultSink;

/// Writes each successful command's stdout to
/// `<root>/<section>/<command>.txt`.
///
/// Only stdout of successful executions reaches disk; failed commands
/// produce no file. Reruns overwrite, never append.
pub struct FileTreeSink {
    root: PathBuf,
}

impl FileTreeSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileTreeSink { root: root.into() }
    }

    fn section_dir(&self, section: &str) -> PathBuf {
        self.root.join(sanitize(section))
    }

    fn output_path(&self, section: &str, command: &str) -> PathBuf {
        self.section_dir(section).join(format!("{}.txt", sanitize(command)))
    }
}

impl ResultSink for FileTreeSink {
    /// Ensure the output root and every per-section subdirectory exist.
    /// Idempotent; called once during startup.
    fn prepare(&mut self, catalog: &Catalog) -> Result<()> {
        info!("Checking directory structure under {}", self.root.display());

        for section in &catalog.sections {
            let dir = self.section_dir(&section.name);
            if dir.exists() {
                info!("Directory {} exists", dir.display());
            } else {
                info!("Directory {} does not exist, creating...", dir.display());
                fs::create_dir_all(&dir)
                    .context(format!("Failed to create directory: {}", dir.display()))?;
            }
        }
        Ok(())
    }

    fn consume(&mut self, result: &ExecutionResult) -> Result<()> {
        if result.outcome != Outcome::Success {
            return Ok(());
        }

        let path = self.output_path(&result.section, &result.command);
        info!("Saving output to {}", path.display());

        // The section directory was created during prepare, but recreate
        // it if something removed it mid-run.
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&path, &result.stdout)
            .context(format!("Failed to write output to {}", path.display()))?;

        info!("Saved {} successfully", path.display());
        Ok(())
    }
}

/// Replace spaces and path separators so a section or command text can be
/// used as a single path component.
fn sanitize(text: &str) -> String {
    text.replace(' ', "_").replace('/', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{argv, Catalog, CatalogSection};
    use tempfile::TempDir;

    fn result(section: &str, command: &str, stdout: &str, outcome: Outcome) -> ExecutionResult {
        ExecutionResult {
            section: section.to_string(),
            command: command.to_string(),
            stdout: stdout.to_string(),
            stderr: String::new(),
            outcome,
        }
    }

    fn one_section_catalog(name: &str) -> Catalog {
        Catalog {
            sections: vec![CatalogSection {
                name: name.to_string(),
                commands: vec![argv("echo hello")],
            }],
        }
    }

    #[test]
    fn prepare_creates_section_directories() -> Result<()> {
        let root = TempDir::new()?;
        let mut sink = FileTreeSink::new(root.path());

        sink.prepare(&one_section_catalog("login history"))?;
        assert!(root.path().join("login_history").is_dir());

        // idempotent
        sink.prepare(&one_section_catalog("login history"))?;
        Ok(())
    }

    #[test]
    fn consume_writes_sanitized_file_name() -> Result<()> {
        let root = TempDir::new()?;
        let mut sink = FileTreeSink::new(root.path());
        sink.prepare(&one_section_catalog("greeting"))?;

        sink.consume(&result(
            "greeting",
            "cat /etc/hostname",
            "myhost\n",
            Outcome::Success,
        ))?;

        let path = root.path().join("greeting/cat__etc_hostname.txt");
        assert_eq!(fs::read_to_string(path)?, "myhost\n");
        Ok(())
    }

    #[test]
    fn rerun_overwrites_instead_of_appending() -> Result<()> {
        let root = TempDir::new()?;
        let mut sink = FileTreeSink::new(root.path());
        sink.prepare(&one_section_catalog("greeting"))?;

        sink.consume(&result("greeting", "echo hello", "first\n", Outcome::Success))?;
        sink.consume(&result("greeting", "echo hello", "second\n", Outcome::Success))?;

        let path = root.path().join("greeting/echo_hello.txt");
        assert_eq!(fs::read_to_string(path)?, "second\n");
        Ok(())
    }

    #[test]
    fn consume_recreates_missing_section_directory() -> Result<()> {
        let root = TempDir::new()?;
        let mut sink = FileTreeSink::new(root.path());

        // No prepare: directory is missing at write time.
        sink.consume(&result("greeting", "echo hello", "hello\n", Outcome::Success))?;
        assert!(root.path().join("greeting/echo_hello.txt").exists());
        Ok(())
    }

    #[test]
    fn failed_commands_produce_no_file() -> Result<()> {
        let root = TempDir::new()?;
        let mut sink = FileTreeSink::new(root.path());
        sink.prepare(&one_section_catalog("greeting"))?;

        sink.consume(&result("greeting", "badcmd", "", Outcome::CommandNotFound))?;
        sink.consume(&result("greeting", "garbled", "", Outcome::DecodeError))?;

        let entries: Vec<_> = fs::read_dir(root.path().join("greeting"))?.collect();
        assert!(entries.is_empty());
        Ok(())
    }
}
