// Re-export all items from the submodules
mod default_catalogs;

pub use default_catalogs::{default_collector_catalog, default_weasel_catalog};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// A single command line to execute, with its execution mode.
///
/// `needs_shell` is decided per entry when the catalog is defined rather
/// than inferred from the command text at call time: lines that rely on
/// glob expansion, environment variables or `;`-chaining must go through
/// a shell interpreter, everything else is executed directly as an
/// argument vector.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogCommand {
    pub line: String,
    #[serde(default)]
    pub needs_shell: bool,
}

/// A named group of related forensic commands.
///
/// Command order within a section is the execution order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogSection {
    pub name: String,
    pub commands: Vec<CatalogCommand>,
}

/// The full static set of sections and their commands.
///
/// Constructed once at startup and injected into the collector; never
/// mutated afterward.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Catalog {
    pub sections: Vec<CatalogSection>,
}

impl Catalog {
    /// Load a catalog from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read catalog file: {}", path.display()))?;

        let catalog: Catalog = serde_yaml::from_str(&content)
            .context("Failed to parse YAML catalog")?;

        debug!("Loaded catalog from {}", path.display());
        Ok(catalog)
    }

    /// Total number of commands across all sections
    pub fn command_count(&self) -> usize {
        self.sections.iter().map(|s| s.commands.len()).sum()
    }
}

/// Build a command that is safe to execute as a plain argument vector.
pub fn argv(line: impl Into<String>) -> CatalogCommand {
    CatalogCommand {
        line: line.into(),
        needs_shell: false,
    }
}

/// Build a command that must be evaluated through a shell interpreter.
pub fn shell(line: impl Into<String>) -> CatalogCommand {
    CatalogCommand {
        line: line.into(),
        needs_shell: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_catalog_parses_sections_in_order() -> Result<()> {
        let yaml = r#"
sections:
  - name: greeting
    commands:
      - line: echo hello
      - line: "cat /etc/cron*"
        needs_shell: true
  - name: processes
    commands:
      - line: ps -eww
"#;
        let catalog: Catalog = serde_yaml::from_str(yaml)?;

        assert_eq!(catalog.sections.len(), 2);
        assert_eq!(catalog.sections[0].name, "greeting");
        assert_eq!(catalog.sections[0].commands[0].line, "echo hello");
        assert!(!catalog.sections[0].commands[0].needs_shell);
        assert!(catalog.sections[0].commands[1].needs_shell);
        assert_eq!(catalog.command_count(), 3);
        Ok(())
    }

    #[test]
    fn from_yaml_file_reports_missing_file() {
        let result = Catalog::from_yaml_file(Path::new("/nonexistent/catalog.yaml"));
        assert!(result.is_err());
    }
}
