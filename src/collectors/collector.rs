use anyhow::Result;
use log::{info, warn};

use crate::catalog::Catalog;
use crate::models::{ExecutionResult, Outcome, RunSummary};
use crate::runner;
use crate::sinks::ResultSink;

/// Drives one collection run: iterates the catalog, executes each command,
/// and routes every result to the sink.
pub struct Collector<S: ResultSink> {
    catalog: Catalog,
    sink: S,
}

impl<S: ResultSink> Collector<S> {
    pub fn new(catalog: Catalog, sink: S) -> Self {
        Collector { catalog, sink }
    }

    /// Access the sink, mainly for tests that record routed results.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run the full catalog.
    ///
    /// Sections execute in catalog order; commands within a section in
    /// their declared order. Per-command failures are logged at warn level
    /// and never abort the run, so the catalog is always fully drained.
    pub fn run(&mut self) -> Result<RunSummary> {
        // Sink bootstrap failure is logged loudly but does not stop the
        // run; the file sink recreates directories at write time.
        if let Err(e) = self.sink.prepare(&self.catalog) {
            warn!("Sink bootstrap failed, continuing: {:#}", e);
        }

        let mut summary = RunSummary::default();

        for section in &self.catalog.sections {
            for command in &section.commands {
                info!("{} | command: {}", section.name.to_uppercase(), command.line);

                let execution = runner::run(command);
                match &execution.outcome {
                    Outcome::Success => {}
                    outcome => {
                        warn!("{} | {} - {}", section.name, command.line, outcome);
                    }
                }
                summary.record(&execution.outcome);

                let result = ExecutionResult {
                    section: section.name.clone(),
                    command: command.line.clone(),
                    stdout: execution.stdout,
                    stderr: execution.stderr,
                    outcome: execution.outcome,
                };
                if let Err(e) = self.sink.consume(&result) {
                    warn!("{} | {} - sink error: {:#}", section.name, command.line, e);
                }
            }
        }

        info!("Collection complete: {}", summary);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{argv, shell, CatalogSection};

    /// Sink that records everything it is handed, for asserting execution
    /// order and drain behavior.
    #[derive(Default)]
    struct RecordingSink {
        seen: Vec<(String, String, Outcome)>,
        fail_consume: bool,
    }

    impl ResultSink for RecordingSink {
        fn consume(&mut self, result: &ExecutionResult) -> Result<()> {
            self.seen.push((
                result.section.clone(),
                result.command.clone(),
                result.outcome.clone(),
            ));
            if self.fail_consume {
                anyhow::bail!("sink refused the result");
            }
            Ok(())
        }
    }

    fn catalog(sections: Vec<(&str, Vec<crate::catalog::CatalogCommand>)>) -> Catalog {
        Catalog {
            sections: sections
                .into_iter()
                .map(|(name, commands)| CatalogSection {
                    name: name.to_string(),
                    commands,
                })
                .collect(),
        }
    }

    #[test]
    fn every_command_is_attempted_once_in_section_order() -> Result<()> {
        let catalog = catalog(vec![
            ("first", vec![argv("echo one"), argv("echo two")]),
            ("second", vec![argv("echo three")]),
        ]);
        let mut collector = Collector::new(catalog, RecordingSink::default());

        let summary = collector.run()?;

        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.succeeded, 3);
        let commands: Vec<&str> = collector
            .sink
            .seen
            .iter()
            .map(|(_, c, _)| c.as_str())
            .collect();
        assert_eq!(commands, vec!["echo one", "echo two", "echo three"]);
        Ok(())
    }

    #[test]
    fn missing_command_does_not_abort_the_run() -> Result<()> {
        let catalog = catalog(vec![(
            "mixed",
            vec![
                argv("/no/such/binary"),
                argv("echo survived"),
            ],
        )]);
        let mut collector = Collector::new(catalog, RecordingSink::default());

        let summary = collector.run()?;

        assert_eq!(summary.attempted, 2);
        assert_eq!(summary.not_found, 1);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(collector.sink.seen[1].1, "echo survived");
        assert_eq!(collector.sink.seen[1].2, Outcome::Success);
        Ok(())
    }

    #[test]
    fn decode_errors_are_counted_and_routed() -> Result<()> {
        let catalog = catalog(vec![("binary", vec![shell("printf '\\377'")])]);
        let mut collector = Collector::new(catalog, RecordingSink::default());

        let summary = collector.run()?;

        assert_eq!(summary.decode_errors, 1);
        assert_eq!(collector.sink.seen[0].2, Outcome::DecodeError);
        Ok(())
    }

    #[test]
    fn sink_errors_do_not_abort_the_run() -> Result<()> {
        let catalog = catalog(vec![("greeting", vec![argv("echo a"), argv("echo b")])]);
        let sink = RecordingSink {
            fail_consume: true,
            ..Default::default()
        };
        let mut collector = Collector::new(catalog, sink);

        let summary = collector.run()?;

        assert_eq!(summary.attempted, 2);
        assert_eq!(collector.sink.seen.len(), 2);
        Ok(())
    }
}
