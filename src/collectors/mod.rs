//! Orchestration of a collection run.
//!
//! The collector drains the catalog: every command of every section is
//! attempted exactly once, results are routed to the configured sink, and
//! no individual failure aborts the run.

mod collector;

pub use collector::Collector;
