use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the file-tree collector variant.
///
/// The compiled-in catalog and paths are the baseline contract; every
/// flag here is an override, mainly useful for testing on non-production
/// hosts.
#[derive(Parser, Debug)]
#[clap(
    name = "artifact-collector",
    about = "Unix forensic artifact collector, file-tree output"
)]
pub struct CollectorArgs {
    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Path to a YAML catalog file (default: compiled-in catalog)
    #[clap(short = 'c', long)]
    pub catalog: Option<PathBuf>,

    /// Output root directory (default: output/)
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Log directory override (default: /var/log/artifactcollector)
    #[clap(long)]
    pub log_dir: Option<PathBuf>,
}

/// Command-line arguments for the structured-log collector variant.
#[derive(Parser, Debug)]
#[clap(
    name = "artifact-weasel",
    about = "Unix forensic artifact collector, structured-log output"
)]
pub struct WeaselArgs {
    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Path to a YAML catalog file (default: compiled-in catalog)
    #[clap(short = 'c', long)]
    pub catalog: Option<PathBuf>,

    /// Log directory override (default: /var/log/unixartifactweasel)
    #[clap(long)]
    pub log_dir: Option<PathBuf>,
}
