//! Command line interface configuration using `clap`.
//! This struct defines the arguments and flags accepted by the program.

use crate::constants::DEFAULT_BASELINE_FILENAME;
use clap::Parser;
use std::path::PathBuf;

/// Scan a repository or explicit files for hardcoded secrets.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "SecretSweep - offline scanner for hardcoded secrets with baseline suppression",
    long_about = None
)]
pub struct Cli {
    /// Files or directories to scan.
    /// Can be a single directory, multiple files, or a mix of both.
    /// When no paths are provided, defaults to the current directory.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Scan only files changed since GIT_REF, e.g. --since origin/main.
    #[arg(long, value_name = "GIT_REF")]
    pub since: Option<String>,

    /// Scan only git tracked files.
    #[arg(long)]
    pub git_tracked: bool,

    /// Baseline file path.
    #[arg(long, default_value = DEFAULT_BASELINE_FILENAME)]
    pub baseline: PathBuf,

    /// Write all current findings to the baseline and exit 0.
    #[arg(long)]
    pub update_baseline: bool,

    /// Output raw JSON instead of the human-readable report.
    #[arg(long)]
    pub json: bool,

    /// Disable entropy heuristics.
    #[arg(long)]
    pub no_entropy: bool,

    /// Add a glob pattern to ignore (can be repeated).
    #[arg(long, value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Print verbose diagnostics to stderr.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
