//! Per-invocation scan configuration.

use crate::constants::{DEFAULT_ENTROPY_THRESHOLD, ENTROPY_DISABLED_THRESHOLD};
use std::path::PathBuf;

/// Which files a scan covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanScope {
    /// Explicit files or directories (directories are expanded).
    Paths(Vec<PathBuf>),
    /// Every version-controlled file, via `git ls-files`.
    GitTracked,
    /// Files changed against a revision, via `git diff --name-only`.
    ChangedSince(String),
}

/// Immutable configuration for one scan invocation.
///
/// The entropy threshold lives here rather than in any global state: every
/// call site reads the same per-invocation value, and disabling entropy is
/// just an unreachably high threshold.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Which files to scan.
    pub scope: ScanScope,
    /// Shannon entropy threshold in bits per character.
    pub entropy_threshold: f64,
    /// User-supplied ignore globs, added to the fixed default set.
    pub ignore_globs: Vec<String>,
    /// Baseline file location.
    pub baseline_path: PathBuf,
    /// Rewrite the baseline with the union of old and observed fingerprints.
    pub update_baseline: bool,
    /// Emit the structured JSON payload instead of the human report.
    pub json: bool,
    /// Emit `[VERBOSE]` diagnostics on stderr.
    pub verbose: bool,
}

impl ScanConfig {
    /// Returns the effective entropy threshold for an enabled/disabled flag.
    #[must_use]
    pub fn entropy_threshold_for(enabled: bool) -> f64 {
        if enabled {
            DEFAULT_ENTROPY_THRESHOLD
        } else {
            ENTROPY_DISABLED_THRESHOLD
        }
    }
}
