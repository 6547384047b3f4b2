//! SecretSweep: offline detection of hardcoded secrets.
//!
//! The engine scans text content with a fixed catalog of pattern rules plus
//! a Shannon-entropy heuristic, assigns each finding a confidence score,
//! derives a stable content-hiding fingerprint for every finding, and
//! suppresses findings recorded in a persisted baseline. The CLI reports the
//! remainder as human text or JSON; the exit code is the sole pass/fail
//! signal for automation.
//!
//! Pipeline: [`selector`] resolves the scan scope into file paths,
//! [`loader`] decodes each file (or skips it), [`detector`] runs the
//! [`rules`] catalog and entropy analysis per line, [`baseline`] filters
//! previously accepted fingerprints, and [`output`] renders the report.

pub mod baseline;
pub mod cli;
pub mod config;
pub mod constants;
pub mod detector;
pub mod entry_point;
pub mod fingerprint;
pub mod loader;
pub mod output;
pub mod rules;
pub mod selector;
pub mod utils;
