//! Shared run loop used by the binary and by integration tests.
//!
//! Everything after argument parsing is parameterized over the output
//! writer, so tests capture reports and exit codes without spawning a
//! process.

use crate::baseline;
use crate::cli::Cli;
use crate::config::{ScanConfig, ScanScope};
use crate::detector::Detector;
use crate::output;
use crate::selector;
use anyhow::Result;
use clap::Parser;
use rustc_hash::FxHashSet;

/// Runs the scanner with the given arguments using stdout as the writer.
///
/// # Errors
///
/// Returns an error if writing output fails or the baseline cannot be
/// persisted in update mode.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Runs the scanner with the given arguments, writing output to `writer`,
/// and returns the process exit code (0 = clean or update mode, 1 = new
/// findings or argument error).
///
/// # Errors
///
/// Returns an error if writing output fails or the baseline cannot be
/// persisted in update mode.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["secretsweep".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, but captured by redirect
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    let config = scan_config_from(&cli);
    let root = std::env::current_dir()?;

    if config.verbose && !config.json {
        eprintln!("[VERBOSE] SecretSweep v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("[VERBOSE] Using {} threads", rayon::current_num_threads());
        eprintln!("[VERBOSE] Scope: {:?}", config.scope);
        eprintln!("[VERBOSE] Entropy threshold: {}", config.entropy_threshold);
        eprintln!("[VERBOSE] Baseline: {}", config.baseline_path.display());
    }

    // Scope resolution (including git queries) completes before the
    // parallel scan phase starts.
    let files = selector::resolve_files(&config, &root);
    if config.verbose && !config.json {
        eprintln!("[VERBOSE] Selected {} candidate files", files.len());
    }

    let progress = (!config.json).then(|| output::create_progress_bar(files.len() as u64));
    let detector = Detector::new(config.entropy_threshold);
    let findings = detector.scan_files(&files, progress.as_ref());
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let known = baseline::load(&config.baseline_path);
    let new_findings: Vec<_> = findings
        .iter()
        .filter(|f| !known.contains(&f.fingerprint))
        .cloned()
        .collect();

    if config.update_baseline {
        let mut union: FxHashSet<String> = known;
        union.extend(findings.iter().map(|f| f.fingerprint.clone()));
        baseline::save(&config.baseline_path, &union)?;
        output::print_baseline_updated(writer, findings.len(), &config.baseline_path)?;
        return Ok(0);
    }

    if config.json {
        output::print_json_report(writer, &new_findings)?;
    } else {
        output::print_human_report(writer, &new_findings)?;
    }

    Ok(i32::from(!new_findings.is_empty()))
}

/// Builds the immutable per-invocation configuration from parsed flags.
fn scan_config_from(cli: &Cli) -> ScanConfig {
    let scope = if let Some(rev) = &cli.since {
        ScanScope::ChangedSince(rev.clone())
    } else if cli.git_tracked {
        ScanScope::GitTracked
    } else {
        ScanScope::Paths(cli.paths.clone())
    };

    ScanConfig {
        scope,
        entropy_threshold: ScanConfig::entropy_threshold_for(!cli.no_entropy),
        ignore_globs: cli.ignore.clone(),
        baseline_path: cli.baseline.clone(),
        update_baseline: cli.update_baseline,
        json: cli.json,
        verbose: cli.verbose,
    }
}
