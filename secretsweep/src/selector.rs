//! Scope resolution: turning a configured scope into a concrete file list.
//!
//! Version-control queries run once, before the parallel scan phase. A
//! failing or absent `git` degrades to an empty list with a warning — a
//! non-repository directory must never crash the tool.

use crate::config::{ScanConfig, ScanScope};
use crate::constants::DEFAULT_IGNORE_GLOBS;
use crate::utils::normalize_display_path;
use colored::Colorize;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

/// Resolves the configured scope into the concrete list of candidate files,
/// with ignore globs applied.
#[must_use]
pub fn resolve_files(config: &ScanConfig, root: &Path) -> Vec<PathBuf> {
    let ignore = build_ignore_set(&config.ignore_globs);

    let candidates = match &config.scope {
        ScanScope::Paths(paths) => paths.clone(),
        ScanScope::GitTracked => git_tracked_files(root),
        ScanScope::ChangedSince(rev) => git_changed_files(root, rev),
    };

    let mut files = Vec::new();
    for path in candidates {
        if path.is_dir() {
            collect_dir(&path, &ignore, &mut files);
        } else if path.is_file() && !is_ignored(&path, &ignore) {
            files.push(path);
        }
    }
    files
}

/// Compiles the default ignore set plus user-supplied patterns. Patterns
/// that fail to compile are skipped with a warning rather than aborting.
fn build_ignore_set(user_globs: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_GLOBS() {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    for pattern in user_globs {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(err) => {
                eprintln!(
                    "{} invalid ignore pattern '{pattern}': {err}",
                    "[WARN]".yellow().bold()
                );
            }
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

fn is_ignored(path: &Path, ignore: &GlobSet) -> bool {
    ignore.is_match(normalize_display_path(path))
}

fn collect_dir(dir: &Path, ignore: &GlobSet, files: &mut Vec<PathBuf>) {
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if !is_ignored(path, ignore) {
            files.push(path.to_path_buf());
        }
    }
}

/// Lists version-controlled files under `root`. Failure degrades to empty.
fn git_tracked_files(root: &Path) -> Vec<PathBuf> {
    run_git(root, &["ls-files"])
}

/// Lists files changed between `rev` and HEAD. Failure degrades to empty.
fn git_changed_files(root: &Path, rev: &str) -> Vec<PathBuf> {
    run_git(root, &["diff", "--name-only", rev, "HEAD"])
}

fn run_git(root: &Path, args: &[&str]) -> Vec<PathBuf> {
    let output = Command::new("git").args(args).current_dir(root).output();
    match output {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout)
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| root.join(l))
            .collect(),
        Ok(out) => {
            eprintln!(
                "{} git {} failed: {}",
                "[WARN]".yellow().bold(),
                args.join(" "),
                String::from_utf8_lossy(&out.stderr).trim()
            );
            Vec::new()
        }
        Err(err) => {
            eprintln!(
                "{} git unavailable ({err}); scanning nothing for this scope",
                "[WARN]".yellow().bold()
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(scope: ScanScope, ignore_globs: Vec<String>) -> ScanConfig {
        ScanConfig {
            scope,
            entropy_threshold: 4.0,
            ignore_globs,
            baseline_path: PathBuf::from(".baseline.json"),
            update_baseline: false,
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn test_directory_expansion_skips_default_ignores() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("app.py"), "x = 1\n").expect("write");
        std::fs::write(dir.path().join("logo.png"), [0u8, 1, 2]).expect("write");
        std::fs::create_dir_all(dir.path().join("node_modules/pkg")).expect("mkdir");
        std::fs::write(dir.path().join("node_modules/pkg/index.js"), "x\n").expect("write");

        let config = config_for(ScanScope::Paths(vec![dir.path().to_path_buf()]), Vec::new());
        let files = resolve_files(&config, dir.path());
        let names: Vec<String> = files
            .iter()
            .map(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .collect();
        assert!(names.contains(&"app.py".to_owned()));
        assert!(!names.contains(&"logo.png".to_owned()));
        assert!(!names.contains(&"index.js".to_owned()));
    }

    #[test]
    fn test_user_ignore_glob_is_applied() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("keep.txt"), "x\n").expect("write");
        std::fs::write(dir.path().join("drop.log"), "x\n").expect("write");

        let config = config_for(
            ScanScope::Paths(vec![dir.path().to_path_buf()]),
            vec!["**/*.log".to_owned()],
        );
        let files = resolve_files(&config, dir.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.txt"));
    }

    #[test]
    fn test_explicit_missing_file_is_dropped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_for(
            ScanScope::Paths(vec![dir.path().join("missing.txt")]),
            Vec::new(),
        );
        assert!(resolve_files(&config, dir.path()).is_empty());
    }

    #[test]
    fn test_git_scope_outside_repository_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_for(ScanScope::GitTracked, Vec::new());
        assert!(resolve_files(&config, dir.path()).is_empty());
    }
}
