//! Persisted set of accepted fingerprints.
//!
//! The baseline is the suppression memory between scans: a finding whose
//! fingerprint is present is not "new" and does not fail the run. Loading is
//! forgiving (missing or malformed file means an empty set); saving rewrites
//! the document wholesale through a temp file so readers never observe a
//! partial write.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current on-disk document version.
const BASELINE_VERSION: u32 = 1;

/// On-disk baseline document: `{"version": 1, "fingerprints": [sorted hex]}`.
#[derive(Debug, Serialize, Deserialize)]
struct BaselineDocument {
    version: u32,
    #[serde(default)]
    fingerprints: Vec<String>,
}

/// Loads the baseline fingerprint set from `path`.
///
/// A missing, unreadable or malformed file yields an empty set; the absence
/// of a baseline is a normal first-run state, not an error.
#[must_use]
pub fn load(path: &Path) -> FxHashSet<String> {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return FxHashSet::default();
    };
    match serde_json::from_str::<BaselineDocument>(&raw) {
        Ok(doc) => doc.fingerprints.into_iter().collect(),
        Err(_) => FxHashSet::default(),
    }
}

/// Persists `fingerprints` to `path` as a versioned document with a sorted
/// list, via write-to-temp-then-rename.
pub fn save(path: &Path, fingerprints: &FxHashSet<String>) -> std::io::Result<()> {
    let mut sorted: Vec<String> = fingerprints.iter().cloned().collect();
    sorted.sort_unstable();
    let doc = BaselineDocument {
        version: BASELINE_VERSION,
        fingerprints: sorted,
    };
    let mut payload = serde_json::to_string_pretty(&doc).map_err(std::io::Error::other)?;
    payload.push('\n');

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, payload)?;
    std::fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_set() {
        assert!(load(Path::new("/nonexistent/baseline.json")).is_empty());
    }

    #[test]
    fn test_corrupt_file_is_empty_set() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("baseline.json");
        std::fs::write(&path, "{not json").expect("write");
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_round_trip_preserves_set() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("baseline.json");

        let mut set = FxHashSet::default();
        set.insert("aa".repeat(32));
        set.insert("bb".repeat(32));
        save(&path, &set).expect("save");

        assert_eq!(load(&path), set);
    }

    #[test]
    fn test_saved_document_is_versioned_and_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("baseline.json");

        let mut set = FxHashSet::default();
        set.insert("ff".repeat(32));
        set.insert("00".repeat(32));
        save(&path, &set).expect("save");

        let raw = std::fs::read_to_string(&path).expect("read");
        let doc: serde_json::Value = serde_json::from_str(&raw).expect("parse");
        assert_eq!(doc["version"], 1);
        let fps: Vec<&str> = doc["fingerprints"]
            .as_array()
            .expect("array")
            .iter()
            .filter_map(serde_json::Value::as_str)
            .collect();
        assert_eq!(fps, vec!["00".repeat(32), "ff".repeat(32)]);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("baseline.json");
        save(&path, &FxHashSet::default()).expect("save");
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read_dir")
            .filter_map(Result::ok)
            .collect();
        assert_eq!(entries.len(), 1);
    }
}
