//! Small path helpers shared by fingerprinting, glob filtering and output.

/// Normalizes a path for display, glob matching and fingerprinting.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" prefix (for cleaner output)
///
/// Fingerprints hash this normalized form, so the same file yields the same
/// identity whether it was selected as `./src/app.py` or `src\app.py`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use secretsweep::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\config\\app.yaml")), "config/app.yaml");
/// assert_eq!(normalize_display_path(Path::new("./src/main.py")), "src/main.py");
/// ```
#[must_use]
pub fn normalize_display_path(path: &std::path::Path) -> String {
    let s = path.to_string_lossy();
    let normalized = s.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Escapes newlines so a context line always renders as a single output row.
#[must_use]
pub fn escape_newlines(s: &str) -> String {
    s.replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_normalize_display_path() {
        assert_eq!(normalize_display_path(Path::new("./a/b.txt")), "a/b.txt");
        assert_eq!(normalize_display_path(Path::new("a\\b\\c.txt")), "a/b/c.txt");
        assert_eq!(normalize_display_path(Path::new("plain.txt")), "plain.txt");
    }

    #[test]
    fn test_escape_newlines() {
        assert_eq!(escape_newlines("a\nb"), "a\\nb");
    }
}
