//! File content loading with binary/size classification.
//!
//! Loading is best effort: every non-text outcome is a tagged skip, never an
//! error, so the scan loop stays a plain match over four cases.

use crate::constants::{BINARY_NONTEXT_RATIO, BINARY_SNIFF_LEN, MAX_FILE_SIZE};
use std::path::Path;

/// Outcome of loading one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Decoded text, ready for line scanning.
    Text(String),
    /// Classified as binary (NUL byte or high non-text ratio).
    SkippedBinary,
    /// Larger than the hard size cap; never partially scanned.
    SkippedTooLarge,
    /// The file could not be read at all.
    SkippedUnreadable,
}

/// Reads and decodes a file, classifying anything unscannable as a skip.
///
/// UTF-8 is attempted first; on failure the bytes are decoded as Latin-1,
/// which always succeeds, so encoding never fails a read.
#[must_use]
pub fn load_file(path: &Path) -> FileContent {
    let Ok(bytes) = std::fs::read(path) else {
        return FileContent::SkippedUnreadable;
    };
    if is_binary(&bytes) {
        return FileContent::SkippedBinary;
    }
    if bytes.len() as u64 > MAX_FILE_SIZE {
        return FileContent::SkippedTooLarge;
    }
    match String::from_utf8(bytes) {
        Ok(text) => FileContent::Text(text),
        Err(err) => FileContent::Text(decode_latin1(err.as_bytes())),
    }
}

/// Heuristic binary classifier: a NUL byte in the leading window, or more
/// than 30% of bytes outside the printable/whitespace allow-list.
#[must_use]
pub fn is_binary(content: &[u8]) -> bool {
    if content.is_empty() {
        return false;
    }
    let sniff = &content[..content.len().min(BINARY_SNIFF_LEN)];
    if sniff.contains(&0) {
        return true;
    }
    let nontext = content.iter().filter(|&&b| !is_text_byte(b)).count();
    nontext as f64 / content.len() as f64 > BINARY_NONTEXT_RATIO
}

// Allow-list: BEL, BS, TAB, LF, FF, CR, ESC and printable ASCII.
fn is_text_byte(b: u8) -> bool {
    matches!(b, 7 | 8 | 9 | 10 | 12 | 13 | 27) || (32..127).contains(&b)
}

// Latin-1 maps each byte to the code point of the same value, so this can
// never fail.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_nul_byte_is_binary() {
        assert!(is_binary(b"hello\x00world"));
    }

    #[test]
    fn test_plain_text_is_not_binary() {
        assert!(!is_binary(b"let x = 1;\nprint(x)\n"));
    }

    #[test]
    fn test_high_nontext_ratio_is_binary() {
        let mut content = vec![0xFFu8; 40];
        content.extend_from_slice(b"some text here");
        assert!(is_binary(&content));
    }

    #[test]
    fn test_empty_content_is_not_binary() {
        assert!(!is_binary(b""));
    }

    #[test]
    fn test_load_utf8_file() {
        let mut f = tempfile::NamedTempFile::new().expect("temp file");
        f.write_all("password = \"abc\"\n".as_bytes()).expect("write");
        assert_eq!(
            load_file(f.path()),
            FileContent::Text("password = \"abc\"\n".to_owned())
        );
    }

    #[test]
    fn test_load_latin1_fallback() {
        let mut f = tempfile::NamedTempFile::new().expect("temp file");
        // 0xE9 is 'é' in Latin-1 and invalid standalone UTF-8.
        f.write_all(b"caf\xE9 token\n").expect("write");
        match load_file(f.path()) {
            FileContent::Text(text) => assert_eq!(text, "café token\n"),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_load_oversized_file() {
        let mut f = tempfile::NamedTempFile::new().expect("temp file");
        let chunk = vec![b'a'; 1_000_001];
        f.write_all(&chunk).expect("write");
        assert_eq!(load_file(f.path()), FileContent::SkippedTooLarge);
    }

    #[test]
    fn test_load_missing_file() {
        assert_eq!(
            load_file(std::path::Path::new("/nonexistent/definitely-missing")),
            FileContent::SkippedUnreadable
        );
    }
}
