//! Numeric limits and fixed markers.

/// Hard cap on scannable file size in bytes. Larger files are skipped whole;
/// a truncated scan would report full coverage it does not have.
pub const MAX_FILE_SIZE: u64 = 1_000_000;

/// How many leading bytes are sniffed for a NUL byte during binary detection.
pub const BINARY_SNIFF_LEN: usize = 4096;

/// Fraction of non-text bytes above which content is classified as binary.
pub const BINARY_NONTEXT_RATIO: f64 = 0.30;

/// Minimum token length before entropy is worth computing.
pub const ENTROPY_MIN_TOKEN_LEN: usize = 20;

/// Default Shannon entropy threshold in bits per character.
///
/// Random key material typically sits above 4.0; natural language and
/// structured identifiers below it.
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 4.0;

/// Sentinel threshold used when entropy analysis is disabled. No real token
/// reaches it, so call sites need no special casing.
pub const ENTROPY_DISABLED_THRESHOLD: f64 = 9999.0;

/// Maximum stored length of a finding's surrounding-line context.
pub const CONTEXT_MAX_LEN: usize = 240;

/// Inline marker that opts a line out of all rule evaluation.
pub const SUPPRESSION_MARKER: &str = "secret-scan: ignore";

/// Default baseline file, resolved relative to the working directory.
pub const DEFAULT_BASELINE_FILENAME: &str = ".secretsweep-baseline.json";

/// How many fingerprint characters the human report shows.
pub const FINGERPRINT_PREFIX_LEN: usize = 12;
