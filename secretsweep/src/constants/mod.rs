//! Fixed, process-wide tables and limits used across the scanner.

mod limits;
mod regexes;
mod sets;

pub use limits::{
    BINARY_NONTEXT_RATIO, BINARY_SNIFF_LEN, CONTEXT_MAX_LEN, DEFAULT_BASELINE_FILENAME,
    DEFAULT_ENTROPY_THRESHOLD, ENTROPY_DISABLED_THRESHOLD, ENTROPY_MIN_TOKEN_LEN,
    FINGERPRINT_PREFIX_LEN, MAX_FILE_SIZE, SUPPRESSION_MARKER,
};
pub use regexes::get_token_shape_re;
pub use sets::{get_context_keywords, get_default_ignore_globs};

pub use get_context_keywords as CONTEXT_KEYWORDS;
pub use get_default_ignore_globs as DEFAULT_IGNORE_GLOBS;
pub use get_token_shape_re as TOKEN_SHAPE_RE;
