use regex::Regex;
use std::sync::OnceLock;

/// Returns the compiled regex for token-shaped words eligible for the
/// standalone high-entropy check (letters, digits, `_-.=`, length ≥ 20).
pub fn get_token_shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9_\-.=]{20,}").expect("Invalid token shape regex pattern")
    })
}
