use std::sync::OnceLock;

/// Returns keywords whose presence on a line raises finding confidence.
pub fn get_context_keywords() -> &'static [&'static str] {
    static KEYWORDS: OnceLock<Vec<&'static str>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        vec![
            "secret",
            "token",
            "apikey",
            "api_key",
            "passwd",
            "password",
            "pwd",
            "private_key",
            "access_key",
            "refresh_token",
            "auth",
            "bearer",
            "credential",
        ]
    })
}

/// Returns glob patterns excluded from scanning by default: version-control
/// metadata, binary/media formats, dependency trees and minified scripts.
pub fn get_default_ignore_globs() -> &'static [&'static str] {
    static GLOBS: OnceLock<Vec<&'static str>> = OnceLock::new();
    GLOBS.get_or_init(|| {
        vec![
            ".git/**",
            "**/.git/**",
            "**/*.png",
            "**/*.jpg",
            "**/*.jpeg",
            "**/*.gif",
            "**/*.pdf",
            "**/*.ico",
            "**/*.zip",
            "**/*.gz",
            "**/*.tgz",
            "**/*.bz2",
            "**/*.xz",
            "**/*.7z",
            "**/*.mp4",
            "**/*.mp3",
            "**/*.mov",
            "**/*.avi",
            "**/.venv/**",
            "**/venv/**",
            "**/__pycache__/**",
            "**/node_modules/**",
            "**/*.min.js",
        ]
    })
}
