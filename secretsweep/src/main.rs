//! Command-line entry point for SecretSweep.
//!
//! This binary delegates to the shared `entry_point::run_with_args()`
//! function so the CLI and the test harness exercise identical behavior.

use std::process::ExitCode;

fn main() -> ExitCode {
    match secretsweep::entry_point::run_with_args(std::env::args().skip(1).collect()) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
