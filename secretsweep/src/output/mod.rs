//! Report rendering and progress display.

mod progress;
mod reports;

pub use progress::create_progress_bar;
pub use reports::{print_baseline_updated, print_human_report, print_json_report};
