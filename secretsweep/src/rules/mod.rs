//! Modular secret recognition: pattern catalog, line matcher, entropy
//! analysis and confidence scoring.

mod engine;
mod entropy;
mod patterns;
mod scoring;

pub use engine::{RuleEngine, RuleMatch};
pub use entropy::calculate_entropy;
pub use patterns::{get_builtin_rules, Rule, RuleKind, HIGH_ENTROPY_RULE};
pub use scoring::ContextScorer;
