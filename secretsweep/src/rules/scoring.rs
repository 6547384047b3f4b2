//! Confidence scoring for raw rule matches.

use super::patterns::RuleKind;
use crate::constants::CONTEXT_KEYWORDS;

/// Base confidence shared by the generic rule family.
const HEURISTIC_BASE: f64 = 0.6;
/// Bonus when the line carries a credential-suggesting keyword.
const CONTEXT_BONUS: f64 = 0.15;
/// Bonus when a generic match clears the entropy threshold.
const ENTROPY_BONUS: f64 = 0.2;
/// Ceiling for the generic family, which has a structurally higher
/// false-positive rate than anchored provider patterns.
const GENERIC_CAP: f64 = 0.85;
/// Global ceiling. 1.0 is reserved for "certain" and never assigned by
/// heuristics.
const MAX_SCORE: f64 = 0.99;
/// Base confidence of standalone high-entropy findings, which have no regex
/// anchor to justify more.
const HIGH_ENTROPY_BASE: f64 = 0.7;

/// Combines rule identity, context keywords and entropy into a confidence
/// value in [0, 1].
#[derive(Debug, Default)]
pub struct ContextScorer;

impl ContextScorer {
    /// Creates a scorer over the fixed keyword list.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Checks whether a (pre-lowercased) line contains any context keyword.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn has_context_keyword(&self, line_lower: &str) -> bool {
        CONTEXT_KEYWORDS().iter().any(|k| line_lower.contains(k))
    }

    /// Scores one rule match.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn score(&self, kind: RuleKind, has_keyword: bool, entropy_met: bool) -> f64 {
        let mut score = match kind {
            RuleKind::Anchored { base } => base,
            RuleKind::Generic => HEURISTIC_BASE,
        };
        if has_keyword {
            score += CONTEXT_BONUS;
        }
        if entropy_met {
            score += ENTROPY_BONUS;
        }
        if kind == RuleKind::Generic {
            score = score.min(GENERIC_CAP);
        }
        round2(score.min(MAX_SCORE))
    }

    /// Scores a standalone high-entropy finding.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn score_high_entropy(&self, has_keyword: bool) -> f64 {
        let mut score = HIGH_ENTROPY_BASE;
        if has_keyword {
            score += CONTEXT_BONUS;
        }
        round2(score.min(MAX_SCORE))
    }

    /// Documentation-sample exemption: a password-prefixed match on a line
    /// that also says "example" is discarded entirely, not down-scored.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn is_example_placeholder(&self, matched: &str, line_lower: &str) -> bool {
        let matched_lower = matched.to_lowercase();
        (matched_lower.starts_with("password") || matched_lower.starts_with("passwd"))
            && line_lower.contains("example")
    }
}

fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
