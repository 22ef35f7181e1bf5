// sentieval-core/src/engine.rs
//! Defines the core PolarityScorer trait.
//!
//! The `PolarityScorer` trait provides a pluggable interface for sentiment
//! scoring backends. The evaluator receives a scorer as an explicit
//! dependency, so tests can substitute a stub with fixed scores and
//! alternative lexicons or models can be swapped in without touching the
//! driver.
//!
//! License: MIT OR APACHE 2.0

pub use sentieval_valence::PolarityScores;

/// A trait that defines the core functionality of a polarity scorer.
///
/// Implementations must be total: every input string, the empty string
/// included, yields a score, and `compound` lies in `[-1, 1]`.
pub trait PolarityScorer: Send + Sync {
    /// Scores the already sanitized and trimmed text.
    fn polarity_scores(&self, text: &str) -> PolarityScores;

    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for Box<T> {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        (**self).polarity_scores(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
