// sentieval-core/src/classifier.rs
//! Turns a continuous compound score into a binary polarity label.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::PolarityScorer;

/// Predicted class. The discriminants are the dataset's label values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Negative,
    Positive,
}

impl Polarity {
    /// Integer label used in datasets and in the confusion matrix.
    pub fn label(self) -> i64 {
        match self {
            Polarity::Negative => 0,
            Polarity::Positive => 1,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Polarity::Negative => f.write_str("negative"),
            Polarity::Positive => f.write_str("positive"),
        }
    }
}

/// Decision boundaries on the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Thresholds {
    /// Scores at or above this are positive.
    pub positive: f64,
    /// Scores at or below this are negative.
    pub negative: f64,
    /// Label given to scores strictly between the two bounds.
    pub neutral_label: Polarity,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: 0.05,
            negative: -0.05,
            neutral_label: Polarity::Negative,
        }
    }
}

impl Thresholds {
    pub fn polarity(&self, compound: f64) -> Polarity {
        if compound >= self.positive {
            Polarity::Positive
        } else if compound <= self.negative {
            Polarity::Negative
        } else {
            self.neutral_label
        }
    }
}

/// A scorer plus the thresholds applied to its compound output.
pub struct SentimentClassifier {
    scorer: Box<dyn PolarityScorer>,
    thresholds: Thresholds,
}

impl fmt::Debug for SentimentClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentClassifier")
            .field("scorer", &self.scorer.name())
            .field("thresholds", &self.thresholds)
            .finish()
    }
}

impl SentimentClassifier {
    pub fn new(scorer: Box<dyn PolarityScorer>, thresholds: Thresholds) -> Self {
        Self { scorer, thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn scorer(&self) -> &dyn PolarityScorer {
        self.scorer.as_ref()
    }

    /// Scores `text` and returns the compound value with its label.
    pub fn score(&self, text: &str) -> (f64, Polarity) {
        let compound = self.scorer.polarity_scores(text).compound;
        (compound, self.thresholds.polarity(compound))
    }

    pub fn classify(&self, text: &str) -> Polarity {
        self.score(text).1
    }
}
