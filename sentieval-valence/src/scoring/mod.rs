// sentieval-valence/src/scoring/mod.rs
use libm::{fabs, round, sqrt};

use crate::Valence;

/// Approximates the maximum expected value when normalizing a raw sum.
pub const NORMALIZATION_ALPHA: f64 = 15.0;

const EXCLAMATION_WEIGHT: f64 = 0.292;
const QUESTION_WEIGHT: f64 = 0.18;

/// Sentiment proportions and the normalized, weighted composite score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    /// Normalized composite score in `[-1, 1]`.
    pub compound: f64,
}

/// Squashes an unbounded valence sum into `[-1, 1]`.
pub fn normalize(score: Valence, alpha: f64) -> f64 {
    let norm = score / sqrt(score * score + alpha);
    norm.clamp(-1.0, 1.0)
}

/// Extra intensity from trailing exclamation and question marks.
pub fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.chars().filter(|&c| c == '!').count().min(4);
    let ep_amplifier = exclamations as f64 * EXCLAMATION_WEIGHT;

    let questions = text.chars().filter(|&c| c == '?').count();
    let qm_amplifier = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_WEIGHT,
        _ => 0.96,
    };

    ep_amplifier + qm_amplifier
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = libm::pow(10.0, places as f64);
    round(value * factor) / factor
}

/// Splits per-word valences into positive and negative mass plus a count of
/// neutral words.
fn sift_sentiment_scores(sentiments: &[Valence]) -> (f64, f64, f64) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;

    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    (pos_sum, neg_sum, neu_count)
}

/// Combines per-word valences into the final polarity scores.
pub fn score_valence(sentiments: &[Valence], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let amplifier = punctuation_emphasis(text);

    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += amplifier;
    } else if sum < 0.0 {
        sum -= amplifier;
    }
    let compound = normalize(sum, NORMALIZATION_ALPHA);

    let (mut pos_sum, mut neg_sum, neu_count) = sift_sentiment_scores(sentiments);
    if pos_sum > fabs(neg_sum) {
        pos_sum += amplifier;
    } else if pos_sum < fabs(neg_sum) {
        neg_sum -= amplifier;
    }

    let total = pos_sum + fabs(neg_sum) + neu_count;
    PolarityScores {
        neg: round_to(fabs(neg_sum / total), 3),
        neu: round_to(fabs(neu_count / total), 3),
        pos: round_to(fabs(pos_sum / total), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize(0.0, NORMALIZATION_ALPHA), 0.0);
        assert!(normalize(1000.0, NORMALIZATION_ALPHA) <= 1.0);
        assert!(normalize(-1000.0, NORMALIZATION_ALPHA) >= -1.0);
    }

    #[test]
    fn test_punctuation_emphasis() {
        assert_eq!(punctuation_emphasis("plain"), 0.0);
        assert!((punctuation_emphasis("wow!!") - 0.584).abs() < EPSILON);
        // Exclamations cap at four.
        assert!((punctuation_emphasis("wow!!!!!!") - 4.0 * 0.292).abs() < EPSILON);
        // A single question mark adds nothing.
        assert_eq!(punctuation_emphasis("really?"), 0.0);
        assert!((punctuation_emphasis("really??") - 0.36).abs() < EPSILON);
        assert!((punctuation_emphasis("really?????") - 0.96).abs() < EPSILON);
    }

    #[test]
    fn test_score_valence_empty() {
        assert_eq!(score_valence(&[], "anything"), PolarityScores::default());
    }

    #[test]
    fn test_score_valence_single_word() {
        let scores = score_valence(&[1.9], "good");
        assert!((scores.compound - 0.4404).abs() < EPSILON);
        assert_eq!(scores.pos, 1.0);
        assert_eq!(scores.neu, 0.0);
        assert_eq!(scores.neg, 0.0);
    }

    #[test]
    fn test_score_valence_proportions_sum_to_one() {
        let scores = score_valence(&[1.9, 0.0, -2.5], "good and bad");
        let total = scores.neg + scores.neu + scores.pos;
        assert!((total - 1.0).abs() < 0.002);
        assert!(scores.compound < 0.0);
    }
}
