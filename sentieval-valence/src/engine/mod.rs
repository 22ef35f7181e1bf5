//! The valence engine for sentieval.
//!
//! Looks every token up in the lexicon, adjusts it with the rules in
//! `heuristics`, and folds the per-token valences into `PolarityScores`.

extern crate alloc;
use alloc::vec::Vec;

use crate::heuristics::{
    booster, but_check, least_check, negation_check, scalar_inc_dec, special_idioms_check,
    C_INCR, N_SCALAR,
};
use crate::lexicon::{Lexicon, LexiconError};
use crate::scoring::{score_valence, PolarityScores};
use crate::tokens::{is_all_caps, SentiText};
use crate::Valence;

/// Lexicon and rule-based sentiment analyzer.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
}

impl SentimentAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Analyzer over the compact lexicon compiled into the crate.
    pub fn embedded() -> Result<Self, LexiconError> {
        Lexicon::embedded().map(Self::new)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Scores a piece of text. Total over any input, the empty string
    /// included.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let senti = SentiText::new(text);
        let mut sentiments: Vec<Valence> = Vec::with_capacity(senti.len());

        for i in 0..senti.len() {
            let lowered = senti.lowered[i].as_str();

            // Modifiers carry no sentiment of their own.
            if booster(lowered).is_some() {
                sentiments.push(0.0);
                continue;
            }
            if i + 1 < senti.len() && lowered == "kind" && senti.lowered[i + 1] == "of" {
                sentiments.push(0.0);
                continue;
            }

            sentiments.push(self.sentiment_valence(&senti, i));
        }

        but_check(&senti, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn sentiment_valence(&self, senti: &SentiText, i: usize) -> Valence {
        let words = &senti.lowered;
        let item = words[i].as_str();

        let Some(base) = self.lexicon.get(item) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" directly before another sentiment word acts as a negator only.
        if item == "no" && i + 1 < words.len() && self.lexicon.contains(&words[i + 1]) {
            valence = 0.0;
        }
        if (i > 0 && words[i - 1] == "no")
            || (i > 1 && words[i - 2] == "no")
            || (i > 2 && words[i - 3] == "no" && (words[i - 1] == "or" || words[i - 1] == "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_all_caps(&senti.words[i]) && senti.is_cap_diff {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            if i > start_i && !self.lexicon.contains(&words[i - (start_i + 1)]) {
                let prev = i - (start_i + 1);
                let mut s = scalar_inc_dec(&senti.words[prev], &words[prev], valence, senti.is_cap_diff);
                if start_i == 1 && s != 0.0 {
                    s *= 0.95;
                }
                if start_i == 2 && s != 0.0 {
                    s *= 0.9;
                }
                valence += s;
                valence = negation_check(valence, senti, start_i, i);
                if start_i == 2 {
                    valence = special_idioms_check(valence, senti, i);
                }
            }
        }

        least_check(valence, senti, i, &self.lexicon)
    }
}
