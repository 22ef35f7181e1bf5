//! A `PolarityScorer` implementation backed by the lexicon and rule based
//! analyzer from `sentieval-valence`.
//!
//! Unless a lexicon file is given, the analyzer runs over the full VADER
//! lexicon as published by the `vader_sentiment` crate.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use std::path::Path;

use sentieval_valence::{Lexicon, SentimentAnalyzer};

use crate::config::EvalConfig;
use crate::engine::{PolarityScorer, PolarityScores};
use crate::errors::SentievalError;

/// Builds a `Lexicon` from the reference VADER lexicon table.
pub fn reference_lexicon() -> Lexicon {
    vader_sentiment::LEXICON
        .iter()
        .map(|(token, valence)| (token.into_inner(), *valence))
        .collect()
}

/// Production scorer wrapping the low-level `SentimentAnalyzer`.
#[derive(Debug, Clone)]
pub struct ValenceScorer {
    analyzer: SentimentAnalyzer,
}

impl Default for ValenceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ValenceScorer {
    /// Scorer over the full reference lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(reference_lexicon())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { analyzer: SentimentAnalyzer::new(lexicon) }
    }

    /// Loads a full lexicon file in the `token<TAB>valence[<TAB>...]` format.
    pub fn from_lexicon_file<P: AsRef<Path>>(path: P) -> Result<Self, SentievalError> {
        let path = path.as_ref();
        info!("Loading lexicon from: {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|e| SentievalError::Lexicon {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let lexicon = Lexicon::parse(&text).map_err(|e| SentievalError::Lexicon {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        info!("Loaded {} lexicon entries from {}.", lexicon.len(), path.display());
        Ok(Self::with_lexicon(lexicon))
    }

    /// Builds the scorer the configuration asks for.
    pub fn from_config(config: &EvalConfig) -> Result<Self, SentievalError> {
        match &config.lexicon_path {
            Some(path) => Self::from_lexicon_file(path),
            None => {
                let scorer = Self::new();
                debug!("Using reference lexicon ({} entries).", scorer.analyzer.lexicon().len());
                Ok(scorer)
            }
        }
    }
}

impl PolarityScorer for ValenceScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        self.analyzer.polarity_scores(text)
    }

    fn name(&self) -> &str {
        "valence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_scorer_scores_text() {
        let scorer = ValenceScorer::new();
        assert!(scorer.polarity_scores("what a great day").compound > 0.05);
        assert!(scorer.polarity_scores("this is awful").compound < -0.05);
        assert_eq!(scorer.polarity_scores("").compound, 0.0);
    }

    /// Sentences and compounds published with the VADER reference.
    const REFERENCE_SCORES: &[(&str, f64)] = &[
        ("VADER is smart, handsome, and funny.", 0.8316),
        ("VADER is smart, handsome, and funny!", 0.8439),
        ("VADER is very smart, handsome, and funny.", 0.8545),
        ("VADER is VERY SMART, handsome, and FUNNY.", 0.9227),
        ("VADER is VERY SMART, handsome, and FUNNY!!!", 0.9342),
        ("VADER is VERY SMART, uber handsome, and FRIGGIN FUNNY!!!", 0.9469),
        ("VADER is not smart, handsome, nor funny.", -0.7424),
        ("The book was good.", 0.4404),
        ("At least it isn't a horrible book.", 0.431),
        ("The book was only kind of good.", 0.3832),
        ("Today SUX!", -0.5461),
        ("Today only kinda sux! But I'll get by, lol", 0.5249),
        ("Make sure you :) or :D today!", 0.8633),
        ("Not bad at all", 0.431),
        ("lol", 0.4215),
    ];

    #[test]
    fn test_reference_sentences_match_published_compounds() {
        let scorer = ValenceScorer::new();
        for (text, expected) in REFERENCE_SCORES {
            let compound = scorer.polarity_scores(text).compound;
            assert!(
                (compound - expected).abs() < 1e-6,
                "{text:?}: got {compound}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_reference_lexicon_is_complete() {
        let lexicon = reference_lexicon();
        assert!(lexicon.len() > 7000);
        assert_eq!(lexicon.get("good"), Some(1.9));
        assert_eq!(lexicon.get("lol"), Some(1.8));
    }

    #[test]
    fn test_from_config_defaults_to_reference_lexicon() -> anyhow::Result<()> {
        let scorer = ValenceScorer::from_config(&EvalConfig::default())?;
        assert_eq!(scorer.analyzer.lexicon().len(), reference_lexicon().len());
        Ok(())
    }

    #[test]
    fn test_from_lexicon_file() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "splendiferous\t3.0\t0.5\t[3, 3, 3]")?;
        let scorer = ValenceScorer::from_lexicon_file(file.path())?;
        assert!(scorer.polarity_scores("splendiferous").compound > 0.5);
        assert_eq!(scorer.polarity_scores("good").compound, 0.0);
        Ok(())
    }

    #[test]
    fn test_from_lexicon_file_reports_bad_line() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "good\t1.9")?;
        writeln!(file, "bad\tnope")?;
        let err = ValenceScorer::from_lexicon_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("lexicon line 2"));
        Ok(())
    }

    #[test]
    fn test_missing_lexicon_file() {
        let err = ValenceScorer::from_lexicon_file("/definitely/not/here.tsv").unwrap_err();
        assert!(matches!(err, SentievalError::Lexicon { .. }));
    }
}
