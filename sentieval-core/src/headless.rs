// sentieval-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for running an evaluation without a UI.
//! Builds the default valence scorer from the configuration and drives the
//! evaluator in a single call.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use std::path::Path;

use crate::classifier::Polarity;
use crate::config::EvalConfig;
use crate::engines::valence_engine::ValenceScorer;
use crate::evaluation::{EvaluationReport, Evaluator};

fn build_evaluator(config: &EvalConfig) -> Result<Evaluator> {
    config.validate()?;
    let scorer = ValenceScorer::from_config(config).context("Failed to build the valence scorer")?;
    Ok(Evaluator::new(Box::new(scorer), config))
}

/// Evaluates the dataset at `path` using the valence scorer.
///
/// # Arguments
///
/// * `config` - The merged EvalConfig (defaults, file and command-line overrides).
/// * `path` - The delimited dataset to score.
pub fn headless_evaluate_file<P: AsRef<Path>>(config: &EvalConfig, path: P) -> Result<EvaluationReport> {
    let path = path.as_ref();
    let evaluator = build_evaluator(config)?;
    let report = evaluator
        .evaluate_file(path)
        .with_context(|| format!("Evaluation of {} failed", path.display()))?;
    Ok(report)
}

/// Classifies one text with the configured filters, scorer and thresholds.
pub fn headless_classify(config: &EvalConfig, text: &str) -> Result<Polarity> {
    let evaluator = build_evaluator(config)?;
    Ok(evaluator.predict(text))
}
