// sentieval-core/src/evaluation.rs
//! The evaluation driver.
//!
//! A run moves through three stages: load the dataset, then sanitize, trim,
//! classify and observe every record in file order, then derive the metric
//! summary. A failure at any stage aborts the run; no partial report is
//! produced.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use serde::Serialize;
use std::path::Path;

use crate::classifier::{Polarity, SentimentClassifier};
use crate::config::EvalConfig;
use crate::dataset::{load_records, DatasetOptions, Record};
use crate::engine::PolarityScorer;
use crate::errors::SentievalError;
use crate::metrics::{ConfusionMatrix, MetricSummary};
use crate::sanitizers::{sanitize, SanitizerConfig};

/// Outcome of one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// Number of records scored; equals the number of observations.
    pub records: usize,
    pub scorer: String,
    pub metrics: MetricSummary,
    pub matrix: ConfusionMatrix<i64>,
}

/// Owns everything needed to score a dataset: the sanitizer pipeline, the
/// classifier and the dataset options.
#[derive(Debug)]
pub struct Evaluator {
    sanitizer: SanitizerConfig,
    classifier: SentimentClassifier,
    dataset: DatasetOptions,
}

impl Evaluator {
    pub fn new(scorer: Box<dyn PolarityScorer>, config: &EvalConfig) -> Self {
        Self {
            sanitizer: config.sanitizer(),
            classifier: SentimentClassifier::new(scorer, config.thresholds),
            dataset: config.dataset,
        }
    }

    pub fn sanitizer(&self) -> &SanitizerConfig {
        &self.sanitizer
    }

    /// Sanitizes, trims and classifies a single text.
    pub fn predict(&self, text: &str) -> Polarity {
        let cleaned = sanitize(text, &self.sanitizer);
        self.classifier.classify(cleaned.trim())
    }

    /// Scores every record in order and accumulates the confusion matrix.
    ///
    /// Performs no I/O; calling it twice on the same records yields the same
    /// report.
    pub fn evaluate_records(&self, records: &[Record]) -> EvaluationReport {
        let mut matrix = ConfusionMatrix::new();

        for (idx, record) in records.iter().enumerate() {
            let cleaned = sanitize(&record.text, &self.sanitizer);
            let (compound, predicted) = self.classifier.score(cleaned.trim());
            debug!(
                "Record {}: truth={} compound={:.4} predicted={}",
                idx, record.true_label, compound, predicted.label()
            );
            matrix.observe(record.true_label, predicted.label());
        }

        debug_assert_eq!(matrix.total(), records.len());
        if matrix.is_empty() {
            warn!("No records to score; every metric is 0.");
        } else {
            info!("Scored {} records.", matrix.total());
        }

        EvaluationReport {
            records: records.len(),
            scorer: self.classifier.scorer().name().to_string(),
            metrics: MetricSummary::from_matrix(&matrix),
            matrix,
        }
    }

    /// Loads the dataset at `path` and evaluates it.
    pub fn evaluate_file<P: AsRef<Path>>(&self, path: P) -> Result<EvaluationReport, SentievalError> {
        let records = load_records(path, &self.dataset)?;
        Ok(self.evaluate_records(&records))
    }
}
