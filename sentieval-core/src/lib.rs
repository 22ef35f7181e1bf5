// sentieval-core/src/lib.rs
//! # Sentieval Core Library
//!
//! `sentieval-core` provides the platform-independent logic for evaluating a
//! sentiment polarity classifier against a labelled dataset. It loads labelled
//! texts, cleans them through an ordered filter pipeline, scores them with a
//! pluggable `PolarityScorer`, maps compound scores to binary labels and
//! accumulates a confusion matrix from which the report metrics are derived.
//!
//! ## Modules
//!
//! * `dataset`: Reads `(label, text)` records from delimited files.
//! * `sanitizers`: The `lowercase`, `normalize` and `replace` text filters.
//! * `engine`: Defines the `PolarityScorer` trait.
//! * `engines`: Concrete scorers; currently the lexicon based `ValenceScorer`.
//! * `classifier`: Thresholds that turn a compound score into a `Polarity`.
//! * `metrics`: `ConfusionMatrix` and the `MetricSummary` derived from it.
//! * `evaluation`: The `Evaluator` driving a full run.
//! * `config`: YAML evaluation configuration and command-line overrides.
//! * `headless`: One-shot wrappers for non-interactive use.
//!
//! ## Usage Example
//!
//! ```rust
//! use sentieval_core::{EvalConfig, Evaluator, Record, ValenceScorer};
//!
//! let config = EvalConfig {
//!     filters: vec!["lowercase".into(), "replace".into()],
//!     ..Default::default()
//! };
//! let evaluator = Evaluator::new(Box::new(ValenceScorer::new()), &config);
//!
//! let records = vec![
//!     Record { true_label: 1, text: "What a GREAT day.".into() },
//!     Record { true_label: 0, text: "Terrible, just terrible.".into() },
//! ];
//! let report = evaluator.evaluate_records(&records);
//! assert_eq!(report.records, 2);
//! print!("{}", report.metrics);
//! ```
//!
//! ## Error Handling
//!
//! Dataset and lexicon failures are reported through `SentievalError` and
//! `DatasetError`; configuration loading uses `anyhow::Error` with context.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod classifier;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod evaluation;
pub mod headless;
pub mod metrics;
pub mod sanitizers;

/// Re-exports the configuration types.
pub use config::{EvalConfig, EvalOverrides};

/// Re-exports the custom error types.
pub use errors::{DatasetError, SentievalError};

/// Re-exports the scorer trait and its concrete implementation.
pub use engine::{PolarityScorer, PolarityScores};
pub use engines::valence_engine::ValenceScorer;

pub use classifier::{Polarity, SentimentClassifier, Thresholds};
pub use dataset::{load_records, read_records, DatasetOptions, LabelPolicy, Record};
pub use evaluation::{EvaluationReport, Evaluator};
pub use metrics::{ConfusionMatrix, MetricSummary};
pub use sanitizers::{sanitize, ReplaceMode, SanitizerConfig, TextFilter};

/// Re-exports functions for one-shot, non-interactive use.
pub use headless::{headless_classify, headless_evaluate_file};
