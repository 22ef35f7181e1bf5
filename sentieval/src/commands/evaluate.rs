//! Evaluate command: load the configuration, score the dataset and print the
//! report.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use sentieval_core::{EvalConfig, EvalOverrides, EvaluationReport, Evaluator, ValenceScorer};

use crate::ui::report;

/// How the finished report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Metric lines only.
    #[default]
    Metrics,
    /// Metric lines followed by the confusion-matrix table.
    MetricsAndMatrix,
    Json,
}

/// Options for the ergonomic `run_evaluate` API.
#[derive(Debug, Clone, Default)]
pub struct EvaluateOptions {
    pub dataset: PathBuf,
    pub config_path: Option<PathBuf>,
    pub overrides: EvalOverrides,
    pub output: OutputMode,
}

/// Loads the YAML file when given, else the embedded defaults, then applies
/// the command-line overrides.
pub fn resolve_config(config_path: Option<&Path>, overrides: EvalOverrides) -> Result<EvalConfig> {
    let base = match config_path {
        Some(path) => EvalConfig::load_from_file(path)?,
        None => EvalConfig::load_default()?,
    };
    let config = base.apply_overrides(overrides);
    config.validate()?;
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Runs a full evaluation and returns the report without printing it.
pub fn evaluate(opts: &EvaluateOptions) -> Result<EvaluationReport> {
    let config = resolve_config(opts.config_path.as_deref(), opts.overrides.clone())?;

    let scorer = ValenceScorer::from_config(&config).context("Failed to initialize the scorer")?;
    let evaluator = Evaluator::new(Box::new(scorer), &config);
    info!(
        "Evaluating {} with filters {:?}.",
        opts.dataset.display(),
        evaluator.sanitizer().filters
    );

    evaluator
        .evaluate_file(&opts.dataset)
        .with_context(|| format!("Failed to evaluate {}", opts.dataset.display()))
}

/// The main operation runner for the evaluate command.
pub fn run_evaluate<W: Write>(opts: &EvaluateOptions, writer: &mut W) -> Result<()> {
    let report = evaluate(opts)?;

    match opts.output {
        OutputMode::Metrics => report::print_metrics(writer, &report.metrics)?,
        OutputMode::MetricsAndMatrix => {
            report::print_metrics(writer, &report.metrics)?;
            report::print_matrix(writer, &report.matrix)?;
        }
        OutputMode::Json => report::print_json(writer, &report)?,
    }
    writer.flush().context("Failed to flush stdout")?;

    info!("Evaluation of {} records completed.", report.records);
    Ok(())
}

/// Convenience wrapper writing to a locked stdout.
pub fn run_evaluate_stdout(opts: &EvaluateOptions) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_evaluate(opts, &mut handle)
}
