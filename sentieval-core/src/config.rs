//! Configuration management for `sentieval-core`.
//!
//! This module defines the evaluation configuration: which filters run,
//! the classification thresholds, how the dataset is parsed, and which
//! lexicon the scorer uses. Configurations are read from YAML, start from the
//! embedded defaults, and can be overridden from the command line.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classifier::Thresholds;
use crate::dataset::{DatasetOptions, LabelPolicy};
use crate::sanitizers::{ReplaceMode, SanitizerConfig};

/// Represents the top-level evaluation configuration.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct EvalConfig {
    /// Ordered filter names applied to every text before scoring.
    pub filters: Vec<String>,
    /// How the `replace` filter treats repeated punctuation.
    pub replace_mode: ReplaceMode,
    pub thresholds: Thresholds,
    pub dataset: DatasetOptions,
    /// Optional VADER-format lexicon replacing the embedded one.
    pub lexicon_path: Option<PathBuf>,
}

/// Values given on the command line. `None`/`false` leaves the config value
/// untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EvalOverrides {
    pub filters: Option<Vec<String>>,
    pub replace_all: bool,
    pub strict_labels: bool,
    pub lexicon_path: Option<PathBuf>,
}

impl EvalConfig {
    /// Loads an evaluation configuration from a YAML file.
    ///
    /// Fields missing from the file keep their default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading evaluation config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: EvalConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    /// Loads the defaults from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default evaluation config from embedded string...");
        let default_yaml = include_str!("../config/default_eval.yaml");
        let config: EvalConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default evaluation config")?;
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn apply_overrides(mut self, overrides: EvalOverrides) -> Self {
        if let Some(filters) = overrides.filters {
            debug!("Overriding filters with command-line value: {:?}", filters);
            self.filters = filters;
        }
        if overrides.replace_all {
            self.replace_mode = ReplaceMode::All;
        }
        if overrides.strict_labels {
            self.dataset.label_policy = LabelPolicy::Strict;
        }
        if let Some(path) = overrides.lexicon_path {
            debug!("Overriding lexicon path with command-line value: {}", path.display());
            self.lexicon_path = Some(path);
        }
        self
    }

    /// The sanitizer pipeline described by `filters` and `replace_mode`.
    pub fn sanitizer(&self) -> SanitizerConfig {
        SanitizerConfig::from_names(&self.filters, self.replace_mode)
    }

    /// Checks cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        let t = &self.thresholds;

        if !(-1.0..=1.0).contains(&t.positive) || !(-1.0..=1.0).contains(&t.negative) {
            errors.push(format!(
                "Thresholds must lie within [-1, 1] (positive: {}, negative: {}).",
                t.positive, t.negative
            ));
        }
        if t.negative > t.positive {
            errors.push(format!(
                "Negative threshold ({}) is above the positive threshold ({}).",
                t.negative, t.positive
            ));
        }
        if self.dataset.delimiter_byte().is_none() {
            errors.push(format!(
                "Delimiter '{}' is not a single ASCII character.",
                self.dataset.delimiter
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Config validation failed:\n{}", errors.join("\n")))
        }
    }
}
