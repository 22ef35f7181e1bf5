// sentieval/src/cli.rs
//! This file defines the command-line interface (CLI) for the sentieval application.
//! License: MIT OR APACHE 2.0

use clap::Parser;
use std::path::PathBuf;

use sentieval_core::EvalOverrides;

/// Top-level CLI definition.
#[derive(Parser, Debug, Default)]
#[command(
    name = "sentieval",
    version = env!("CARGO_PKG_VERSION"),
    about = "Evaluate a sentiment polarity classifier against a labelled dataset",
    long_about = "Sentieval scores every text in a labelled CSV file (label in column 0, text in column 1) with a lexicon and rule based sentiment model, maps the compound score to a binary label and reports accuracy, precision, sensitivity and F1 for both classes."
)]
pub struct Cli {
    /// Dataset to evaluate. Without it, the usage text is printed.
    #[arg(long, value_name = "FILE", help = "Labelled CSV dataset (label,text per row).")]
    pub filename: Option<PathBuf>,

    /// Ordered, comma-separated filter names.
    #[arg(
        long,
        value_delimiter = ',',
        value_name = "LIST",
        help = "Comma-separated filters applied in order: lowercase, normalize, replace."
    )]
    pub filters: Option<Vec<String>>,

    #[arg(long = "config", value_name = "FILE", help = "Path to a YAML evaluation configuration file.")]
    pub config: Option<PathBuf>,

    #[arg(long = "lexicon", value_name = "FILE", help = "Score with a VADER-format lexicon file instead of the built-in VADER lexicon.")]
    pub lexicon: Option<PathBuf>,

    #[arg(long = "replace-all", help = "Make the replace filter substitute every occurrence of a mark.")]
    pub replace_all: bool,

    #[arg(long = "strict-labels", help = "Fail on labels that are not integers instead of reading them as 0.")]
    pub strict_labels: bool,

    #[arg(long = "show-matrix", help = "Print the confusion matrix as a table after the metrics.")]
    pub show_matrix: bool,

    #[arg(long, conflicts_with = "show_matrix", help = "Print the full report as JSON.")]
    pub json: bool,

    #[arg(long, short = 'q', help = "Suppress all log output.")]
    pub quiet: bool,

    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging, including per-record scores.")]
    pub debug: bool,
}

impl Cli {
    /// The configuration overrides carried by the flags.
    pub fn overrides(&self) -> EvalOverrides {
        EvalOverrides {
            filters: self.filters.clone(),
            replace_all: self.replace_all,
            strict_labels: self.strict_labels,
            lexicon_path: self.lexicon.clone(),
        }
    }

    /// The logger level the switches ask for; `None` defers to `RUST_LOG`.
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        if self.quiet {
            Some(log::LevelFilter::Off)
        } else if self.debug {
            Some(log::LevelFilter::Debug)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_filters_split_on_commas() {
        let cli = Cli::parse_from(["sentieval", "--filename", "data.csv", "--filters", "replace,lowercase"]);
        assert_eq!(cli.filename, Some(PathBuf::from("data.csv")));
        assert_eq!(
            cli.overrides().filters,
            Some(vec!["replace".to_string(), "lowercase".to_string()])
        );
    }

    #[test]
    fn test_absent_filters_leave_config_untouched() {
        let cli = Cli::parse_from(["sentieval", "--filename", "data.csv"]);
        assert_eq!(cli.overrides(), EvalOverrides::default());
        assert_eq!(cli.log_level(), None);
    }

    #[test]
    fn test_log_switches() {
        assert_eq!(Cli::parse_from(["sentieval", "-q"]).log_level(), Some(log::LevelFilter::Off));
        assert_eq!(Cli::parse_from(["sentieval", "-d"]).log_level(), Some(log::LevelFilter::Debug));
        assert!(Cli::try_parse_from(["sentieval", "-q", "-d"]).is_err());
    }
}
