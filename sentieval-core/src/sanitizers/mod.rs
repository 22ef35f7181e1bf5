//! Text sanitization pipeline for sentieval.
//!
//! A `SanitizerConfig` is an ordered list of `TextFilter`s. Each filter
//! consumes the previous filter's output, so `[normalize, lowercase]` and
//! `[lowercase, normalize]` are distinct pipelines. Filter names come from the
//! CLI or the YAML config; names outside the known set are dropped.
//!
//! The transforms themselves live in `filters`.

pub mod filters;

use log::debug;
use std::fmt;
use std::str::FromStr;

pub use filters::ReplaceMode;

/// One named text-cleaning transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextFilter {
    /// `lowercase`: Unicode lowercasing.
    Lowercase,
    /// `normalize`: diacritics to base letters.
    Normalize,
    /// `replace`: punctuation marks to spaces.
    Replace,
}

/// Error type for an unrecognised filter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilterError(pub String);

impl fmt::Display for UnknownFilterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Unknown filter '{}'; expected one of: lowercase, normalize, replace.",
            self.0
        )
    }
}

impl std::error::Error for UnknownFilterError {}

impl FromStr for TextFilter {
    type Err = UnknownFilterError;

    /// Filter names are matched exactly, as they appear on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowercase" => Ok(TextFilter::Lowercase),
            "normalize" => Ok(TextFilter::Normalize),
            "replace" => Ok(TextFilter::Replace),
            other => Err(UnknownFilterError(other.to_string())),
        }
    }
}

impl fmt::Display for TextFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TextFilter::Lowercase => "lowercase",
            TextFilter::Normalize => "normalize",
            TextFilter::Replace => "replace",
        };
        f.write_str(name)
    }
}

/// Ordered filter pipeline plus the options the individual filters need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizerConfig {
    pub filters: Vec<TextFilter>,
    pub replace_mode: ReplaceMode,
}

impl SanitizerConfig {
    /// Builds a pipeline from filter names, keeping their order.
    ///
    /// Unrecognised names are skipped without error; blank names (as produced
    /// by an empty `--filters ""`) are skipped too.
    pub fn from_names<S: AsRef<str>>(names: &[S], replace_mode: ReplaceMode) -> Self {
        let mut filters = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if name.is_empty() {
                continue;
            }
            match name.parse::<TextFilter>() {
                Ok(filter) => filters.push(filter),
                Err(e) => debug!("Ignoring filter: {}", e),
            }
        }
        debug!("Sanitizer pipeline: {:?} (replace mode {:?})", filters, replace_mode);
        Self { filters, replace_mode }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// Runs `text` through every configured filter in order.
///
/// Returns the input unchanged when no filter is configured. Surrounding
/// whitespace is left as is; trimming happens before scoring.
pub fn sanitize(text: &str, config: &SanitizerConfig) -> String {
    let mut out = text.to_string();
    for filter in &config.filters {
        out = match filter {
            TextFilter::Lowercase => filters::lowercase(&out),
            TextFilter::Normalize => filters::normalize_diacritics(&out),
            TextFilter::Replace => filters::replace_punctuation(&out, config.replace_mode),
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(names: &[&str]) -> SanitizerConfig {
        SanitizerConfig::from_names(names, ReplaceMode::FirstOccurrence)
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let config = pipeline(&[]);
        assert!(config.is_empty());
        assert_eq!(sanitize("  Keep ME. as-is  ", &config), "  Keep ME. as-is  ");
    }

    #[test]
    fn test_single_filters() {
        assert_eq!(sanitize("a.b.c", &pipeline(&["replace"])), "a b.c");
        assert_eq!(sanitize("HELLO World", &pipeline(&["lowercase"])), "hello world");
        assert_eq!(sanitize("café", &pipeline(&["normalize"])), "cafe");
    }

    #[test]
    fn test_unknown_and_blank_names_are_ignored() {
        let config = pipeline(&["uppercase", "", "lowercase", "LOWERCASE"]);
        assert_eq!(config.filters, vec![TextFilter::Lowercase]);
        assert_eq!(sanitize("ABC", &config), "abc");
    }

    #[test]
    fn test_filters_apply_in_given_order() {
        let config = pipeline(&["replace", "lowercase", "normalize"]);
        assert_eq!(
            config.filters,
            vec![TextFilter::Replace, TextFilter::Lowercase, TextFilter::Normalize]
        );
        assert_eq!(sanitize("CAFÉ. Très: bon.", &config), "cafe  tres  bon.");
    }

    #[test]
    fn test_repeated_filter_runs_twice() {
        let config = pipeline(&["replace", "replace"]);
        assert_eq!(sanitize("a.b.c", &config), "a b c");
    }
}
