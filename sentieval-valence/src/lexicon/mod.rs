// sentieval-valence/src/lexicon/mod.rs
extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;

use crate::Valence;

/// The compact lexicon shipped with the crate.
///
/// Same line format as the full VADER lexicon (`token<TAB>mean[<TAB>...]`),
/// so the full file can be swapped in at runtime.
const EMBEDDED_LEXICON: &str = include_str!("../../data/default_lexicon.tsv");

/// Error raised when a lexicon source contains an unreadable line.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconError {
    /// 1-based line number in the lexicon source.
    pub line: usize,
    pub reason: &'static str,
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lexicon line {}: {}", self.line, self.reason)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LexiconError {}

/// Maps tokens to their mean valence rating.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: BTreeMap<String, Valence>,
}

impl Lexicon {
    /// Parses a tab-separated lexicon.
    ///
    /// Blank lines are skipped. Only the first two columns are read, extra
    /// columns (standard deviation, raw ratings) are ignored.
    pub fn parse(source: &str) -> Result<Self, LexiconError> {
        let mut entries = BTreeMap::new();

        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let mut columns = line.split('\t');
            let token = columns.next().unwrap_or_default();
            if token.is_empty() {
                return Err(LexiconError { line: idx + 1, reason: "empty token" });
            }

            let valence = columns
                .next()
                .ok_or(LexiconError { line: idx + 1, reason: "missing valence column" })?
                .trim()
                .parse::<Valence>()
                .map_err(|_| LexiconError { line: idx + 1, reason: "valence is not a number" })?;

            entries.insert(token.to_string(), valence);
        }

        Ok(Self { entries })
    }

    /// Returns the compact lexicon compiled into the crate.
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::parse(EMBEDDED_LEXICON)
    }

    /// Looks up the valence of an already lowercased token.
    pub fn get(&self, token: &str) -> Option<Valence> {
        self.entries.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Adds or overrides a single entry.
    pub fn insert(&mut self, token: &str, valence: Valence) {
        self.entries.insert(token.to_string(), valence);
    }

    /// Overlays every entry of `other` on top of this lexicon.
    pub fn merge(&mut self, other: Lexicon) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, Valence)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (&'a str, Valence)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(token, valence)| (token.to_string(), valence)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reads_first_two_columns() {
        let lexicon = Lexicon::parse("good\t1.9\t0.9434\t[2, 1, 1]\nbad\t-2.5\n").unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("good"), Some(1.9));
        assert_eq!(lexicon.get("bad"), Some(-2.5));
        assert_eq!(lexicon.get("meh"), None);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let lexicon = Lexicon::parse("\n\ngreat\t3.1\r\n\n").unwrap();
        assert_eq!(lexicon.get("great"), Some(3.1));
    }

    #[test]
    fn test_parse_rejects_bad_valence() {
        let err = Lexicon::parse("good\t1.9\nbad\tterrible\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.reason, "valence is not a number");
    }

    #[test]
    fn test_parse_rejects_missing_column() {
        let err = Lexicon::parse("lonely").unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_embedded_lexicon_has_core_words() {
        let lexicon = Lexicon::embedded().unwrap();
        assert!(lexicon.len() > 100);
        assert_eq!(lexicon.get("good"), Some(1.9));
        assert!(lexicon.get("terrible").unwrap() < 0.0);
        assert!(lexicon.contains("no"));
    }

    #[test]
    fn test_collect_from_pairs() {
        let lexicon: Lexicon = [("sure", 1.3), (":d", 2.3)].into_iter().collect();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get(":d"), Some(2.3));
    }

    #[test]
    fn test_merge_overrides_entries() {
        let mut base = Lexicon::parse("good\t1.9\n").unwrap();
        base.merge(Lexicon::parse("good\t2.5\nfab\t2.0\n").unwrap());
        assert_eq!(base.get("good"), Some(2.5));
        assert_eq!(base.get("fab"), Some(2.0));
    }
}
