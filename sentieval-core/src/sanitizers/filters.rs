//! filters.rs - The individual text transforms behind each named filter.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Punctuation marks handled by the `replace` filter, in application order.
pub const REPLACED_MARKS: [&str; 6] = [".", ";", "...", ":", ",", "\""];

/// How many occurrences of each punctuation mark the `replace` filter touches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplaceMode {
    /// Only the first occurrence of each mark becomes a space.
    #[default]
    FirstOccurrence,
    /// Every occurrence of each mark becomes a space.
    All,
}

/// Locale-independent Unicode lowercasing.
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Replaces accented characters with their unaccented base letter.
///
/// Decomposes to NFD, drops combining marks, folds the handful of letters
/// that carry no decomposition (`ø`, `ß`, ...) and recomposes what is left.
pub fn normalize_diacritics(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        match fold_letter(c) {
            Some(base) => folded.push_str(base),
            None => folded.push(c),
        }
    }
    folded.nfc().collect()
}

/// Substitutes a single space for the configured occurrences of each mark in
/// [`REPLACED_MARKS`].
///
/// Marks are processed in order, so with `FirstOccurrence` an ellipsis loses
/// its first dot to the `.` pass before the `...` pass runs.
pub fn replace_punctuation(text: &str, mode: ReplaceMode) -> String {
    let mut out = text.to_string();
    for mark in REPLACED_MARKS {
        out = match mode {
            ReplaceMode::FirstOccurrence => out.replacen(mark, " ", 1),
            ReplaceMode::All => out.replace(mark, " "),
        };
    }
    out
}

fn is_combining_mark(c: char) -> bool {
    let cp = c as u32;
    matches!(
        cp,
        0x0300..=0x036F   // Combining Diacritical Marks
        | 0x1AB0..=0x1AFF // Combining Diacritical Marks Extended
        | 0x1DC0..=0x1DFF // Combining Diacritical Marks Supplement
        | 0x20D0..=0x20FF // Combining Diacritical Marks for Symbols
        | 0xFE20..=0xFE2F // Combining Half Marks
    )
}

fn fold_letter(c: char) -> Option<&'static str> {
    let base = match c {
        'ø' => "o",
        'Ø' => "O",
        'ł' => "l",
        'Ł' => "L",
        'đ' => "d",
        'Đ' => "D",
        'ħ' => "h",
        'Ħ' => "H",
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'þ' => "th",
        'Þ' => "TH",
        'ı' => "i",
        _ => return None,
    };
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        assert_eq!(lowercase("HELLO World"), "hello world");
        assert_eq!(lowercase("ÉCOLE"), "école");
    }

    #[test]
    fn test_normalize_strips_accents() {
        assert_eq!(normalize_diacritics("café"), "cafe");
        assert_eq!(normalize_diacritics("Crème Brûlée"), "Creme Brulee");
        assert_eq!(normalize_diacritics("niño açaí"), "nino acai");
    }

    #[test]
    fn test_normalize_folds_undecomposable_letters() {
        assert_eq!(normalize_diacritics("Søren Łódź straße"), "Soren Lodz strasse");
    }

    #[test]
    fn test_normalize_leaves_plain_text_alone() {
        let plain = "plain ascii text, 123!";
        assert_eq!(normalize_diacritics(plain), plain);
    }

    #[test]
    fn test_replace_first_occurrence_only() {
        assert_eq!(replace_punctuation("a.b.c", ReplaceMode::FirstOccurrence), "a b.c");
        assert_eq!(
            replace_punctuation("x;y;z: \"q\", w,", ReplaceMode::FirstOccurrence),
            "x y;z   q\"  w,"
        );
    }

    #[test]
    fn test_replace_ellipsis_quirk() {
        // The "." pass eats the first dot, leaving ".." which no longer
        // matches "...".
        assert_eq!(replace_punctuation("wait...", ReplaceMode::FirstOccurrence), "wait ..");
    }

    #[test]
    fn test_replace_all() {
        assert_eq!(replace_punctuation("a.b.c", ReplaceMode::All), "a b c");
        assert_eq!(replace_punctuation("\"hi\", there.", ReplaceMode::All), " hi   there ");
    }
}
