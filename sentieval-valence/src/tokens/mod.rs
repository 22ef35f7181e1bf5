// sentieval-valence/src/tokens/mod.rs
extern crate alloc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A piece of text split into the word tokens the rules operate on.
#[derive(Debug, Clone)]
pub struct SentiText {
    /// Tokens as they appear in the text, edge punctuation stripped.
    pub words: Vec<String>,
    /// Lowercased twins of `words`, index aligned.
    pub lowered: Vec<String>,
    /// True when some, but not all, tokens are written in ALL CAPS.
    pub is_cap_diff: bool,
}

impl SentiText {
    pub fn new(text: &str) -> Self {
        let words: Vec<String> = text
            .split_whitespace()
            .map(strip_punctuation_if_word)
            .filter(|w| w.chars().count() > 1)
            .map(|w| w.to_string())
            .collect();

        let lowered = words.iter().map(|w| w.to_lowercase()).collect();
        let is_cap_diff = allcap_differential(&words);

        Self { words, lowered, is_cap_diff }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Removes leading and trailing punctuation unless that would leave two
/// characters or fewer, which keeps emoticons such as `:)` intact.
fn strip_punctuation_if_word(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

/// True when the token has at least one cased letter and no lowercase ones.
pub fn is_all_caps(word: &str) -> bool {
    let mut has_cased = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

fn allcap_differential(words: &[String]) -> bool {
    let caps = words.iter().filter(|w| is_all_caps(w)).count();
    let differential = words.len() - caps;
    differential > 0 && differential < words.len()
}
