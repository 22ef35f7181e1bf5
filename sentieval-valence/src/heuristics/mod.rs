// sentieval-valence/src/heuristics/mod.rs
//! Grammatical and syntactical rules that adjust a word's raw lexicon valence.

extern crate alloc;
use alloc::string::String;

use crate::lexicon::Lexicon;
use crate::tokens::{is_all_caps, SentiText};
use crate::Valence;

/// Empirically derived increment for intensifiers ("very good").
pub const B_INCR: Valence = 0.293;
/// Empirically derived decrement for dampeners ("kind of good").
pub const B_DECR: Valence = -0.293;
/// Emphasis added to an ALL-CAPS sentiment word in mixed-case text.
pub const C_INCR: Valence = 0.733;
/// Scalar applied to a negated sentiment word.
pub const N_SCALAR: Valence = -0.74;

const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
    "ain't", "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't",
    "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
    "don't", "hadn't", "hasn't", "haven't", "isn't", "mightn't", "mustn't",
    "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
    "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't",
    "without", "wont", "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
];

const BOOSTERS: &[(&str, Valence)] = &[
    ("absolutely", B_INCR), ("amazingly", B_INCR), ("awfully", B_INCR),
    ("completely", B_INCR), ("considerable", B_INCR), ("considerably", B_INCR),
    ("decidedly", B_INCR), ("deeply", B_INCR), ("effing", B_INCR),
    ("enormous", B_INCR), ("enormously", B_INCR), ("entirely", B_INCR),
    ("especially", B_INCR), ("exceptional", B_INCR), ("exceptionally", B_INCR),
    ("extreme", B_INCR), ("extremely", B_INCR), ("fabulously", B_INCR),
    ("flipping", B_INCR), ("flippin", B_INCR), ("frackin", B_INCR),
    ("fracking", B_INCR), ("fricking", B_INCR), ("frickin", B_INCR),
    ("frigging", B_INCR), ("friggin", B_INCR), ("fully", B_INCR),
    ("fuckin", B_INCR), ("fucking", B_INCR), ("fuggin", B_INCR), ("fugging", B_INCR),
    ("greatly", B_INCR), ("hella", B_INCR), ("highly", B_INCR), ("hugely", B_INCR),
    ("incredible", B_INCR), ("incredibly", B_INCR), ("intensely", B_INCR),
    ("major", B_INCR), ("majorly", B_INCR), ("more", B_INCR), ("most", B_INCR),
    ("particularly", B_INCR), ("purely", B_INCR), ("quite", B_INCR),
    ("really", B_INCR), ("remarkably", B_INCR), ("so", B_INCR),
    ("substantially", B_INCR), ("thoroughly", B_INCR), ("total", B_INCR),
    ("totally", B_INCR), ("tremendous", B_INCR), ("tremendously", B_INCR),
    ("uber", B_INCR), ("unbelievably", B_INCR), ("unusually", B_INCR),
    ("utter", B_INCR), ("utterly", B_INCR), ("very", B_INCR),
    ("almost", B_DECR), ("barely", B_DECR), ("hardly", B_DECR),
    ("just enough", B_DECR), ("kind of", B_DECR), ("kinda", B_DECR),
    ("kindof", B_DECR), ("kind-of", B_DECR), ("less", B_DECR), ("little", B_DECR),
    ("marginal", B_DECR), ("marginally", B_DECR), ("occasional", B_DECR),
    ("occasionally", B_DECR), ("partly", B_DECR), ("scarce", B_DECR),
    ("scarcely", B_DECR), ("slight", B_DECR), ("slightly", B_DECR),
    ("somewhat", B_DECR), ("sort of", B_DECR), ("sorta", B_DECR),
    ("sortof", B_DECR), ("sort-of", B_DECR),
];

/// Idioms whose valence replaces that of their last word.
const SPECIAL_IDIOMS: &[(&str, Valence)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("badass", 1.5),
    ("bus stopper", 0.0),
    ("yeah right", -2.0),
    ("kiss of death", -1.5),
    ("to die for", 3.0),
    ("beating heart", 3.1),
    ("broken heart", -2.9),
];

/// Returns the booster scalar for a lowercased word or phrase.
pub fn booster(word: &str) -> Option<Valence> {
    BOOSTERS.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

fn special_idiom(phrase: &str) -> Option<Valence> {
    SPECIAL_IDIOMS.iter().find(|(p, _)| *p == phrase).map(|(_, v)| *v)
}

/// True when the lowercased word negates what follows it.
pub fn is_negation(word: &str) -> bool {
    NEGATE.contains(&word) || word.contains("n't")
}

/// Intensity shift contributed by a (possible) booster word preceding a
/// sentiment word of the given valence.
pub fn scalar_inc_dec(word: &str, lowered: &str, valence: Valence, is_cap_diff: bool) -> Valence {
    let Some(mut scalar) = booster(lowered) else {
        return 0.0;
    };

    if valence < 0.0 {
        scalar *= -1.0;
    }
    if is_all_caps(word) && is_cap_diff {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

/// Applies negation found `start_i + 1` tokens before position `i`.
pub fn negation_check(valence: Valence, text: &SentiText, start_i: usize, i: usize) -> Valence {
    let w = &text.lowered;
    let so_or_this = |s: &str| s == "so" || s == "this";

    match start_i {
        0 => {
            if is_negation(&w[i - 1]) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if w[i - 2] == "never" && so_or_this(&w[i - 1]) {
                return valence * 1.25;
            } else if w[i - 2] == "without" && w[i - 1] == "doubt" {
                return valence;
            } else if is_negation(&w[i - 2]) {
                return valence * N_SCALAR;
            }
        }
        2 => {
            if w[i - 3] == "never" && (so_or_this(&w[i - 2]) || so_or_this(&w[i - 1])) {
                return valence * 1.25;
            } else if w[i - 3] == "without" && (w[i - 2] == "doubt" || w[i - 1] == "doubt") {
                return valence;
            } else if is_negation(&w[i - 3]) {
                return valence * N_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

/// Handles "least" used as a negator ("the least fun") while leaving
/// "at least" and "very least" alone.
pub fn least_check(valence: Valence, text: &SentiText, i: usize, lexicon: &Lexicon) -> Valence {
    let w = &text.lowered;
    if i > 1 && !lexicon.contains(&w[i - 1]) && w[i - 1] == "least" {
        if w[i - 2] != "at" && w[i - 2] != "very" {
            return valence * N_SCALAR;
        }
    } else if i > 0 && !lexicon.contains(&w[i - 1]) && w[i - 1] == "least" {
        return valence * N_SCALAR;
    }
    valence
}

/// Replaces the valence at position `i` (which must be at least 3) when it
/// closes or opens a known idiom, and adds multi-word booster phrases.
pub fn special_idioms_check(valence: Valence, text: &SentiText, i: usize) -> Valence {
    let w = &text.lowered;
    let join = |parts: &[&String]| {
        let mut out = String::new();
        for (n, part) in parts.iter().enumerate() {
            if n > 0 {
                out.push(' ');
            }
            out.push_str(part);
        }
        out
    };

    let one_zero = join(&[&w[i - 1], &w[i]]);
    let two_one_zero = join(&[&w[i - 2], &w[i - 1], &w[i]]);
    let two_one = join(&[&w[i - 2], &w[i - 1]]);
    let three_two_one = join(&[&w[i - 3], &w[i - 2], &w[i - 1]]);
    let three_two = join(&[&w[i - 3], &w[i - 2]]);

    let mut valence = valence;
    for seq in [&one_zero, &two_one_zero, &two_one, &three_two_one, &three_two] {
        if let Some(v) = special_idiom(seq) {
            valence = v;
            break;
        }
    }

    if w.len() - 1 > i {
        if let Some(v) = special_idiom(&join(&[&w[i], &w[i + 1]])) {
            valence = v;
        }
    }
    if w.len() - 1 > i + 1 {
        if let Some(v) = special_idiom(&join(&[&w[i], &w[i + 1], &w[i + 2]])) {
            valence = v;
        }
    }

    for ngram in [&three_two_one, &three_two, &two_one] {
        if let Some(b) = booster(ngram) {
            valence += b;
        }
    }
    valence
}

/// Shifts weight towards the clause after the first "but": sentiment before
/// it is halved, sentiment after it is increased by half.
pub fn but_check(text: &SentiText, sentiments: &mut [Valence]) {
    let Some(but_index) = text.lowered.iter().position(|w| w == "but") else {
        return;
    };

    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < but_index {
            *sentiment *= 0.5;
        } else if idx > but_index {
            *sentiment *= 1.5;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_negation_words() {
        assert!(is_negation("not"));
        assert!(is_negation("never"));
        assert!(is_negation("shouldn't"));
        assert!(is_negation("isn't"));
        assert!(!is_negation("good"));
    }

    #[test]
    fn test_scalar_inc_dec_follows_valence_sign() {
        assert!((scalar_inc_dec("very", "very", 1.9, false) - B_INCR).abs() < EPSILON);
        assert!((scalar_inc_dec("very", "very", -1.9, false) + B_INCR).abs() < EPSILON);
        assert!((scalar_inc_dec("slightly", "slightly", 1.9, false) - B_DECR).abs() < EPSILON);
        assert_eq!(scalar_inc_dec("the", "the", 1.9, false), 0.0);
    }

    #[test]
    fn test_scalar_inc_dec_caps_emphasis() {
        let scalar = scalar_inc_dec("VERY", "very", 1.9, true);
        assert!((scalar - (B_INCR + C_INCR)).abs() < EPSILON);
    }

    #[test]
    fn test_negation_check_never_so() {
        let text = SentiText::new("never so good");
        let v = negation_check(1.0, &text, 1, 2);
        assert!((v - 1.25).abs() < EPSILON);
    }

    #[test]
    fn test_negation_check_without_doubt() {
        let text = SentiText::new("without doubt good");
        assert_eq!(negation_check(1.0, &text, 1, 2), 1.0);
    }

    #[test]
    fn test_least_check() {
        let lexicon = Lexicon::parse("fun\t2.3\n").unwrap();
        let negated = SentiText::new("the least fun");
        assert!((least_check(2.3, &negated, 2, &lexicon) - 2.3 * N_SCALAR).abs() < EPSILON);

        let at_least = SentiText::new("at least fun");
        assert_eq!(least_check(2.3, &at_least, 2, &lexicon), 2.3);
    }

    #[test]
    fn test_special_idioms_check_replaces_valence() {
        let text = SentiText::new("oh well yeah right");
        let v = special_idioms_check(1.2, &text, 3);
        assert_eq!(v, -2.0);
    }

    #[test]
    fn test_but_check_shifts_weight() {
        let text = SentiText::new("good but bad");
        let mut sentiments = vec![2.0, 0.0, -2.0];
        but_check(&text, &mut sentiments);
        assert_eq!(sentiments, vec![1.0, 0.0, -3.0]);
    }
}
