//! Morphological root generator.
//!
//! A word ending in two ASCII word characters followed by one of
//! [`ROOT_SUFFIXES`] is trimmed back to those two characters. Doubled letters collapse to one
//! ("runner" → "run"); differing letters produce a silent-e guess as well as
//! the bare stem ("dancing" → "dance", "danc").

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Inflectional endings stripped after a two-character stem.
pub const ROOT_SUFFIXES: &[&str] = &["ing", "er", "ed", "ly", "ely", "ily", "y", "ey", "s", "es"];

static ROOT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"((?-u:\w){{2}})({})$", ROOT_SUFFIXES.join("|"));
    Regex::new(&pattern).expect("invalid root suffix pattern")
});

fn same_letters(pair: &str) -> bool {
    let mut chars = pair.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => true,
    }
}

fn first_letter(pair: &str) -> String {
    pair.chars().next().map(String::from).unwrap_or_default()
}

/// Rewrite the matched stem pair with `rewrite`, dropping the suffix.
fn rewrite_root(word: &str, rewrite: impl Fn(&str) -> String) -> String {
    ROOT_PATTERN
        .replace(word, |caps: &Captures| rewrite(&caps[1]))
        .into_owned()
}

/// Single best-guess stem, used for needle matching.
pub fn simplify_word(word: &str) -> String {
    rewrite_root(word, |pair| {
        if same_letters(pair) {
            first_letter(pair)
        } else {
            pair.to_string()
        }
    })
}

pub fn simplify_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|w| simplify_word(w.as_ref())).collect()
}

/// Ordered, deduplicated root guesses. The original word is always first.
pub fn root_candidates(word: &str) -> Vec<String> {
    let with_e = rewrite_root(word, |pair| {
        if same_letters(pair) {
            first_letter(pair)
        } else {
            format!("{pair}e")
        }
    });
    let bare = simplify_word(word);

    let mut candidates = vec![word.to_string()];
    for candidate in [with_e, bare] {
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}
