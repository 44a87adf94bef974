//! Tokenizer and normalizer.
//!
//! Surface-level text handling only: lowercasing, punctuation stripping,
//! whitespace splitting and exact-match stop-word removal. Nothing here knows
//! about grammar.

use regex::{Captures, Regex};
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Static tables
// ---------------------------------------------------------------------------

/// High-frequency filler words removed from "meaning" queries.
///
/// Matching is exact and case-sensitive: `I` is listed, `i` is not.
pub static STOP_WORDS: phf::Set<&'static str> = phf::phf_set! {
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "I",
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
    "this", "but", "his", "by", "from", "they", "we", "say", "her", "she",
    "or", "an", "will", "my", "one", "all", "would", "there", "their", "what",
    "so", "up", "out", "if", "about", "who", "get", "which", "go", "me",
    "when", "make", "can", "like", "no", "just", "him", "know", "take", "into",
    "your", "good", "some", "could", "them", "see", "other", "than", "then", "now",
    "look", "only", "come", "its", "over", "think", "also", "back", "after", "use",
    "two", "how", "our", "well", "way", "even", "new", "want", "because", "any",
    "these", "give", "most", "us", "is", "am", "are",
};

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.,/#!$%&;:{}=`~()'"‘’“”]"#).expect("invalid punctuation pattern")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid whitespace pattern"));

static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w'-]+").expect("invalid word-run pattern"));

static SURROUNDING_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(^["'])|(["']$)"#).expect("invalid quote pattern"));

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Lowercase `text`, blank out punctuation and split on whitespace runs.
///
/// Split semantics are kept as-is: `""` yields `[""]` and leading or trailing
/// whitespace yields empty tokens at the ends.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let blanked = PUNCTUATION.replace_all(&lowered, " ");
    WHITESPACE.split(&blanked).map(str::to_string).collect()
}

/// Remove every word run that is exactly a stop word. Whitespace is left in place.
pub fn strip_stop_words(text: &str) -> String {
    WORD_RUN
        .replace_all(text, |caps: &Captures| {
            let run = &caps[0];
            if STOP_WORDS.contains(run) {
                String::new()
            } else {
                run.to_string()
            }
        })
        .into_owned()
}

/// Drop one leading and one trailing straight quote.
pub fn trim_quotes(text: &str) -> String {
    SURROUNDING_QUOTES.replace_all(text, "").into_owned()
}

/// Return the first nonempty list, or an empty one.
pub fn first_non_empty<T>(lists: impl IntoIterator<Item = Vec<T>>) -> Vec<T> {
    lists
        .into_iter()
        .find(|list| !list.is_empty())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
