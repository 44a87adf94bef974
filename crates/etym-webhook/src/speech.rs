//! SSML speech enhancer.
//!
//! Cosmetic rewrites that make dictionary prose read better aloud.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static COLON_LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r": ([a-z])").expect("invalid colon pattern"));

/// Escape the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Wrap `text` in `<speak>` and smooth a few pauses.
///
/// A comma is added before an opening curly quote, and `": x"` becomes
/// `". X"` so a colon reads as a sentence break.
pub fn speech_enhancer(text: &str) -> String {
    let ssml = format!("<speak>{}</speak>", escape_xml(text)).replace(" ‘", ", ‘");
    COLON_LOWERCASE
        .replace_all(&ssml, |caps: &Captures| format!(". {}", caps[1].to_uppercase()))
        .into_owned()
}
