//! Entry selector.
//!
//! Narrowing is always soft: every step that would leave nothing falls back
//! to the set it started from, so a response with any etymology-bearing entry
//! never selects down to zero.

use crate::error::LookupError;
use crate::node::Node;
use crate::rank::{rank, Needles};
use crate::text::first_non_empty;
use crate::types::{EntryFilter, LexicalEntry, PartOfSpeech};

/// Key left untouched by meaning ranking so etymology text is never re-scored.
pub const PRESERVED_KEY: &str = "etymologies";

/// Pick the category constraint from an explicit hint or an article word.
///
/// Returns `None` (no filtering) when neither is recognised.
pub fn resolve_part_of_speech(article: Option<&str>, hint: Option<&str>) -> Option<PartOfSpeech> {
    if let Some(pos) = hint.and_then(|h| h.parse().ok()) {
        return Some(pos);
    }
    match article {
        Some("the") => Some(PartOfSpeech::Noun),
        Some("to") => Some(PartOfSpeech::Verb),
        _ => None,
    }
}

/// Keep entries of category `pos` that carry an etymology, or all of them if none do.
pub fn select_by_part_of_speech(entries: Vec<LexicalEntry>, pos: PartOfSpeech) -> Vec<LexicalEntry> {
    let narrowed: Vec<LexicalEntry> = entries
        .iter()
        .filter(|entry| entry.category.is(pos) && entry.has_etymology())
        .cloned()
        .collect();
    first_non_empty([narrowed, entries])
}

/// Rank by meaning and keep etymology-bearing entries, falling back to `entries`.
pub fn select_by_meaning(
    raw: &Node,
    entries: Vec<LexicalEntry>,
    needles: &Needles,
) -> Result<Vec<LexicalEntry>, LookupError> {
    let ranked: Vec<LexicalEntry> = rank(raw, needles, Some(PRESERVED_KEY)).parse()?;
    let narrowed = ranked
        .into_iter()
        .filter(LexicalEntry::has_etymology)
        .collect();
    Ok(first_non_empty([narrowed, entries]))
}

/// Full narrowing pass over one lookup response.
pub fn select_entries(raw: &Node, filter: &EntryFilter) -> Result<Vec<LexicalEntry>, LookupError> {
    let mut selected: Vec<LexicalEntry> = raw.parse()?;

    if let Some(meaning) = filter.meaning.as_deref() {
        selected = select_by_meaning(raw, selected, &Needles::from_meaning(meaning))?;
    }

    if let Some(pos) = filter.part_of_speech {
        selected = select_by_part_of_speech(selected, pos);
    }

    Ok(selected)
}

/// First etymology string across all senses, in entry order.
pub fn first_etymology(entries: &[LexicalEntry]) -> Option<&str> {
    entries
        .iter()
        .flat_map(|entry| &entry.entries)
        .flat_map(|sense| &sense.etymologies)
        .map(String::as_str)
        .find(|etymology| !etymology.is_empty())
}
