//! Root-recovery cascade.
//!
//! Resolves a headword, then walks its root candidates in generation order,
//! one lookup at a time, until a candidate yields an etymology. A failed
//! candidate never aborts the walk.

use async_trait::async_trait;

use crate::error::LookupError;
use crate::node::Node;
use crate::roots::root_candidates;
use crate::select::{first_etymology, resolve_part_of_speech, select_entries};
use crate::text::trim_quotes;
use crate::types::{EntryFilter, EtymologyRequest, Headword, Lookup};
use crate::words::random_headword;

// ---------------------------------------------------------------------------
// Dictionary seam
// ---------------------------------------------------------------------------

/// The external headword/entry service.
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Best headword match for a free-text query.
    async fn search_headword(&self, query: &str, locale: &str) -> Result<Headword, LookupError>;

    /// Raw lexical-entry list for a headword id.
    async fn get_entries(&self, id: &str, locale: &str) -> Result<Node, LookupError>;
}

// ---------------------------------------------------------------------------
// Cascade
// ---------------------------------------------------------------------------

/// Outcome of walking the root candidates of one headword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    Found { root: String, etymology: String },
    Exhausted { tried: Vec<String> },
}

/// One candidate: lookup, narrow, extract.
async fn attempt(
    dictionary: &dyn Dictionary,
    root: &str,
    filter: &EntryFilter,
    locale: &str,
) -> Result<String, LookupError> {
    let raw = dictionary.get_entries(root, locale).await?;
    let selected = select_entries(&raw, filter)?;
    first_etymology(&selected)
        .map(str::to_string)
        .ok_or_else(|| LookupError::NoEtymology(root.to_string()))
}

/// Try each root candidate of `id` in order; the first etymology wins.
pub async fn recover_etymology(
    dictionary: &dyn Dictionary,
    id: &str,
    filter: &EntryFilter,
    locale: &str,
) -> Recovery {
    let candidates = root_candidates(id);
    let mut tried = Vec::with_capacity(candidates.len());

    for root in candidates {
        match attempt(dictionary, &root, filter, locale).await {
            Ok(etymology) => {
                tracing::debug!(%root, "etymology found");
                return Recovery::Found { root, etymology };
            }
            Err(err) if err.is_no_data() => {
                tracing::debug!(%root, error = %err, "no data for root candidate");
            }
            Err(err) => {
                tracing::warn!(%root, error = %err, "root candidate lookup failed");
            }
        }
        tried.push(root);
    }

    Recovery::Exhausted { tried }
}

fn pick_random_headword() -> Headword {
    random_headword(&mut rand::thread_rng())
}

/// Resolve the headword for a request: random draw or dictionary search.
pub async fn resolve_headword(
    dictionary: &dyn Dictionary,
    request: &EtymologyRequest,
) -> Result<Headword, LookupError> {
    if request.random {
        return Ok(pick_random_headword());
    }
    dictionary
        .search_headword(&trim_quotes(&request.phrase), &request.locale)
        .await
}

/// Full lookup for one request.
pub async fn lookup_etymology(dictionary: &dyn Dictionary, request: &EtymologyRequest) -> Lookup {
    let headword = match resolve_headword(dictionary, request).await {
        Ok(headword) => headword,
        Err(err) => {
            tracing::info!(phrase = %request.phrase, error = %err, "headword search failed");
            return Lookup::Unresolved {
                phrase: request.phrase.clone(),
            };
        }
    };

    let filter = EntryFilter {
        meaning: request.meaning.clone().filter(|m| !m.is_empty()),
        part_of_speech: resolve_part_of_speech(
            request.article.as_deref(),
            request.word.as_deref(),
        ),
    };
    tracing::debug!(
        word = %headword.word,
        id = %headword.id,
        part_of_speech = ?filter.part_of_speech,
        meaning = ?filter.meaning,
        "headword resolved"
    );

    match recover_etymology(dictionary, &headword.id, &filter, &request.locale).await {
        Recovery::Found { root, etymology } => Lookup::Found {
            headword,
            root,
            etymology,
        },
        Recovery::Exhausted { tried } => Lookup::Exhausted { headword, tried },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
