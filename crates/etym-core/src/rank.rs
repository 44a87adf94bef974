//! Relevance ranker.
//!
//! Scores each branch of a [`Node`] tree by how many of its serialized tokens
//! start with one of the query [`Needles`]. Sequences are filtered to
//! positive scores and stably reordered best-first; mappings are rebuilt with
//! every value ranked except the preserved key; scalars pass through.

use crate::node::Node;
use crate::roots::simplify_words;
use crate::text::{normalize, strip_stop_words};

/// Lowercased query stems used for prefix matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Needles(Vec<String>);

impl Needles {
    /// Derive needles from free text: stop words out, normalize, simplify.
    pub fn from_meaning(meaning: &str) -> Self {
        let tokens = normalize(&strip_stop_words(meaning));
        let mut needles: Vec<String> = Vec::with_capacity(tokens.len());
        for stem in simplify_words(&tokens) {
            if !stem.is_empty() && !needles.contains(&stem) {
                needles.push(stem);
            }
        }
        Self(needles)
    }

    /// Use a precomputed set as-is. Comparison is still case-insensitive.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(tokens.into_iter().map(|t| t.as_ref().to_lowercase()).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of tokens that some needle is a prefix of.
    pub fn score(&self, tokens: &[String]) -> usize {
        tokens
            .iter()
            .filter(|token| self.0.iter().any(|needle| token.starts_with(needle.as_str())))
            .count()
    }
}

/// Rank `haystack` against `needles`, leaving the value under `preserve` untouched.
///
/// Always builds a new tree; the input is only read.
pub fn rank(haystack: &Node, needles: &Needles, preserve: Option<&str>) -> Node {
    match haystack {
        Node::Sequence(items) => {
            let mut scored: Vec<(usize, &Node)> = items
                .iter()
                .map(|item| (needles.score(&item.tokens()), item))
                .filter(|(score, _)| *score > 0)
                .collect();
            // sort_by is stable: equal scores keep their original order.
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            Node::Sequence(
                scored
                    .into_iter()
                    .map(|(_, item)| rank(item, needles, preserve))
                    .collect(),
            )
        }
        Node::Mapping(pairs) => Node::Mapping(
            pairs
                .iter()
                .map(|(key, value)| {
                    let value = if Some(key.as_str()) == preserve {
                        value.clone()
                    } else {
                        rank(value, needles, preserve)
                    };
                    (key.clone(), value)
                })
                .collect(),
        ),
        Node::Scalar(_) => haystack.clone(),
    }
}
