//! Core types for etym-core.
//!
//! The typed view of a dictionary response ([`LexicalEntry`], [`Sense`],
//! [`Category`]), the grammatical [`PartOfSpeech`] constraint, and the
//! request/outcome pair that flows through the cascade.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Headword
// ---------------------------------------------------------------------------

/// A resolved dictionary headword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headword {
    /// Display form, read back to the user.
    pub word: String,
    /// Lookup identifier used for entry requests and root generation.
    pub id: String,
}

impl Headword {
    pub fn new(word: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            id: id.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// PartOfSpeech
// ---------------------------------------------------------------------------

/// Grammatical category names accepted as an explicit hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Pronoun,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    Determiner,
    Particle,
    Residual,
    Idiomatic,
}

impl PartOfSpeech {
    /// Lowercase category label as the dictionary spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Determiner => "determiner",
            PartOfSpeech::Particle => "particle",
            PartOfSpeech::Residual => "residual",
            PartOfSpeech::Idiomatic => "idiomatic",
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PartOfSpeech {
    type Err = String;

    /// Exact, case-sensitive match against the whitelist.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noun" => Ok(PartOfSpeech::Noun),
            "verb" => Ok(PartOfSpeech::Verb),
            "pronoun" => Ok(PartOfSpeech::Pronoun),
            "adjective" => Ok(PartOfSpeech::Adjective),
            "adverb" => Ok(PartOfSpeech::Adverb),
            "preposition" => Ok(PartOfSpeech::Preposition),
            "conjunction" => Ok(PartOfSpeech::Conjunction),
            "interjection" => Ok(PartOfSpeech::Interjection),
            "determiner" => Ok(PartOfSpeech::Determiner),
            "particle" => Ok(PartOfSpeech::Particle),
            "residual" => Ok(PartOfSpeech::Residual),
            "idiomatic" => Ok(PartOfSpeech::Idiomatic),
            other => Err(format!("unknown part of speech: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Lexical entries (typed view of the wire format)
// ---------------------------------------------------------------------------

/// Grammatical category of a lexical entry.
///
/// Older API versions send a bare label; v2 sends `{ "id": "noun", "text": "Noun" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Label(String),
    Tagged { id: String, text: String },
}

impl Category {
    pub fn label(&self) -> &str {
        match self {
            Category::Label(label) => label,
            Category::Tagged { text, .. } => text,
        }
    }

    pub fn is(&self, pos: PartOfSpeech) -> bool {
        match self {
            Category::Label(label) => label.to_lowercase() == pos.as_str(),
            Category::Tagged { id, text } => {
                text.to_lowercase() == pos.as_str() || id.to_lowercase() == pos.as_str()
            }
        }
    }
}

/// One lexical entry: a category plus its senses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalEntry {
    #[serde(rename = "lexicalCategory", alias = "grammaticalCategory")]
    pub category: Category,
    #[serde(default)]
    pub entries: Vec<Sense>,
}

impl LexicalEntry {
    /// True when at least one sense carries a nonempty etymology list.
    pub fn has_etymology(&self) -> bool {
        self.entries.iter().any(|sense| !sense.etymologies.is_empty())
    }
}

/// A sense record nested under a lexical entry. Only the etymologies matter here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub etymologies: Vec<String>,
}

// ---------------------------------------------------------------------------
// Request / outcome
// ---------------------------------------------------------------------------

/// Narrowing applied to each lookup response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Free-text disambiguator, e.g. "the animal".
    pub meaning: Option<String>,
    pub part_of_speech: Option<PartOfSpeech>,
}

/// Per-request input, as extracted from the conversational front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EtymologyRequest {
    pub phrase: String,
    /// Grammatical article word ("the", "to").
    pub article: Option<String>,
    /// Explicit category hint word ("noun", "verb", …).
    pub word: Option<String>,
    pub meaning: Option<String>,
    pub random: bool,
    pub locale: String,
}

/// Terminal result of one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found {
        headword: Headword,
        /// Root candidate that produced the etymology.
        root: String,
        etymology: String,
    },
    /// Every root candidate was tried without a usable etymology.
    Exhausted { headword: Headword, tried: Vec<String> },
    /// The headword search itself failed.
    Unresolved { phrase: String },
}
