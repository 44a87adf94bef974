//! etym-core: word-origin lookup core.
//!
//! This crate holds everything between a spoken phrase and a single etymology
//! string. The dictionary itself is reached only through the [`Dictionary`]
//! trait so the HTTP client lives in `etym-lookup` and tests can swap in an
//! in-memory fake.
//!
//! # Pipeline
//!
//! ```text
//! phrase ──► headword ──► root candidates ──► Dictionary::get_entries
//!                                                   │
//!            meaning ──► needles ──► rank ──► select by part of speech
//!                                                   │
//!                                             first etymology
//! ```

pub mod cascade;
pub mod config;
pub mod error;
pub mod node;
pub mod rank;
pub mod roots;
pub mod select;
pub mod text;
pub mod types;
pub mod words;

pub use cascade::{lookup_etymology, recover_etymology, Dictionary, Recovery};
pub use error::LookupError;
pub use node::Node;
pub use rank::{rank, Needles};
pub use types::{
    Category, EtymologyRequest, EntryFilter, Headword, LexicalEntry, Lookup, PartOfSpeech, Sense,
};
