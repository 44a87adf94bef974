//! etym: word-origin voice assistant webhook.
//!
//! Answers "where does the word X come from" by searching a dictionary API
//! for a headword, recovering plausible root forms, and reading back the best
//! matching etymology. The workspace crates are re-exported here so that
//! integration tests and benches can import them through one path.
//!
//! # Architecture
//!
//! ```text
//! Dialogflow ──► etym-webhook ──► etym-core cascade ──► etym-lookup ──► dictionary API
//!                     ▲                  │
//!                     └── SSML reply ◄───┘
//! ```
//!
//! Lookups for one request run sequentially on the request's task; nothing is
//! shared between requests except the HTTP client and static word tables.

pub use etym_core as lexicon;
pub use etym_lookup as lookup;
pub use etym_webhook as webhook;
