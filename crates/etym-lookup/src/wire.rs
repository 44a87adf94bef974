//! Response bodies of the two endpoints the client uses.
//!
//! Only the fields the core reads are typed; lexical entries stay as raw JSON
//! so the ranker can see every field.

use serde::Deserialize;

/// `GET /search/{locale}?q=…&limit=…`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub id: String,
    /// Some responses omit `word`; the id is used for display then.
    #[serde(default)]
    pub word: Option<String>,
}

/// `GET /entries/{locale}/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct EntriesResponse {
    #[serde(default)]
    pub results: Vec<HeadwordEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadwordEntry {
    #[serde(rename = "lexicalEntries", default)]
    pub lexical_entries: serde_json::Value,
}
