//! In-memory `Dictionary` for harnesses that do not need HTTP.

use async_trait::async_trait;
use etym_core::{Dictionary, Headword, LookupError, Node};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Serves canned headwords and `lexicalEntries` arrays, records every entry
/// lookup, and can be slowed down to exercise timeouts.
#[derive(Default)]
pub struct MemoryDictionary {
    headwords: HashMap<String, Headword>,
    entries: HashMap<String, serde_json::Value>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl MemoryDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headword(mut self, query: &str, word: &str, id: &str) -> Self {
        self.headwords.insert(query.to_string(), Headword::new(word, id));
        self
    }

    /// Register the `lexicalEntries` array for `id`.
    pub fn entries(mut self, id: &str, lexical_entries: serde_json::Value) -> Self {
        self.entries.insert(id.to_string(), lexical_entries);
        self
    }

    /// Sleep this long before answering any entry lookup.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dictionary for MemoryDictionary {
    async fn search_headword(&self, query: &str, _locale: &str) -> Result<Headword, LookupError> {
        self.headwords
            .get(query)
            .cloned()
            .ok_or_else(|| LookupError::NoResults(query.to_string()))
    }

    async fn get_entries(&self, id: &str, locale: &str) -> Result<Node, LookupError> {
        self.calls.lock().unwrap().push(id.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.entries
            .get(id)
            .cloned()
            .map(Node::from)
            .ok_or_else(|| LookupError::Status {
                status: 404,
                path: format!("/entries/{locale}/{id}"),
            })
    }
}
