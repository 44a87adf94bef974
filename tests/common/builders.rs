//! Test builders for dictionary response bodies and webhook requests.
//!
//! These produce JSON in the shape the dictionary API and Dialogflow send.
//! They panic on invalid input rather than returning `Result`.

use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// LexicalEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one element of a `lexicalEntries` array.
///
/// Each `sense` call adds one element of the entry's `entries` array;
/// `definition` attaches a definition to the most recent one.
///
/// ```rust
/// let entry = LexicalEntryBuilder::new("Noun")
///     .sense(&["Old English batt"])
///     .definition("a club used for hitting the ball")
///     .build();
/// ```
pub struct LexicalEntryBuilder {
    category: String,
    senses: Vec<Value>,
    tagged: bool,
}

impl LexicalEntryBuilder {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            senses: Vec::new(),
            tagged: true,
        }
    }

    /// One sense carrying the given etymology strings.
    pub fn sense(mut self, etymologies: &[&str]) -> Self {
        self.senses.push(json!({ "etymologies": etymologies }));
        self
    }

    /// Attach a definition to the most recently added sense.
    pub fn definition(mut self, text: &str) -> Self {
        let sense = self
            .senses
            .last_mut()
            .expect("definition() needs a preceding sense()");
        let definitions = json!({ "definitions": [text] });
        match sense.get_mut("senses").and_then(Value::as_array_mut) {
            Some(senses) => senses.push(definitions),
            None => sense["senses"] = json!([definitions]),
        }
        self
    }

    /// One sense with no etymology field at all.
    pub fn bare_sense(mut self) -> Self {
        self.senses.push(json!({ "id": "m_en_gbus0000000.001" }));
        self
    }

    /// Emit the category as a plain string instead of `{ id, text }`.
    pub fn plain_category(mut self) -> Self {
        self.tagged = false;
        self
    }

    pub fn build(self) -> Value {
        let category = if self.tagged {
            json!({ "id": self.category.to_lowercase(), "text": self.category })
        } else {
            json!(self.category)
        };
        json!({
            "language": "en-us",
            "lexicalCategory": category,
            "entries": self.senses,
        })
    }
}

/// Single noun entry with one etymology.
pub fn noun_entry(etymology: &str) -> Value {
    LexicalEntryBuilder::new("Noun").sense(&[etymology]).build()
}

/// Single verb entry with one etymology.
pub fn verb_entry(etymology: &str) -> Value {
    LexicalEntryBuilder::new("Verb").sense(&[etymology]).build()
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// A full `/entries` response body wrapping `lexical_entries`.
pub fn entries_body(id: &str, lexical_entries: Vec<Value>) -> Value {
    json!({
        "id": id,
        "metadata": { "provider": "test" },
        "results": [{
            "id": id,
            "language": "en-us",
            "type": "headword",
            "word": id,
            "lexicalEntries": lexical_entries,
        }],
        "word": id,
    })
}

// ---------------------------------------------------------------------------
// Webhook requests
// ---------------------------------------------------------------------------

/// Fluent builder for a Dialogflow v2 fulfillment request.
pub struct WebhookRequestBuilder {
    intent: String,
    parameters: serde_json::Map<String, Value>,
    language_code: Option<String>,
    user_locale: Option<String>,
}

impl WebhookRequestBuilder {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            parameters: serde_json::Map::new(),
            language_code: None,
            user_locale: None,
        }
    }

    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.to_string(), value.into());
        self
    }

    pub fn language_code(mut self, code: &str) -> Self {
        self.language_code = Some(code.to_string());
        self
    }

    pub fn user_locale(mut self, locale: &str) -> Self {
        self.user_locale = Some(locale.to_string());
        self
    }

    pub fn build(self) -> Value {
        let mut body = json!({
            "responseId": "response-1",
            "session": "projects/etym-test/agent/sessions/session-1",
            "queryResult": {
                "queryText": "test",
                "parameters": self.parameters,
                "intent": { "displayName": self.intent },
            },
        });
        if let Some(code) = self.language_code {
            body["queryResult"]["languageCode"] = json!(code);
        }
        if let Some(locale) = self.user_locale {
            body["originalDetectIntentRequest"] = json!({
                "source": "google",
                "payload": { "user": { "locale": locale } },
            });
        }
        body
    }
}
