//! Dialogflow v2 fulfillment wire types.
//!
//! Only the request fields this webhook reads are modelled; everything else
//! in the request is ignored. Responses use the Actions on Google rich
//! response payload so cards and suggestion chips render on screens.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(default)]
    pub session: String,
    #[serde(default)]
    pub query_result: QueryResult,
    #[serde(default)]
    pub original_detect_intent_request: Option<OriginalRequest>,
}

impl WebhookRequest {
    /// Locale from the device, then the query language, lowercased.
    pub fn locale(&self) -> Option<String> {
        self.original_detect_intent_request
            .as_ref()
            .and_then(|original| original.payload.as_ref())
            .and_then(|payload| payload.user.as_ref())
            .and_then(|user| user.locale.clone())
            .or_else(|| self.query_result.language_code.clone())
            .filter(|locale| !locale.is_empty())
            .map(|locale| locale.to_lowercase())
    }

    pub fn intent(&self) -> &str {
        &self.query_result.intent.display_name
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub query_text: String,
    #[serde(default)]
    pub parameters: Parameters,
    #[serde(default)]
    pub intent: Intent,
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    #[serde(default)]
    pub display_name: String,
}

/// Slot values filled by the agent. Unfilled slots arrive as `""`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameters {
    #[serde(default, deserialize_with = "lenient_string")]
    pub phrase: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub article: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub word: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub meaning: String,
    #[serde(default, deserialize_with = "truthy")]
    pub random: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OriginalRequest {
    #[serde(default)]
    pub payload: Option<OriginalPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OriginalPayload {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    #[serde(default)]
    pub locale: Option<String>,
}

/// Strings as-is, numbers stringified, anything else empty.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Script-style truthiness: `""`, `0`, `false` and `null` are false.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    })
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_text: String,
    pub payload: ResponsePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub google: GooglePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayload {
    pub expect_user_response: bool,
    pub rich_response: RichResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichResponse {
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Item {
    SimpleResponse(SimpleResponse),
    BasicCard(BasicCard),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResponse {
    pub text_to_speech: String,
    pub display_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicCard {
    pub title: String,
    pub formatted_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
}

impl WebhookResponse {
    fn new(expect_user_response: bool, text: impl Into<String>) -> Self {
        Self {
            fulfillment_text: text.into(),
            payload: ResponsePayload {
                google: GooglePayload {
                    expect_user_response,
                    rich_response: RichResponse::default(),
                },
            },
        }
    }

    /// Keep the conversation open.
    pub fn ask(text: impl Into<String>) -> Self {
        Self::new(true, text)
    }

    /// End the conversation.
    pub fn close(text: impl Into<String>) -> Self {
        Self::new(false, text)
    }

    pub fn say(mut self, display_text: impl Into<String>, speech: impl Into<String>) -> Self {
        self.payload
            .google
            .rich_response
            .items
            .push(Item::SimpleResponse(SimpleResponse {
                text_to_speech: speech.into(),
                display_text: display_text.into(),
            }));
        self
    }

    pub fn card(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.payload
            .google
            .rich_response
            .items
            .push(Item::BasicCard(BasicCard {
                title: title.into(),
                formatted_text: text.into(),
            }));
        self
    }

    pub fn suggestions<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.payload.google.rich_response.suggestions = titles
            .into_iter()
            .map(|title| Suggestion {
                title: title.into(),
            })
            .collect();
        self
    }

    pub fn expects_user_response(&self) -> bool {
        self.payload.google.expect_user_response
    }
}
