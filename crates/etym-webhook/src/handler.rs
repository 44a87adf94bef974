//! Intent routing and reply wording.

use etym_core::config::WebhookConfig;
use etym_core::words::random_word;
use etym_core::{lookup_etymology, Dictionary, EtymologyRequest, Lookup};
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;

use crate::dialogflow::{WebhookRequest, WebhookResponse};
use crate::speech::speech_enhancer;

pub const WELCOME_INTENT: &str = "Default Welcome Intent";
pub const RANDOM_ETYMOLOGY_INTENT: &str = "get_random_etymology";
pub const ETYMOLOGY_INTENTS: &[&str] = &[
    "get_etymology",
    "Default Welcome Intent - get_etymology",
    RANDOM_ETYMOLOGY_INTENT,
];

const GREETINGS: &[&str] = &[
    "Greetings. What word would you like to hear the origin of?",
    "Hello, what word would you like to hear the origin of?",
    "Hi, what word or phrase would you like to hear the origin of?",
];

const FOUND_INTROS: &[&str] = &[
    "Here you go!",
    "Coming right up!",
    "This is what I found",
    "Here's what I found",
];

const RANDOM_SUGGESTION: &str = "🎲 Random";

/// Shared, read-only state for every webhook call.
pub struct WebhookState {
    pub dictionary: Arc<dyn Dictionary>,
    pub config: WebhookConfig,
}

impl WebhookState {
    pub fn new(dictionary: Arc<dyn Dictionary>, config: WebhookConfig) -> Self {
        Self { dictionary, config }
    }
}

fn pick(options: &[&'static str]) -> &'static str {
    options
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

fn pick_word() -> &'static str {
    random_word(&mut rand::thread_rng())
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Turn a fulfillment request into the core lookup request.
pub fn etymology_request(request: &WebhookRequest, default_locale: &str) -> EtymologyRequest {
    let params = &request.query_result.parameters;
    EtymologyRequest {
        phrase: params.phrase.clone(),
        article: non_empty(&params.article),
        word: non_empty(&params.word),
        meaning: non_empty(&params.meaning),
        random: params.random || request.intent() == RANDOM_ETYMOLOGY_INTENT,
        locale: request
            .locale()
            .unwrap_or_else(|| default_locale.to_lowercase()),
    }
}

/// Route one request by intent name.
pub async fn fulfill(state: &WebhookState, request: WebhookRequest) -> WebhookResponse {
    let intent = request.intent();
    tracing::debug!(%intent, session = %request.session, "fulfillment request");

    if intent == WELCOME_INTENT {
        welcome()
    } else if ETYMOLOGY_INTENTS.iter().any(|name| *name == intent) {
        etymology(state, &request).await
    } else {
        tracing::info!(%intent, "unhandled intent");
        WebhookResponse::close("Sorry, I can only tell you where words come from.")
    }
}

fn welcome() -> WebhookResponse {
    let greeting = pick(GREETINGS);
    WebhookResponse::ask(greeting)
        .say(greeting, greeting)
        .suggestions([RANDOM_SUGGESTION, pick_word(), pick_word()])
}

async fn etymology(state: &WebhookState, request: &WebhookRequest) -> WebhookResponse {
    let lookup_request = etymology_request(request, &state.config.default_locale);
    let limit = Duration::from_secs(state.config.cascade_timeout_secs);

    let lookup =
        match tokio::time::timeout(limit, lookup_etymology(state.dictionary.as_ref(), &lookup_request))
            .await
        {
            Ok(lookup) => lookup,
            Err(_) => {
                tracing::warn!(phrase = %lookup_request.phrase, ?limit, "lookup timed out");
                Lookup::Unresolved {
                    phrase: lookup_request.phrase.clone(),
                }
            }
        };

    reply(lookup)
}

/// Render a lookup outcome.
pub fn reply(lookup: Lookup) -> WebhookResponse {
    match lookup {
        Lookup::Found {
            headword,
            root,
            etymology,
        } => {
            tracing::info!(word = %headword.word, %root, "etymology found");
            let intro = pick(FOUND_INTROS);
            WebhookResponse::close(format!("{}. {etymology}.", headword.word))
                .say(intro, speech_enhancer(&format!("{}. {etymology}.", headword.word)))
                .card(&headword.word, format!("{etymology}."))
        }
        Lookup::Exhausted { headword, tried } => {
            tracing::info!(word = %headword.word, ?tried, "no etymology for any root");
            let text = format!("No entries found for {}.", headword.word);
            WebhookResponse::close(&text).say(&text, &text)
        }
        Lookup::Unresolved { phrase } => {
            let text = format!("No results found for {phrase}.");
            WebhookResponse::close(&text).say(&text, &text)
        }
    }
}
