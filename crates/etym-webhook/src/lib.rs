//! etym webhook: Dialogflow fulfillment over axum.
//!
//! # Routes
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | `POST` | `/`, `/webhook` | Dialogflow v2 fulfillment |
//! | `GET` | `/healthz` | Liveness probe |
//!
//! Every request is independent: the only shared state is the dictionary
//! client and the read-only webhook config.

pub mod dialogflow;
pub mod handler;
pub mod speech;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use etym_core::config::WebhookConfig;
use etym_core::Dictionary;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use dialogflow::{WebhookRequest, WebhookResponse};
pub use handler::{fulfill, WebhookState};

/// Build the router over `dictionary`.
pub fn router(dictionary: Arc<dyn Dictionary>, config: WebhookConfig) -> Router {
    let state = Arc::new(WebhookState::new(dictionary, config));
    Router::new()
        .route("/", post(webhook))
        .route("/webhook", post(webhook))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Bind `listen` and serve until the process is stopped.
pub async fn serve(
    listen: &str,
    dictionary: Arc<dyn Dictionary>,
    config: WebhookConfig,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen).await?;
    tracing::info!(addr = %listener.local_addr()?, "webhook listening");
    axum::serve(listener, router(dictionary, config)).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn webhook(
    State(state): State<Arc<WebhookState>>,
    Json(request): Json<WebhookRequest>,
) -> Json<WebhookResponse> {
    Json(fulfill(&state, request).await)
}

async fn healthz() -> &'static str {
    "ok"
}
