//! Oxford Dictionaries API v2 client.
//!
//! Two calls are used:
//! - `GET {base}/search/{locale}?q={query}&limit={n}`: headword search
//! - `GET {base}/entries/{locale}/{id}`: lexical entries for a headword
//!
//! Both send the `app_id` / `app_key` credential headers. The base URL is
//! configurable so tests can point the client at a local fake server.

use async_trait::async_trait;
use etym_core::config::DictionaryConfig;
use etym_core::{Dictionary, Headword, LookupError, Node};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::wire::{EntriesResponse, SearchResponse};

fn transport(err: reqwest::Error) -> LookupError {
    LookupError::Transport(Box::new(err))
}

/// HTTP client for the dictionary API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct OxfordClient {
    http: Client,
    base_url: Url,
    app_id: String,
    app_key: String,
    search_limit: u32,
}

impl OxfordClient {
    pub fn new(config: &DictionaryConfig) -> Result<Self, LookupError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|err| LookupError::Endpoint(format!("{}: {err}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::Endpoint(config.base_url.clone()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(transport)?;

        Ok(Self {
            http,
            base_url,
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            search_limit: config.search_limit,
        })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| LookupError::Endpoint(self.base_url.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn request(&self, url: Url) -> RequestBuilder {
        self.http
            .get(url)
            .header("Accept", "application/json")
            .header("app_id", self.app_id.as_str())
            .header("app_key", self.app_key.as_str())
    }

    /// Send, check the status, and parse the body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: String,
    ) -> Result<T, LookupError> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        tracing::debug!(%path, status = status.as_u16(), "dictionary response");

        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                path,
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl Dictionary for OxfordClient {
    async fn search_headword(&self, query: &str, locale: &str) -> Result<Headword, LookupError> {
        let url = self.endpoint(&["search", locale])?;
        let path = url.path().to_string();
        let limit = self.search_limit.to_string();
        let request = self
            .request(url)
            .query(&[("q", query), ("limit", limit.as_str())]);

        let response: SearchResponse = self.fetch(request, path).await?;
        response
            .results
            .into_iter()
            .next()
            .map(|result| {
                let word = result.word.unwrap_or_else(|| result.id.clone());
                Headword::new(word, result.id)
            })
            .ok_or_else(|| LookupError::NoResults(query.to_string()))
    }

    async fn get_entries(&self, id: &str, locale: &str) -> Result<Node, LookupError> {
        let url = self.endpoint(&["entries", locale, id])?;
        let path = url.path().to_string();

        let response: EntriesResponse = self.fetch(self.request(url), path).await?;
        let lexical_entries = response
            .results
            .into_iter()
            .next()
            .map(|result| result.lexical_entries)
            .filter(|entries| !entries.is_null())
            .ok_or_else(|| LookupError::NoResults(id.to_string()))?;

        Ok(Node::from(lexical_entries))
    }
}
