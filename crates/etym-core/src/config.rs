//! Configuration types for etym.
//!
//! [`Config::load`] layers the built-in defaults, an optional TOML file and
//! `ETYM_*` environment variables (`__` separates sections, e.g.
//! `ETYM_DICTIONARY__APP_KEY`). [`Config::defaults`] returns the built-in
//! values without touching the filesystem or environment (useful in tests).

use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
listen = "127.0.0.1:8080"

[dictionary]
base_url     = "https://od-api.oxforddictionaries.com/api/v2"
app_id       = ""
app_key      = ""
timeout_secs = 10
search_limit = 5

[webhook]
default_locale       = "en-us"
cascade_timeout_secs = 20
"#;

const ENV_PREFIX: &str = "ETYM";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
}

fn default_listen() -> String { "127.0.0.1:8080".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

/// `[dictionary]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub app_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Number of search results requested; only the first is used.
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,
}

fn default_base_url() -> String { "https://od-api.oxforddictionaries.com/api/v2".to_string() }
fn default_timeout_secs() -> u64 { 10 }
fn default_search_limit() -> u32 { 5 }

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_id: String::new(),
            app_key: String::new(),
            timeout_secs: default_timeout_secs(),
            search_limit: default_search_limit(),
        }
    }
}

/// `[webhook]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Used when the request carries no locale.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Upper bound on one whole lookup, search plus every candidate.
    #[serde(default = "default_cascade_timeout_secs")]
    pub cascade_timeout_secs: u64,
}

fn default_locale() -> String { "en-us".to_string() }
fn default_cascade_timeout_secs() -> u64 { 20 }

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            cascade_timeout_secs: default_cascade_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the defaults, then `path` if given, then the environment.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
