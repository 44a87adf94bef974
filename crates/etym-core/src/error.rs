//! Lookup failures.
//!
//! None of these are fatal. The cascade splits them into "no data" (expected,
//! logged at debug) and everything else (logged at warn); both just move on
//! to the next root candidate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    /// The dictionary answered but had nothing for this query.
    #[error("no dictionary results for {0:?}")]
    NoResults(String),

    /// Entries came back but none carried an etymology.
    #[error("no etymology in entries for {0:?}")]
    NoEtymology(String),

    #[error("dictionary returned HTTP {status} for {path}")]
    Status { status: u16, path: String },

    #[error("dictionary request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("malformed dictionary response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid dictionary endpoint: {0}")]
    Endpoint(String),
}

impl LookupError {
    /// True for the expected "nothing here" outcomes.
    pub fn is_no_data(&self) -> bool {
        matches!(
            self,
            LookupError::NoResults(_)
                | LookupError::NoEtymology(_)
                | LookupError::Status { status: 404, .. }
        )
    }
}
