//! etym-lookup: dictionary service adapters for etym.
//!
//! [`OxfordClient`] implements [`etym_core::Dictionary`] against the Oxford
//! Dictionaries API v2. Every failure is mapped into
//! [`etym_core::LookupError`] so the cascade can decide whether to move on.

pub mod oxford;
pub mod wire;

pub use oxford::OxfordClient;
