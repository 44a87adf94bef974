//! Shared test utilities for etym integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Nothing here touches the network beyond 127.0.0.1.

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod memory_dictionary;

pub use assertions::*;
pub use builders::*;
pub use fake_dictionary_api::*;
pub use fixtures::*;
pub use memory_dictionary::*;
