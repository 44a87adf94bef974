//! Domain-specific assertion macros for etym harnesses.
//!
//! These add context to failures so it is clear which lookup outcome was
//! expected and what came back instead.

// ---------------------------------------------------------------------------
// Lookup outcomes
// ---------------------------------------------------------------------------

/// Assert that a `Lookup` found `etymology` via `root`.
///
/// ```rust
/// assert_found!(lookup, root = "run", etymology = RUN_NOUN);
/// ```
#[macro_export]
macro_rules! assert_found {
    ($lookup:expr, root = $root:expr, etymology = $etym:expr) => {{
        match &$lookup {
            etym_core::Lookup::Found { root, etymology, .. } => {
                pretty_assertions::assert_eq!(root.as_str(), $root, "assert_found! root");
                pretty_assertions::assert_eq!(etymology.as_str(), $etym, "assert_found! etymology");
            }
            other => panic!("assert_found! failed: expected Found, got {:?}", other),
        }
    }};
}

/// Assert that a `Lookup` exhausted exactly the listed candidates.
#[macro_export]
macro_rules! assert_exhausted {
    ($lookup:expr, tried = [$($candidate:expr),* $(,)?]) => {{
        match &$lookup {
            etym_core::Lookup::Exhausted { tried, .. } => {
                let expected: Vec<&str> = vec![$($candidate),*];
                let actual: Vec<&str> = tried.iter().map(String::as_str).collect();
                pretty_assertions::assert_eq!(actual, expected, "assert_exhausted! tried");
            }
            other => panic!("assert_exhausted! failed: expected Exhausted, got {:?}", other),
        }
    }};
}

/// Assert that a `Lookup` never resolved a headword.
#[macro_export]
macro_rules! assert_unresolved {
    ($lookup:expr) => {{
        match &$lookup {
            etym_core::Lookup::Unresolved { .. } => {}
            other => panic!("assert_unresolved! failed: expected Unresolved, got {:?}", other),
        }
    }};
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Assert that `ranked` keeps only items of `original`, in an order where
/// every element also appears in the source sequence.
#[macro_export]
macro_rules! assert_subset_of {
    ($ranked:expr, $original:expr) => {{
        let ranked: &[serde_json::Value] = &$ranked;
        let original: &[serde_json::Value] = &$original;
        for item in ranked {
            if !original.contains(item) {
                panic!(
                    "assert_subset_of! failed: {} is not in the source sequence {:?}",
                    item, original
                );
            }
        }
    }};
}
