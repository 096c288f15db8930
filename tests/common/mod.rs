//! Shared test utilities and fixtures.

#![allow(dead_code)]

use riddle::{SearchOptions, SearchResponse};
use serde_json::json;

/// The canonical three-document scenario corpus.
pub fn scenario_docs() -> Vec<serde_json::Value> {
    vec![
        json!({ "text": "the quick brown fox" }),
        json!({ "text": "a quick fox jumps" }),
        json!({ "text": "totally unrelated text" }),
    ]
}

/// A small library corpus with distinct fields, for field-priority and
/// boolean tests. Word choice avoids prefix/fuzzy collisions between the
/// terms the tests query for.
pub fn library_docs() -> Vec<serde_json::Value> {
    vec![
        json!({
            "title": "Feline care",
            "text": "every cat enjoys a warm windowsill",
        }),
        json!({
            "title": "Canine care",
            "text": "every dog enjoys a long walk",
        }),
        json!({
            "title": "Mixed household",
            "text": "a cat and a dog can share a home",
        }),
        json!({
            "title": "Aquarium notes",
            "text": "fish require neither walks nor windowsills",
        }),
    ]
}

/// Search options with fuzzy matching off, for exact set comparisons.
pub fn exact_options() -> SearchOptions {
    SearchOptions {
        max_results: None,
        fuzzy: false,
    }
}

/// Document ids of a response, in result order.
pub fn result_ids(response: &SearchResponse) -> Vec<usize> {
    response.results.iter().map(|hit| hit.doc_id).collect()
}

/// Document ids of a response as a sorted set.
pub fn result_id_set(response: &SearchResponse) -> Vec<usize> {
    let mut ids = result_ids(response);
    ids.sort_unstable();
    ids
}
