// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Public result and option types.
//!
//! Everything the host application sees comes through here. Field names
//! serialize in camelCase because the consuming presentation layer speaks
//! that dialect.
//!
//! # Invariants
//!
//! - `SearchHit.doc_id` always indexes into the collection the engine was
//!   built over; ids are dense `0..N-1` positions, never reused across
//!   rebuilds without a full rebuild.
//! - `SearchHit.score` is never 0 - a zero-scoring document is excluded
//!   from results instead.
//! - `SearchResponse.total_matches` counts the uncapped match set even when
//!   `max_results` truncates `results`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-query knobs for [`SearchEngine::search`](crate::SearchEngine::search).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Cap on the number of returned results. `None` returns everything;
    /// `total_matches` always reports the uncapped count.
    pub max_results: Option<usize>,
    /// Include approximate (edit distance 1) word matches in candidate
    /// retrieval. On by default.
    pub fuzzy: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: None,
            fuzzy: true,
        }
    }
}

/// One ranked match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Position of the document in the indexed collection.
    pub doc_id: usize,
    /// Heuristic relevance score (free-text path) or descending rank score
    /// (boolean path). Higher is better; relative order is the contract,
    /// absolute values are not.
    pub score: u32,
    /// 1-based rank within this response.
    pub rank: usize,
    /// The document's display text with query words wrapped in
    /// `<mark>…</mark>`.
    pub highlighted_text: String,
    /// Number of distinct query words that matched this document.
    pub match_count: usize,
}

/// The complete answer to one `search` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    /// The query string as received.
    pub query: String,
    /// Size of the uncapped match set.
    pub total_matches: usize,
    /// Wall-clock time spent answering this call.
    pub search_time: Duration,
    /// True when the response was served from the one-slot query cache.
    pub cached: bool,
    /// Present when the engine could not run the query (e.g. index not
    /// ready). Recoverable conditions are reported here, never panicked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// An empty response carrying just the query and an optional error.
    pub(crate) fn empty(query: &str, error: Option<String>) -> Self {
        Self {
            results: Vec::new(),
            query: query.to_string(),
            total_matches: 0,
            search_time: Duration::ZERO,
            cached: false,
            error,
        }
    }
}

/// Engine-level counters for host-app display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EngineStats {
    pub total_documents: usize,
    /// Unique words in the inverted index.
    pub indexed_words: usize,
    /// False until a non-empty collection has been indexed.
    pub ready: bool,
}

/// Per-document digest created at build time, immutable until the next
/// rebuild.
///
/// The summary exists so the scorer can apply its preview and length
/// heuristics without re-tokenizing the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocSummary {
    /// Token count of the normalized text.
    pub word_count: usize,
    /// First five normalized words, joined by spaces.
    pub preview: String,
    /// Byte length of the normalized text.
    pub text_len: usize,
}
