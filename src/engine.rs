// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The public entry point: [`SearchEngine`].
//!
//! The engine borrows the caller's documents for the lifetime of the index
//! and owns two things of its own: the index structures and a one-slot
//! query cache. `search` dispatches to the boolean path when the query
//! carries boolean syntax and to the free-text ranking path otherwise.
//!
//! Rebuilds are atomic: the replacement index is built off to the side and
//! installed with a plain field assignment only after it is complete, so a
//! failed rebuild leaves the previous index answering queries untouched.
//! `&mut self` on the mutating entry points is the concurrency story -
//! callers serialize access at the type level.

use crate::boolean::eval::{evaluate, rank_score};
use crate::boolean::parser::{highlight_terms, is_boolean_query, parse_boolean_query};
use crate::candidates::find_candidates;
use crate::document::Searchable;
use crate::error::EngineError;
use crate::highlight::highlight;
use crate::index::Index;
use crate::score::score_document;
use crate::tokenize::{normalize, query_words};
use crate::types::{EngineStats, SearchHit, SearchOptions, SearchResponse};
use log::debug;
use std::time::Instant;

/// Queries shorter than this (after trimming) return an empty result set.
pub const MIN_QUERY_LEN: usize = 2;

/// The one-slot query cache.
#[derive(Debug, Clone)]
struct CachedQuery {
    query: String,
    response: SearchResponse,
}

/// A scored document on its way to becoming a [`SearchHit`].
struct ScoredDoc {
    doc_id: usize,
    score: u32,
    match_count: usize,
}

/// In-memory ranked and boolean full-text search over a borrowed document
/// collection.
///
/// # Example
///
/// ```
/// use riddle::{SearchEngine, SearchOptions};
///
/// let docs = vec![
///     "the quick brown fox".to_string(),
///     "a quick fox jumps".to_string(),
/// ];
/// let mut engine = SearchEngine::new(&docs).unwrap();
/// let response = engine.search("quick fox", &SearchOptions::default());
/// assert_eq!(response.total_matches, 2);
/// ```
pub struct SearchEngine<'d, D> {
    docs: &'d [D],
    index: Option<Index>,
    cache: Option<CachedQuery>,
}

impl<'d, D: Searchable> SearchEngine<'d, D> {
    /// Build an engine over `docs`, indexing immediately.
    ///
    /// An empty collection is not an error - the engine simply reports
    /// not-ready until [`update_data`](Self::update_data) supplies one.
    pub fn new(docs: &'d [D]) -> Result<Self, EngineError> {
        let index = Self::build_index(docs)?;
        Ok(Self {
            docs,
            index,
            cache: None,
        })
    }

    /// Replace the document collection with a full rebuild.
    ///
    /// On error the previous documents, index, and cache all stay in
    /// place; on success the cache is cleared.
    pub fn update_data(&mut self, docs: &'d [D]) -> Result<(), EngineError> {
        let index = Self::build_index(docs)?;
        self.docs = docs;
        self.index = index;
        self.cache = None;
        Ok(())
    }

    fn build_index(docs: &[D]) -> Result<Option<Index>, EngineError> {
        if docs.is_empty() {
            return Ok(None);
        }
        Ok(Some(Index::build(docs)?))
    }

    /// Has a non-empty collection been indexed?
    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            total_documents: self.docs.len(),
            indexed_words: self.index.as_ref().map_or(0, Index::word_count),
            ready: self.index.is_some(),
        }
    }

    /// Answer a query.
    ///
    /// Never fails: recoverable conditions degrade to an empty response,
    /// with [`SearchResponse::error`] set when the index is not ready.
    pub fn search(&mut self, query: &str, options: &SearchOptions) -> SearchResponse {
        let started = Instant::now();

        if let Err(err) = self.precheck(query) {
            let message = match err {
                // Expected while the user is still typing; not worth a message.
                EngineError::EmptyQuery => None,
                other => Some(other.to_string()),
            };
            return SearchResponse::empty(query, message);
        }
        let Some(index) = self.index.as_ref() else {
            return SearchResponse::empty(query, Some(EngineError::NotReady.to_string()));
        };

        if let Some(cached) = self.cache.as_ref().filter(|slot| slot.query == query) {
            let mut response = cached.response.clone();
            response.cached = true;
            response.search_time = started.elapsed();
            debug!("cache hit for {:?}", query);
            return response;
        }

        let (scored, highlight_words) = if is_boolean_query(query) {
            self.boolean_results(index, query)
        } else {
            self.free_text_results(index, query, options)
        };

        let total_matches = scored.len();
        let capped: Vec<ScoredDoc> = match options.max_results {
            Some(limit) => scored.into_iter().take(limit).collect(),
            None => scored,
        };

        let results: Vec<SearchHit> = capped
            .into_iter()
            .enumerate()
            .map(|(rank0, doc)| SearchHit {
                doc_id: doc.doc_id,
                score: doc.score,
                rank: rank0 + 1,
                highlighted_text: highlight(&self.raw_text(doc.doc_id), &highlight_words),
                match_count: doc.match_count,
            })
            .collect();

        let response = SearchResponse {
            results,
            query: query.to_string(),
            total_matches,
            search_time: started.elapsed(),
            cached: false,
            error: None,
        };
        debug!(
            "query {:?}: {} matches in {:?}",
            query, total_matches, response.search_time
        );
        self.cache = Some(CachedQuery {
            query: query.to_string(),
            response: response.clone(),
        });
        response
    }

    fn precheck(&self, query: &str) -> Result<(), EngineError> {
        if query.trim().chars().count() < MIN_QUERY_LEN {
            return Err(EngineError::EmptyQuery);
        }
        if self.index.is_none() {
            return Err(EngineError::NotReady);
        }
        Ok(())
    }

    /// Free-text path: tokenize, retrieve candidates, score, sort.
    fn free_text_results(
        &self,
        index: &Index,
        query: &str,
        options: &SearchOptions,
    ) -> (Vec<ScoredDoc>, Vec<String>) {
        let words = query_words(query);
        if words.is_empty() {
            return (Vec::new(), Vec::new());
        }
        let full_query = normalize(query);

        let candidates = find_candidates(index, &words, options.fuzzy);
        let mut scored: Vec<ScoredDoc> = Vec::with_capacity(candidates.len());
        for doc_id in candidates {
            let Some(summary) = index.summary(doc_id) else {
                continue;
            };
            let text = self.normalized_text(doc_id);
            let relevance = score_document(&text, summary, &words, &full_query, options.fuzzy);
            if relevance.score > 0 {
                scored.push(ScoredDoc {
                    doc_id,
                    score: relevance.score,
                    match_count: relevance.matched_words,
                });
            }
        }

        // Descending score, ascending doc id: deterministic across calls
        // on an unchanged index.
        scored.sort_by(|a, b| b.score.cmp(&a.score).then(a.doc_id.cmp(&b.doc_id)));
        (scored, words)
    }

    /// Boolean path: parse, evaluate set algebra, assign rank scores.
    fn boolean_results(&self, index: &Index, query: &str) -> (Vec<ScoredDoc>, Vec<String>) {
        let tokens = parse_boolean_query(query);
        let matched = evaluate(&tokens, index, |doc_id| self.normalized_text(doc_id));
        let highlight_words = highlight_terms(&tokens);

        let normalized_terms: Vec<String> =
            highlight_words.iter().map(|word| normalize(word)).collect();
        let scored = matched
            .into_iter()
            .enumerate()
            .map(|(rank0, doc_id)| {
                let text = self.normalized_text(doc_id);
                let match_count = normalized_terms
                    .iter()
                    .filter(|term| !term.is_empty() && text.contains(term.as_str()))
                    .count();
                ScoredDoc {
                    doc_id,
                    score: rank_score(rank0),
                    match_count,
                }
            })
            .collect();
        (scored, highlight_words)
    }

    /// Original-case searchable text, recomputed on demand.
    fn raw_text(&self, doc_id: usize) -> String {
        self.docs
            .get(doc_id)
            .and_then(|doc| doc.searchable_text().ok())
            .unwrap_or_default()
    }

    /// Normalized searchable text, recomputed on demand. The index never
    /// stores document text, so this is the only source of it.
    fn normalized_text(&self, doc_id: usize) -> String {
        normalize(&self.raw_text(doc_id))
    }
}
