//! In-memory ranked and boolean full-text search.
//!
//! This crate is the search subsystem of a larger application: it consumes
//! a borrowed collection of opaque documents, builds an inverted index plus
//! a per-document summary table, and answers queries through a single
//! facade. Free-text queries are ranked by a deterministic heuristic;
//! queries with boolean syntax (`"phrases"`, `+required`, `-excluded`,
//! `AND`/`OR`/`NOT`) go through set algebra instead.
//!
//! # Architecture
//!
//! ```text
//! documents ──▶ index.rs ──▶ (inverted index, summary table)
//!                                 │
//!            free text            │           boolean
//!   candidates.rs ◀───────────────┴───────────────▶ boolean/eval.rs
//!        │                                               │
//!    score.rs                                      (set algebra)
//!        │                                               │
//!        └──────────────▶ engine.rs ◀────────────────────┘
//!                    (rank, highlight.rs, cache)
//! ```
//!
//! Data flows one way: the engine never mutates documents and never stores
//! their text - searchable text is recomputed on demand through the
//! [`Searchable`] trait.
//!
//! # Usage
//!
//! ```
//! use riddle::{SearchEngine, SearchOptions};
//! use serde_json::json;
//!
//! let docs = vec![
//!     json!({ "title": "Sourdough basics", "text": "flour water salt time" }),
//!     json!({ "title": "Quick breads", "text": "no yeast required" }),
//! ];
//! let mut engine = SearchEngine::new(&docs)?;
//!
//! let response = engine.search("sourdough", &SearchOptions::default());
//! assert_eq!(response.results[0].doc_id, 0);
//! # Ok::<(), riddle::EngineError>(())
//! ```

// Module declarations
mod boolean;
mod candidates;
mod document;
mod engine;
mod error;
mod fuzzy;
mod highlight;
mod index;
mod score;
mod tokenize;
mod types;

// Re-exports for public API
pub use boolean::{is_boolean_query, parse_boolean_query, BoolOp, BoolToken};
pub use document::{
    ExtractError, Searchable, MAX_EXTRA_FIELD_LEN, PRIMARY_FIELD, SECONDARY_FIELDS,
};
pub use engine::{SearchEngine, MIN_QUERY_LEN};
pub use error::EngineError;
pub use fuzzy::{within_one_edit, MIN_FUZZY_WORD_LEN};
pub use highlight::{highlight, MARK_CLOSE, MARK_OPEN};
pub use index::{MIN_INDEXED_WORD_LEN, PREVIEW_WORDS};
pub use score::{
    score_document, RelevanceScore, EXACT_WORD_SCORE, FUZZY_WORD_SCORE, LONG_DOC_FACTOR,
    LONG_DOC_WORD_COUNT, MAX_POSITION_BONUS, MIN_VERBATIM_QUERY_LEN, MULTI_WORD_BONUS,
    POSITION_DECAY_CHARS, PREFIX_WORD_SCORE, PREVIEW_BONUS, SUBSTRING_SCORE,
    VERBATIM_QUERY_BONUS,
};
pub use tokenize::{is_token_char, is_word_char, normalize, query_words, tokens};
pub use types::{DocSummary, EngineStats, SearchHit, SearchOptions, SearchResponse};
