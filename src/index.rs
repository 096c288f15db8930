// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index and summary-table construction.
//!
//! One build consumes the whole document collection and produces two
//! structures that stay consistent with each other until the next build:
//! a per-document [`DocSummary`] table and a word → document-set map.
//! Presence drives retrieval - a word occurring five times in a document
//! contributes the same single posting as a word occurring once.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **DENSE_IDS**: summaries are indexed by document position; posting
//!    sets only contain ids below `doc_count`.
//! 2. **WORDS_NORMALIZED**: indexed words are non-empty, lowercase, and at
//!    least [`MIN_INDEXED_WORD_LEN`] characters.
//! 3. **ALL_OR_NOTHING**: a build either returns a complete `Index` or an
//!    error; callers must not install a partial result.

use crate::document::{ExtractError, Searchable};
use crate::tokenize::{normalize, tokens};
use crate::types::DocSummary;
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::time::Instant;

/// Words shorter than this never enter the inverted index. Query-time word
/// matching falls back to a document scan for them.
pub const MIN_INDEXED_WORD_LEN: usize = 2;

/// Number of leading words captured in each document's preview.
pub const PREVIEW_WORDS: usize = 5;

/// The searchable view of one document collection.
#[derive(Debug, Clone, Default)]
pub(crate) struct Index {
    summaries: Vec<DocSummary>,
    postings: HashMap<String, BTreeSet<usize>>,
}

/// Per-document output of the tokenization pass.
struct DocDigest {
    summary: DocSummary,
    unique_words: HashSet<String>,
}

/// Tokenize one normalized text into its summary and unique word set.
fn digest(text: &str) -> DocDigest {
    let mut word_count = 0usize;
    let mut preview_words: Vec<&str> = Vec::with_capacity(PREVIEW_WORDS);
    let mut unique_words = HashSet::new();

    for word in tokens(text) {
        word_count += 1;
        if preview_words.len() < PREVIEW_WORDS {
            preview_words.push(word);
        }
        if word.chars().count() >= MIN_INDEXED_WORD_LEN {
            unique_words.insert(word.to_string());
        }
    }

    DocDigest {
        summary: DocSummary {
            word_count,
            preview: preview_words.join(" "),
            text_len: text.len(),
        },
        unique_words,
    }
}

impl Index {
    /// Build the index for a document collection.
    ///
    /// Extraction errors abort the whole build; no partial index escapes.
    /// A document with no searchable text still receives a summary
    /// (`word_count` 0) but contributes no postings.
    pub(crate) fn build<D: Searchable>(docs: &[D]) -> Result<Self, ExtractError> {
        let started = Instant::now();

        let texts: Vec<String> = docs
            .iter()
            .map(|doc| doc.searchable_text().map(|text| normalize(&text)))
            .collect::<Result<_, _>>()?;

        let index = Self::from_texts(&texts);
        debug!(
            "indexed {} documents, {} unique words in {:?}",
            index.doc_count(),
            index.word_count(),
            started.elapsed()
        );
        Ok(index)
    }

    /// Map phase over normalized texts, then a sequential merge.
    ///
    /// With the `parallel` feature the map phase fans out per document;
    /// the merge stays sequential either way so posting sets are built
    /// identically.
    fn from_texts(texts: &[String]) -> Self {
        #[cfg(feature = "parallel")]
        let digests: Vec<DocDigest> = texts.par_iter().map(|text| digest(text)).collect();
        #[cfg(not(feature = "parallel"))]
        let digests: Vec<DocDigest> = texts.iter().map(|text| digest(text)).collect();

        let mut summaries = Vec::with_capacity(digests.len());
        let mut postings: HashMap<String, BTreeSet<usize>> = HashMap::new();

        for (doc_id, doc_digest) in digests.into_iter().enumerate() {
            summaries.push(doc_digest.summary);
            for word in doc_digest.unique_words {
                postings.entry(word).or_default().insert(doc_id);
            }
        }

        Self {
            summaries,
            postings,
        }
    }

    /// Posting set for an exact word, if indexed.
    pub(crate) fn posting(&self, word: &str) -> Option<&BTreeSet<usize>> {
        self.postings.get(word)
    }

    /// All indexed words with their posting sets, in no particular order.
    pub(crate) fn vocabulary(&self) -> impl Iterator<Item = (&str, &BTreeSet<usize>)> {
        self.postings
            .iter()
            .map(|(word, ids)| (word.as_str(), ids))
    }

    /// Summary for a document id.
    pub(crate) fn summary(&self, doc_id: usize) -> Option<&DocSummary> {
        self.summaries.get(doc_id)
    }

    pub(crate) fn doc_count(&self) -> usize {
        self.summaries.len()
    }

    /// Number of unique indexed words.
    pub(crate) fn word_count(&self) -> usize {
        self.postings.len()
    }

    /// Well-formedness check used by tests: invariants 1 and 2 above.
    #[cfg(test)]
    pub(crate) fn is_well_formed(&self) -> bool {
        self.postings.iter().all(|(word, ids)| {
            !word.is_empty()
                && word.chars().count() >= MIN_INDEXED_WORD_LEN
                && *word == word.to_lowercase()
                && !ids.is_empty()
                && ids.iter().all(|id| *id < self.summaries.len())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(texts: &[&str]) -> Index {
        let docs: Vec<String> = texts.iter().map(|t| (*t).to_string()).collect();
        Index::build(&docs).unwrap()
    }

    #[test]
    fn test_build_simple() {
        let index = build(&["hello world", "world peace"]);

        assert_eq!(index.doc_count(), 2);
        assert_eq!(
            index.posting("hello").unwrap().iter().copied().collect::<Vec<_>>(),
            vec![0]
        );
        assert_eq!(
            index.posting("world").unwrap().iter().copied().collect::<Vec<_>>(),
            vec![0, 1]
        );
        assert!(index.is_well_formed());
    }

    #[test]
    fn test_duplicate_occurrences_index_once() {
        let index = build(&["echo echo echo"]);
        assert_eq!(index.posting("echo").unwrap().len(), 1);
        assert_eq!(index.summary(0).unwrap().word_count, 3);
    }

    #[test]
    fn test_short_words_not_indexed() {
        let index = build(&["a big cat"]);
        assert!(index.posting("a").is_none());
        assert!(index.posting("big").is_some());
        // The short word still counts toward the summary.
        assert_eq!(index.summary(0).unwrap().word_count, 3);
    }

    #[test]
    fn test_empty_document_gets_summary_no_postings() {
        let index = build(&["", "actual words"]);
        let summary = index.summary(0).unwrap();
        assert_eq!(summary.word_count, 0);
        assert_eq!(summary.preview, "");
        assert_eq!(index.posting("actual").unwrap().len(), 1);
    }

    #[test]
    fn test_preview_is_first_five_words() {
        let index = build(&["one two three four five six seven"]);
        assert_eq!(index.summary(0).unwrap().preview, "one two three four five");
    }

    #[test]
    fn test_words_are_lowercased() {
        let index = build(&["Hello WORLD"]);
        assert!(index.posting("hello").is_some());
        assert!(index.posting("Hello").is_none());
    }

    #[test]
    fn test_extraction_failure_aborts_build() {
        use crate::document::{ExtractError, Searchable};

        struct Broken;
        impl Searchable for Broken {
            fn searchable_text(&self) -> Result<String, ExtractError> {
                Err(ExtractError("no text".into()))
            }
        }

        assert!(Index::build(&[Broken]).is_err());
    }
}
