// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate retrieval: which documents might match this query?
//!
//! Three strategies, unioned per query word:
//!
//! 1. **Exact** - O(1) posting lookup.
//! 2. **Prefix** - scan the vocabulary for indexed words starting with the
//!    query word (skipping the identical word, already covered by exact).
//! 3. **Fuzzy** - scan the vocabulary for indexed words within one edit,
//!    only for query words of three or more characters.
//!
//! The contract is one-sided: the returned set is a superset of every
//! document that could score above zero. False positives are fine - the
//! scorer discards them - false negatives are not.
//!
//! Both scans are linear in vocabulary size. That is the intended behavior
//! for the corpus sizes this engine serves; a sorted vocabulary or trie is
//! the upgrade path if that ever stops being true.

use crate::fuzzy::{within_one_edit, MIN_FUZZY_WORD_LEN};
use crate::index::{Index, MIN_INDEXED_WORD_LEN};
use log::trace;
use std::collections::BTreeSet;

/// Collect the union of exact, prefix, and fuzzy matches for all query
/// words.
pub(crate) fn find_candidates(
    index: &Index,
    query_words: &[String],
    fuzzy_enabled: bool,
) -> BTreeSet<usize> {
    let mut candidates = BTreeSet::new();

    for word in query_words {
        if let Some(ids) = index.posting(word) {
            candidates.extend(ids.iter().copied());
        }

        let word_len = word.chars().count();
        let try_prefix = word_len >= MIN_INDEXED_WORD_LEN;
        let try_fuzzy = fuzzy_enabled && word_len >= MIN_FUZZY_WORD_LEN;
        if !try_prefix && !try_fuzzy {
            continue;
        }

        // One vocabulary pass covers both scans.
        for (indexed, ids) in index.vocabulary() {
            let prefix_hit = try_prefix && indexed != word && indexed.starts_with(word.as_str());
            let fuzzy_hit = !prefix_hit && try_fuzzy && within_one_edit(word, indexed);
            if prefix_hit || fuzzy_hit {
                candidates.extend(ids.iter().copied());
            }
        }
    }

    trace!(
        "{} candidate documents for {} query words",
        candidates.len(),
        query_words.len()
    );
    candidates
}
