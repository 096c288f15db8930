// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The heuristic behind free-text ranking.
//!
//! Every occurrence of every query word is classified by the characters
//! flanking it - one scan per word, no regex:
//!
//! - boundary on both sides → whole-word hit, the strongest signal
//! - boundary before only → the query word is a prefix of a longer word
//! - anything else → bare substring, the weakest signal
//!
//! Document-level bonuses (multi-word coverage, verbatim query, preview
//! hit, early first match) stack on top, and long documents take a small
//! haircut so concise matches surface first. The absolute numbers are
//! tuned, not derived; the ordering they induce is the contract.

use crate::fuzzy::{within_one_edit, MIN_FUZZY_WORD_LEN};
use crate::tokenize::{is_word_char, tokens};
use crate::types::DocSummary;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================
// Relative order matters more than the values: a whole-word hit must beat a
// prefix hit must beat a substring hit, and the per-occurrence scores must
// stay comparable to the document-level bonuses.

/// Per occurrence with a word boundary on both sides.
pub const EXACT_WORD_SCORE: u32 = 30;

/// Per occurrence with a boundary before but not after.
pub const PREFIX_WORD_SCORE: u32 = 20;

/// Per occurrence with no boundary on either side.
pub const SUBSTRING_SCORE: u32 = 15;

/// Per query word with no literal occurrence but a word within one edit
/// in the document. The weakest signal of all - a candidate that only got
/// here through the fuzzy scan would otherwise always score 0 and vanish.
pub const FUZZY_WORD_SCORE: u32 = 10;

/// Per distinct matched word, when the query has several words and more
/// than one of them matched.
pub const MULTI_WORD_BONUS: u32 = 10;

/// The full query string appears verbatim in the document.
pub const VERBATIM_QUERY_BONUS: u32 = 50;

/// Queries at or below this length skip the verbatim bonus.
pub const MIN_VERBATIM_QUERY_LEN: usize = 3;

/// The document's first-words preview contains the first query word.
pub const PREVIEW_BONUS: u32 = 30;

/// Ceiling of the first-match position bonus.
pub const MAX_POSITION_BONUS: u32 = 25;

/// The position bonus decays by one point per this many characters.
pub const POSITION_DECAY_CHARS: usize = 20;

/// Documents with more words than this take the length haircut.
pub const LONG_DOC_WORD_COUNT: usize = 100;

/// Haircut factor for long documents.
pub const LONG_DOC_FACTOR: f64 = 0.9;

/// What the scorer reports per candidate document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelevanceScore {
    /// Total heuristic score; 0 means "not actually a match, discard".
    pub score: u32,
    /// Distinct query words with at least one occurrence.
    pub matched_words: usize,
}

/// Is there a word boundary immediately before byte `pos` in `text`?
#[inline]
fn boundary_before(text: &str, pos: usize) -> bool {
    text[..pos].chars().next_back().is_none_or(|c| !is_word_char(c))
}

/// Is there a word boundary immediately after byte `pos` in `text`?
#[inline]
fn boundary_after(text: &str, pos: usize) -> bool {
    text[pos..].chars().next().is_none_or(|c| !is_word_char(c))
}

/// Score one candidate document against the query.
///
/// `text` is the document's normalized text, `full_query` the normalized
/// query string; both sides must have been through the same
/// [`normalize`](crate::normalize) so occurrences line up. With
/// `fuzzy_enabled`, a query word absent from the text can still earn the
/// (lowest) fuzzy score when the document contains a word within one edit
/// of it - otherwise fuzzy-retrieved candidates could never surface.
pub fn score_document(
    text: &str,
    summary: &DocSummary,
    query_words: &[String],
    full_query: &str,
    fuzzy_enabled: bool,
) -> RelevanceScore {
    let mut total: u32 = 0;
    let mut matched_words = 0usize;
    let mut first_match: Option<usize> = None;

    for (word_index, word) in query_words.iter().enumerate() {
        let mut occurrences = 0usize;
        for (pos, found) in text.match_indices(word.as_str()) {
            occurrences += 1;
            let before = boundary_before(text, pos);
            let after = boundary_after(text, pos + found.len());
            total += match (before, after) {
                (true, true) => EXACT_WORD_SCORE,
                (true, false) => PREFIX_WORD_SCORE,
                _ => SUBSTRING_SCORE,
            };
            if word_index == 0 && first_match.is_none() {
                first_match = Some(pos);
            }
        }
        if occurrences == 0
            && fuzzy_enabled
            && word.chars().count() >= MIN_FUZZY_WORD_LEN
            && tokens(text).any(|doc_word| within_one_edit(word, doc_word))
        {
            total += FUZZY_WORD_SCORE;
            occurrences = 1;
        }
        if occurrences > 0 {
            matched_words += 1;
        }
    }

    if query_words.len() > 1 && matched_words > 1 {
        total += MULTI_WORD_BONUS * matched_words as u32;
    }

    if full_query.chars().count() > MIN_VERBATIM_QUERY_LEN && text.contains(full_query) {
        total += VERBATIM_QUERY_BONUS;
    }

    if let Some(first_word) = query_words.first() {
        if summary.preview.contains(first_word.as_str()) {
            total += PREVIEW_BONUS;
        }
    }

    if let Some(pos) = first_match {
        total += MAX_POSITION_BONUS.saturating_sub((pos / POSITION_DECAY_CHARS) as u32);
    }

    if summary.word_count > LONG_DOC_WORD_COUNT {
        total = (f64::from(total) * LONG_DOC_FACTOR).round() as u32;
    }

    RelevanceScore {
        score: total,
        matched_words,
    }
}

/// Does `text` contain `word` as a whole word (boundary on both sides)?
///
/// The boolean evaluator uses this as its fallback when a word is absent
/// from the inverted index - never a bare substring test, which would
/// accept "mold" inside "moldy".
pub fn contains_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    text.match_indices(word).any(|(pos, found)| {
        boundary_before(text, pos) && boundary_after(text, pos + found.len())
    })
}
