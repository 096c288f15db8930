// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Set algebra over the token stream.
//!
//! A small state machine: the result starts as the universal document set
//! with AND as the pending operation. Operator tokens change the pending
//! operation; every other token produces a matching set and combines it.
//! The first non-excluded token seeds the result directly instead of
//! intersecting against the universe, and `-excluded` tokens subtract no
//! matter what the pending operation is.
//!
//! Term matching goes through the inverted index where possible and falls
//! back to a whole-word document scan for words the index does not carry
//! (too short, or never indexed). A bare substring test is never used for
//! terms - that would accept "mold" inside "moldy".

use crate::boolean::parser::{BoolOp, BoolToken};
use crate::index::Index;
use crate::score::contains_word;
use crate::tokenize::{normalize, query_words};
use std::collections::BTreeSet;

/// Base for the descending rank scores assigned to boolean results.
pub const RANK_BASE_SCORE: u32 = 100;

/// Score for the result at 0-based rank `rank`.
///
/// Boolean queries carry no relevance signal, so results are scored by
/// position alone. Floored at 1: a score of 0 means "discard" elsewhere
/// in the engine and set members must stay visible.
pub fn rank_score(rank: usize) -> u32 {
    RANK_BASE_SCORE.saturating_sub(rank as u32).max(1)
}

/// Evaluate a token stream against the index.
///
/// `text_of` recomputes a document's normalized text on demand; it backs
/// phrase matching and the whole-word fallback.
pub(crate) fn evaluate<F>(tokens: &[BoolToken], index: &Index, text_of: F) -> BTreeSet<usize>
where
    F: Fn(usize) -> String,
{
    let universe: BTreeSet<usize> = (0..index.doc_count()).collect();
    let mut result = universe.clone();
    let mut pending = BoolOp::And;
    let mut seeded = false;

    for token in tokens {
        match token {
            BoolToken::Operator(op) => pending = *op,
            BoolToken::Excluded(text) => {
                let matching = term_match_set(text, index, &universe, &text_of);
                result = result.difference(&matching).copied().collect();
            }
            BoolToken::Required(text) => {
                let matching = term_match_set(text, index, &universe, &text_of);
                combine(&mut result, matching, BoolOp::And, &mut seeded);
            }
            BoolToken::Term(text) => {
                let matching = term_match_set(text, index, &universe, &text_of);
                combine(&mut result, matching, pending, &mut seeded);
            }
            BoolToken::Phrase(text) => {
                let matching = phrase_match_set(text, &universe, &text_of);
                combine(&mut result, matching, pending, &mut seeded);
            }
        }
    }

    result
}

/// Fold one matching set into the running result.
fn combine(result: &mut BTreeSet<usize>, matching: BTreeSet<usize>, op: BoolOp, seeded: &mut bool) {
    match op {
        BoolOp::Not => {
            *result = result.difference(&matching).copied().collect();
        }
        _ if !*seeded => {
            // First positive token: seed instead of intersecting/unioning
            // against the universal set.
            *result = matching;
        }
        BoolOp::And => {
            *result = result.intersection(&matching).copied().collect();
        }
        BoolOp::Or => {
            *result = result.union(&matching).copied().collect();
        }
    }
    *seeded = true;
}

/// Documents containing at least one of the term's words.
fn term_match_set<F>(
    text: &str,
    index: &Index,
    universe: &BTreeSet<usize>,
    text_of: &F,
) -> BTreeSet<usize>
where
    F: Fn(usize) -> String,
{
    let mut matching = BTreeSet::new();
    for word in query_words(text) {
        if let Some(ids) = index.posting(&word) {
            matching.extend(ids.iter().copied());
        } else {
            // Not in the index: whole-word scan over the documents.
            matching.extend(
                universe
                    .iter()
                    .copied()
                    .filter(|id| contains_word(&text_of(*id), &word)),
            );
        }
    }
    matching
}

/// Documents whose normalized text contains the phrase verbatim.
fn phrase_match_set<F>(text: &str, universe: &BTreeSet<usize>, text_of: &F) -> BTreeSet<usize>
where
    F: Fn(usize) -> String,
{
    let phrase = normalize(text);
    if phrase.is_empty() {
        return BTreeSet::new();
    }
    universe
        .iter()
        .copied()
        .filter(|id| text_of(*id).contains(&phrase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::parser::parse_boolean_query;

    const CORPUS: &[&str] = &[
        "the quick brown fox",
        "a quick fox jumps",
        "totally unrelated text",
        "a lazy dog sleeps",
    ];

    fn run(query: &str) -> Vec<usize> {
        let docs: Vec<String> = CORPUS.iter().map(|t| (*t).to_string()).collect();
        let index = Index::build(&docs).unwrap();
        let tokens = parse_boolean_query(query);
        evaluate(&tokens, &index, |id| normalize(&docs[id]))
            .into_iter()
            .collect()
    }

    #[test]
    fn test_single_term_seeds_result() {
        assert_eq!(run("fox"), vec![0, 1]);
    }

    #[test]
    fn test_and_intersects() {
        assert_eq!(run("quick AND jumps"), vec![1]);
    }

    #[test]
    fn test_or_unions() {
        assert_eq!(run("fox OR dog"), vec![0, 1, 3]);
    }

    #[test]
    fn test_not_subtracts() {
        assert_eq!(run("fox NOT jumps"), vec![0]);
    }

    #[test]
    fn test_leading_not_subtracts_from_universe() {
        assert_eq!(run("NOT fox"), vec![2, 3]);
    }

    #[test]
    fn test_excluded_always_subtracts() {
        assert_eq!(run("fox -jumps"), vec![0]);
        assert_eq!(run("fox OR dog -lazy"), vec![0, 1]);
    }

    #[test]
    fn test_phrase_requires_order() {
        assert_eq!(run("\"quick fox\""), vec![1]);
        assert_eq!(run("\"fox quick\""), Vec::<usize>::new());
    }

    #[test]
    fn test_required_intersects_even_after_or() {
        // +jumps forces intersection regardless of the pending OR.
        assert_eq!(run("fox OR dog +jumps"), vec![1]);
    }

    #[test]
    fn test_short_word_falls_back_to_document_scan() {
        // "a" is below the index length cutoff; whole-word scan finds it.
        assert_eq!(run("a AND fox"), vec![1]);
    }

    #[test]
    fn test_fallback_is_whole_word_not_substring() {
        // "tot" appears inside "totally" but never as a word.
        assert_eq!(run("tot AND text"), Vec::<usize>::new());
    }

    #[test]
    fn test_rank_score_descends_and_floors() {
        assert_eq!(rank_score(0), 100);
        assert_eq!(rank_score(1), 99);
        assert_eq!(rank_score(99), 1);
        assert_eq!(rank_score(500), 1);
    }
}
