// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and word tokenization.
//!
//! Two layers, applied in order:
//!
//! 1. [`normalize`] - lowercase (and, with the `unicode-normalization`
//!    feature, strip diacritics) the raw text. The normalized string is what
//!    phrase matching and the scorer scan, so punctuation survives it.
//! 2. [`tokens`] - split the normalized string into words. A word character
//!    is a letter, digit, apostrophe, or hyphen; everything else separates.
//!    Leading/trailing apostrophes and hyphens are trimmed off each word.
//!
//! Both are pure: identical input always yields identical output.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: strip diacritics, lowercase, trim.
///
/// This enables matching between ASCII and accented versions:
/// - "Café" → "café" → "cafe"
/// - "naïve" → "naive"
///
/// Whitespace inside the text is preserved so that phrase matching and
/// occurrence offsets line up with the searchable text as assembled.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases and trims. Assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Is this character part of a word token?
///
/// Apostrophes and hyphens are word-internal ("don't", "full-text") but are
/// trimmed when they appear at a word's edges.
#[inline]
pub fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '-'
}

/// A character that terminates a word during occurrence classification.
///
/// This is the boundary class the scorer uses: letters and digits are word
/// characters, everything else (including apostrophe and hyphen) is a
/// boundary. Kept separate from [`is_token_char`] on purpose - "fox" at the
/// end of "fox-trot" is still a whole-word occurrence.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Lazily split normalized text into word tokens.
///
/// The input is expected to already be [`normalize`]d; callers that tokenize
/// raw queries should normalize first. Tokens shorter than one character
/// after edge-trimming are dropped.
///
/// # Example
///
/// ```
/// use riddle::tokens;
///
/// let words: Vec<&str> = tokens("the quick-witted fox's den!").collect();
/// assert_eq!(words, vec!["the", "quick-witted", "fox's", "den"]);
/// ```
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_token_char(c))
        .map(|word| word.trim_matches(|c| c == '\'' || c == '-'))
        .filter(|word| !word.is_empty())
}

/// Tokenize a raw query string: normalize, then collect owned words.
pub fn query_words(query: &str) -> Vec<String> {
    let normalized = normalize(query);
    tokens(&normalized).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  Hello World  "), "hello world");
    }

    #[cfg(feature = "unicode-normalization")]
    #[test]
    fn test_normalize_strips_diacritics() {
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("naïve"), "naive");
    }

    #[test]
    fn test_tokens_splits_on_punctuation() {
        let words: Vec<&str> = tokens("hello, world! foo.bar").collect();
        assert_eq!(words, vec!["hello", "world", "foo", "bar"]);
    }

    #[test]
    fn test_tokens_keeps_internal_apostrophe_and_hyphen() {
        let words: Vec<&str> = tokens("don't stop full-text").collect();
        assert_eq!(words, vec!["don't", "stop", "full-text"]);
    }

    #[test]
    fn test_tokens_trims_edge_apostrophes_and_hyphens() {
        let words: Vec<&str> = tokens("'quoted' -flagged- --").collect();
        assert_eq!(words, vec!["quoted", "flagged"]);
    }

    #[test]
    fn test_tokens_empty_input() {
        assert_eq!(tokens("").count(), 0);
        assert_eq!(tokens("!!! ???").count(), 0);
    }

    #[test]
    fn test_query_words_normalizes_first() {
        assert_eq!(query_words("Quick FOX!"), vec!["quick", "fox"]);
    }

    #[test]
    fn test_tokens_is_deterministic() {
        let a: Vec<&str> = tokens("same input text").collect();
        let b: Vec<&str> = tokens("same input text").collect();
        assert_eq!(a, b);
    }
}
