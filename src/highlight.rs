// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Marking query words inside original document text.
//!
//! Matching is case-insensitive but the emitted text preserves the
//! original casing, so the scan runs over a lowercase shadow of the text
//! with a byte map back to the original. Unicode lowercasing can change
//! byte lengths ('İ' lowers to two characters), which is why the map
//! exists at all; a match that lands mid-expansion snaps outward to the
//! enclosing original character.
//!
//! One pass per word, in word order. Ranges already claimed by an earlier
//! word are skipped, so a later word can never split an earlier marker.
//! No regex is involved, so no metacharacter in a query word can change
//! match semantics.

/// Opening marker wrapped around each match.
pub const MARK_OPEN: &str = "<mark>";

/// Closing marker wrapped around each match.
pub const MARK_CLOSE: &str = "</mark>";

/// Lowercase shadow of `text` plus, per shadow byte, the byte range of the
/// original character that produced it.
fn lowercase_shadow(text: &str) -> (String, Vec<(usize, usize)>) {
    let mut shadow = String::with_capacity(text.len());
    let mut map = Vec::with_capacity(text.len());
    for (offset, c) in text.char_indices() {
        let end = offset + c.len_utf8();
        for lowered in c.to_lowercase() {
            let before = shadow.len();
            shadow.push(lowered);
            for _ in before..shadow.len() {
                map.push((offset, end));
            }
        }
    }
    (shadow, map)
}

/// Map a shadow byte range back to an original byte range, snapping to
/// character boundaries of the original text.
fn original_range(map: &[(usize, usize)], start: usize, end: usize, text_len: usize) -> (usize, usize) {
    let original_start = map.get(start).map_or(text_len, |r| r.0);
    let original_end = if end == 0 {
        original_start
    } else {
        map.get(end - 1).map_or(text_len, |r| r.1)
    };
    (original_start, original_end)
}

/// Wrap every case-insensitive occurrence of each word in
/// [`MARK_OPEN`]/[`MARK_CLOSE`], in word order.
///
/// # Example
///
/// ```
/// use riddle::highlight;
///
/// let words = vec!["fox".to_string()];
/// assert_eq!(
///     highlight("The Fox and the fox.", &words),
///     "The <mark>Fox</mark> and the <mark>fox</mark>."
/// );
/// ```
pub fn highlight(text: &str, words: &[String]) -> String {
    let (shadow, map) = lowercase_shadow(text);
    let mut claimed: Vec<(usize, usize)> = Vec::new();

    for word in words {
        let needle = word.to_lowercase();
        if needle.is_empty() {
            continue;
        }
        let mut from = 0usize;
        while let Some(found) = shadow[from..].find(&needle) {
            let shadow_start = from + found;
            let shadow_end = shadow_start + needle.len();
            from = shadow_end;
            let (start, end) = original_range(&map, shadow_start, shadow_end, text.len());
            if end > start && !overlaps_claimed(&claimed, start, end) {
                claimed.push((start, end));
            }
        }
    }

    if claimed.is_empty() {
        return text.to_string();
    }
    claimed.sort_unstable();

    let mut out = String::with_capacity(text.len() + claimed.len() * (MARK_OPEN.len() + MARK_CLOSE.len()));
    let mut cursor = 0usize;
    for (start, end) in claimed {
        out.push_str(&text[cursor..start]);
        out.push_str(MARK_OPEN);
        out.push_str(&text[start..end]);
        out.push_str(MARK_CLOSE);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

fn overlaps_claimed(claimed: &[(usize, usize)], start: usize, end: usize) -> bool {
    claimed.iter().any(|(s, e)| start < *e && *s < end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(text: &str, words: &[&str]) -> String {
        let words: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
        highlight(text, &words)
    }

    #[test]
    fn test_case_insensitive_preserves_original() {
        assert_eq!(
            mark("Quick fox, QUICK fix", &["quick"]),
            "<mark>Quick</mark> fox, <mark>QUICK</mark> fix"
        );
    }

    #[test]
    fn test_multiple_words_in_order() {
        assert_eq!(
            mark("the quick brown fox", &["quick", "fox"]),
            "the <mark>quick</mark> brown <mark>fox</mark>"
        );
    }

    #[test]
    fn test_no_match_returns_text_unchanged() {
        assert_eq!(mark("nothing here", &["zebra"]), "nothing here");
    }

    #[test]
    fn test_overlapping_word_does_not_split_earlier_marker() {
        // "quick" claims the range first; "uic" inside it is skipped.
        assert_eq!(
            mark("a quick one", &["quick", "uic"]),
            "a <mark>quick</mark> one"
        );
    }

    #[test]
    fn test_word_equal_to_marker_text_is_safe() {
        // A query word that happens to spell "mark" must not corrupt the
        // emitted markers.
        assert_eq!(
            mark("mark my words", &["mark"]),
            "<mark>mark</mark> my words"
        );
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert_eq!(
            mark("cost is $5 (roughly)", &["$5", "(roughly)"]),
            "cost is <mark>$5</mark> <mark>(roughly)</mark>"
        );
    }

    #[test]
    fn test_empty_words_are_ignored() {
        assert_eq!(mark("unchanged", &[""]), "unchanged");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            mark("Über Äpfel reden", &["äpfel"]),
            "Über <mark>Äpfel</mark> reden"
        );
    }
}
