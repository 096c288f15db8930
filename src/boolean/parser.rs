// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean query tokenizer.
//!
//! A single character scan with three modes: phrase accumulation between
//! quotes, modifier accumulation after a leading `+`/`-`, and plain word
//! accumulation otherwise. Whitespace flushes the buffer; a flushed word
//! that case-insensitively equals AND/OR/NOT becomes an operator token.
//!
//! Malformed input never errors. An unterminated quote emits whatever
//! accumulated as a phrase; a dangling `+`/`-` with nothing after it
//! emits nothing.

/// The three set-algebra operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    And,
    Or,
    Not,
}

/// One token of a boolean query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoolToken {
    /// Plain search term, combined per the current operator.
    Term(String),
    /// Quoted phrase, matched verbatim against document text.
    Phrase(String),
    /// `+term` - must match (intersects).
    Required(String),
    /// `-term` - must not match (always subtracts).
    Excluded(String),
    /// AND / OR / NOT, changing how subsequent tokens combine.
    Operator(BoolOp),
}

/// Should this query take the boolean path?
///
/// True when the query contains a spaced AND/OR/NOT (case-insensitive),
/// starts with one, or uses any of the `+`, `-`, `"` markers.
pub fn is_boolean_query(query: &str) -> bool {
    if query.contains(['+', '-', '"']) {
        return true;
    }
    let upper = query.to_uppercase();
    upper.contains(" AND ")
        || upper.contains(" OR ")
        || upper.contains(" NOT ")
        || upper.starts_with("AND ")
        || upper.starts_with("OR ")
        || upper.starts_with("NOT ")
}

/// Tokenize a boolean query string. Never fails.
pub fn parse_boolean_query(query: &str) -> Vec<BoolToken> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut modifier: Option<char> = None;
    let mut in_phrase = false;

    for c in query.chars() {
        if in_phrase {
            if c == '"' {
                flush_phrase(&mut tokens, &mut buffer);
                in_phrase = false;
            } else {
                buffer.push(c);
            }
        } else if c == '"' {
            flush_word(&mut tokens, &mut buffer, &mut modifier);
            in_phrase = true;
        } else if (c == '+' || c == '-') && buffer.is_empty() && modifier.is_none() {
            modifier = Some(c);
        } else if c.is_whitespace() {
            flush_word(&mut tokens, &mut buffer, &mut modifier);
        } else {
            buffer.push(c);
        }
    }

    if in_phrase {
        // Unterminated quote: emit the dangling buffer as a phrase anyway.
        flush_phrase(&mut tokens, &mut buffer);
    } else {
        flush_word(&mut tokens, &mut buffer, &mut modifier);
    }

    tokens
}

fn flush_phrase(tokens: &mut Vec<BoolToken>, buffer: &mut String) {
    let text = std::mem::take(buffer);
    if !text.is_empty() {
        tokens.push(BoolToken::Phrase(text));
    }
}

fn flush_word(tokens: &mut Vec<BoolToken>, buffer: &mut String, modifier: &mut Option<char>) {
    let text = std::mem::take(buffer);
    let marker = modifier.take();
    if text.is_empty() {
        return;
    }
    match marker {
        Some('+') => tokens.push(BoolToken::Required(text)),
        Some('-') => tokens.push(BoolToken::Excluded(text)),
        _ => match text.to_uppercase().as_str() {
            "AND" => tokens.push(BoolToken::Operator(BoolOp::And)),
            "OR" => tokens.push(BoolToken::Operator(BoolOp::Or)),
            "NOT" => tokens.push(BoolToken::Operator(BoolOp::Not)),
            _ => tokens.push(BoolToken::Term(text)),
        },
    }
}

/// The words worth highlighting in documents matched by this token stream:
/// positive terms (tokenized) and phrases (kept whole). Exclusions and
/// operators contribute nothing.
pub fn highlight_terms(tokens: &[BoolToken]) -> Vec<String> {
    let mut terms = Vec::new();
    for token in tokens {
        match token {
            BoolToken::Term(text) | BoolToken::Required(text) => {
                terms.extend(crate::tokenize::query_words(text));
            }
            BoolToken::Phrase(text) => terms.push(text.clone()),
            BoolToken::Excluded(_) | BoolToken::Operator(_) => {}
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::BoolToken::{Excluded, Operator, Phrase, Required, Term};

    #[test]
    fn test_detection_operators() {
        assert!(is_boolean_query("cat AND dog"));
        assert!(is_boolean_query("cat and dog"));
        assert!(is_boolean_query("NOT cat"));
        assert!(is_boolean_query("not cat"));
        assert!(!is_boolean_query("cat dog"));
        // Operator words need boundaries - "android" is not an operator.
        assert!(!is_boolean_query("android phones"));
    }

    #[test]
    fn test_detection_markers() {
        assert!(is_boolean_query("+cat"));
        assert!(is_boolean_query("cat -dog"));
        assert!(is_boolean_query("\"cat dog\""));
        assert!(is_boolean_query("full-text"));  // any hyphen routes boolean
    }

    #[test]
    fn test_parse_plain_terms_and_operators() {
        assert_eq!(
            parse_boolean_query("cat AND dog"),
            vec![
                Term("cat".into()),
                Operator(BoolOp::And),
                Term("dog".into()),
            ]
        );
        assert_eq!(
            parse_boolean_query("cat or dog"),
            vec![Term("cat".into()), Operator(BoolOp::Or), Term("dog".into())]
        );
    }

    #[test]
    fn test_parse_phrase() {
        assert_eq!(
            parse_boolean_query("\"quick fox\" den"),
            vec![Phrase("quick fox".into()), Term("den".into())]
        );
    }

    #[test]
    fn test_parse_required_and_excluded() {
        assert_eq!(
            parse_boolean_query("+cat -dog bird"),
            vec![
                Required("cat".into()),
                Excluded("dog".into()),
                Term("bird".into()),
            ]
        );
    }

    #[test]
    fn test_hyphen_inside_word_is_not_a_modifier() {
        assert_eq!(
            parse_boolean_query("full-text search"),
            vec![Term("full-text".into()), Term("search".into())]
        );
    }

    #[test]
    fn test_unterminated_quote_degrades_to_phrase() {
        assert_eq!(
            parse_boolean_query("cat \"quick fox"),
            vec![Term("cat".into()), Phrase("quick fox".into())]
        );
    }

    #[test]
    fn test_dangling_modifier_emits_nothing() {
        assert_eq!(parse_boolean_query("cat + "), vec![Term("cat".into())]);
        assert_eq!(parse_boolean_query("-"), vec![]);
    }

    #[test]
    fn test_empty_phrase_emits_nothing() {
        assert_eq!(parse_boolean_query("\"\" cat"), vec![Term("cat".into())]);
    }

    #[test]
    fn test_highlight_terms_skips_exclusions() {
        let tokens = parse_boolean_query("cat -dog \"red fox\"");
        assert_eq!(highlight_terms(&tokens), vec!["cat", "red fox"]);
    }
}
