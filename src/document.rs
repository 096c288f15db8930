// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document capability interface.
//!
//! The engine never inspects documents directly - it asks them for their
//! searchable text through [`Searchable`] and recomputes that text on demand
//! instead of retaining a copy. A document is identified everywhere by its
//! position in the collection passed to the engine.
//!
//! Two implementations ship with the crate:
//!
//! - `String` / `&str` for plain-text corpora
//! - [`serde_json::Value`] for opaque key-value records, with a prioritized
//!   field order: a primary `"text"` field first, then a fixed list of
//!   well-known secondary fields, then any remaining short string field.

use thiserror::Error;

/// Primary field consulted first when assembling searchable text.
pub const PRIMARY_FIELD: &str = "text";

/// Well-known secondary fields, consulted in this order after the primary.
pub const SECONDARY_FIELDS: &[&str] = &[
    "title",
    "name",
    "description",
    "content",
    "summary",
    "label",
];

/// Other string fields longer than this are skipped during assembly.
/// Long blobs (base64 payloads, serialized state) would drown the index.
pub const MAX_EXTRA_FIELD_LEN: usize = 200;

/// A document could not produce its searchable text.
///
/// Raised by [`Searchable::searchable_text`] implementations that can fail;
/// the engine turns it into a rejected build with prior state retained.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to extract searchable text: {0}")]
pub struct ExtractError(pub String);

/// Capability interface every indexed document must provide.
///
/// The returned text is the raw (original-case) concatenation of the
/// document's textual fields; the engine normalizes it separately for
/// matching and reuses the raw form for highlighting. Implementations
/// must be deterministic - the engine calls this once per build and again
/// per query for candidate documents.
pub trait Searchable {
    /// Assemble the document's searchable text, fields in priority order,
    /// separated by single spaces.
    fn searchable_text(&self) -> Result<String, ExtractError>;
}

impl Searchable for String {
    fn searchable_text(&self) -> Result<String, ExtractError> {
        Ok(self.clone())
    }
}

impl Searchable for &str {
    fn searchable_text(&self) -> Result<String, ExtractError> {
        Ok((*self).to_string())
    }
}

impl Searchable for serde_json::Value {
    /// Field-priority assembly over an opaque JSON record.
    ///
    /// Non-object values degrade gracefully: a bare string is its own text,
    /// anything else yields no text (the document still gets a summary, it
    /// just contributes no postings).
    fn searchable_text(&self) -> Result<String, ExtractError> {
        let object = match self {
            serde_json::Value::Object(map) => map,
            serde_json::Value::String(text) => return Ok(text.clone()),
            _ => return Ok(String::new()),
        };

        let mut parts: Vec<&str> = Vec::new();

        if let Some(text) = object.get(PRIMARY_FIELD).and_then(|v| v.as_str()) {
            parts.push(text);
        }
        for field in SECONDARY_FIELDS {
            if let Some(text) = object.get(*field).and_then(|v| v.as_str()) {
                parts.push(text);
            }
        }
        for (key, value) in object {
            if key == PRIMARY_FIELD || SECONDARY_FIELDS.contains(&key.as_str()) {
                continue;
            }
            if let Some(text) = value.as_str() {
                if !text.is_empty() && text.chars().count() <= MAX_EXTRA_FIELD_LEN {
                    parts.push(text);
                }
            }
        }

        Ok(parts.join(" "))
    }
}
