// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine's error taxonomy.
//!
//! Recoverable query-time conditions never cross the public API as errors:
//! a too-short query and a not-yet-built index both degrade to an empty
//! [`SearchResponse`](crate::SearchResponse), the latter with its `error`
//! field set. Only a failed build surfaces as `Err`, and a failed rebuild
//! leaves the prior index untouched.

use crate::document::ExtractError;
use thiserror::Error;

/// Everything that can go wrong inside the engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// `search` was called before a successful build. Degrades to an empty
    /// result set with an error message, never a panic or an `Err`.
    #[error("search index is not ready")]
    NotReady,

    /// The query was below the minimum length. Degrades to an empty result
    /// set with no error message - this is expected interactive behavior.
    #[error("query is too short")]
    EmptyQuery,

    /// A document failed text extraction during a build. The build is
    /// rejected as a whole; any prior index stays in place.
    #[error("index build failed: {0}")]
    BuildFailure(String),
}

impl From<ExtractError> for EngineError {
    fn from(err: ExtractError) -> Self {
        EngineError::BuildFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(EngineError::NotReady.to_string(), "search index is not ready");
        assert_eq!(
            EngineError::BuildFailure("bad doc".into()).to_string(),
            "index build failed: bad doc"
        );
    }

    #[test]
    fn test_extract_error_converts_to_build_failure() {
        let err: EngineError = ExtractError("missing field".into()).into();
        assert_eq!(
            err,
            EngineError::BuildFailure("failed to extract searchable text: missing field".into())
        );
    }
}
