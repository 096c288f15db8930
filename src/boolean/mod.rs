// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The boolean query language: `"phrases"`, `+required`, `-excluded`,
//! and `AND`/`OR`/`NOT` operators over the inverted index.
//!
//! Split in two: [`parser`] turns the query string into a token stream
//! without ever failing, and [`eval`] walks that stream applying set
//! algebra. Boolean results carry no relevance signal, so the facade
//! assigns descending rank-based scores instead.

pub mod eval;
pub mod parser;

pub use parser::{is_boolean_query, parse_boolean_query, BoolOp, BoolToken};
