// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing shared by both matchers.

use crate::util::lowercase;

/// Parse a query into lowercase keyword tokens.
///
/// Splits on any whitespace, drops empty tokens, and keeps only the first
/// occurrence of a repeated token, so "rust Rust" is one keyword, not two.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("  Hello World hello ");
/// assert_eq!(terms, vec!["hello", "world"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for token in lowercase(query.trim()).split_whitespace() {
        if !keywords.iter().any(|k| k == token) {
            keywords.push(token.to_string());
        }
    }
    keywords
}

/// Phrase mode takes the query as one literal: trimmed and lowercased,
/// inner whitespace untouched. `None` when nothing is left.
pub fn parse_phrase(query: &str) -> Option<String> {
    let phrase = lowercase(query.trim());
    (!phrase.is_empty()).then_some(phrase)
}
