// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword mode: whitespace tokens, weighted per field.

use super::utils::parse_query;
use super::SearchOutcome;
use crate::scoring::{keywords_score, ranking::rank};
use crate::types::{Match, SearchIndex};

/// Score every entry against every keyword of `query`.
///
/// Entries scoring zero are dropped; the rest come back highest first, with
/// ties in source order.
pub fn search_keywords(index: &SearchIndex, query: &str) -> SearchOutcome {
    let keywords = parse_query(query);
    if keywords.is_empty() {
        return SearchOutcome::Cleared;
    }
    if !index.is_loaded() {
        return SearchOutcome::Loading;
    }

    let mut matches: Vec<Match> = index
        .iter_fields()
        .filter_map(|(doc, _, fields)| {
            let score = keywords_score(fields, &keywords);
            (score > 0).then_some(Match { doc, score })
        })
        .collect();
    rank(&mut matches);

    log::debug!(
        "keyword search {:?}: {} of {} entries matched",
        keywords,
        matches.len(),
        index.len()
    );
    SearchOutcome::from_matches(matches)
}
