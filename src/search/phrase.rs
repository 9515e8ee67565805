// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phrase mode: the whole query as one literal, title 2 / content 1.

use super::utils::parse_phrase;
use super::SearchOutcome;
use crate::scoring::{phrase_score, ranking::rank};
use crate::types::{Match, SearchIndex};

pub fn search_phrase(index: &SearchIndex, query: &str) -> SearchOutcome {
    let Some(phrase) = parse_phrase(query) else {
        return SearchOutcome::Cleared;
    };
    if !index.is_loaded() {
        return SearchOutcome::Loading;
    }

    let mut matches: Vec<Match> = index
        .iter_fields()
        .filter_map(|(doc, _, fields)| {
            let score = phrase_score(fields, &phrase);
            (score > 0).then_some(Match { doc, score })
        })
        .collect();
    rank(&mut matches);

    log::debug!(
        "phrase search {:?}: {} of {} entries matched",
        phrase,
        matches.len(),
        index.len()
    );
    SearchOutcome::from_matches(matches)
}
