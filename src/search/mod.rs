// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matching: from a raw query string to ranked matches.
//!
//! Both modes share the same shape. An empty query means "clear", an empty
//! index means "still loading", and otherwise you get the scored entries in
//! rank order (possibly none). The outcome is plain data; turning it into
//! markup is the renderer's job.

pub mod keyword;
pub mod phrase;
pub mod utils;

pub use keyword::search_keywords;
pub use phrase::search_phrase;
pub use utils::{parse_phrase, parse_query};

use crate::types::{Match, SearchIndex, SearchMode};

/// What a query produced.
///
/// The three non-result variants are distinct UI states and must not be
/// collapsed into one another: clearing hides the clear button, loading asks
/// the user to retry shortly, not-found says there is nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query was empty or whitespace. Nothing was searched.
    Cleared,
    /// Index has no entries yet. Nothing was searched.
    Loading,
    /// Searched, nothing scored above zero.
    NotFound,
    /// Matches in rank order. Never empty.
    Found(Vec<Match>),
}

impl SearchOutcome {
    pub(crate) fn from_matches(matches: Vec<Match>) -> Self {
        if matches.is_empty() {
            SearchOutcome::NotFound
        } else {
            SearchOutcome::Found(matches)
        }
    }

    /// The matches, or an empty slice for the non-result states.
    pub fn matches(&self) -> &[Match] {
        match self {
            SearchOutcome::Found(matches) => matches,
            _ => &[],
        }
    }
}

/// Run `query` through the matcher for `mode`.
pub fn search(index: &SearchIndex, query: &str, mode: SearchMode) -> SearchOutcome {
    match mode {
        SearchMode::Keyword => search_keywords(index, query),
        SearchMode::Phrase => search_phrase(index, query),
    }
}
