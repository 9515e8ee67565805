// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary entry text and queries go through matching and rendering. The
//! renderer slices text at match offsets found with on-the-fly lowercasing,
//! so characters whose lowercase form changes length are the interesting
//! inputs here.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitesearch::{search, Entry, Renderer, SearchConfig, SearchIndex, SearchMode, ViewState};

#[derive(Debug, Arbitrary)]
struct Input {
    entries: Vec<(String, String)>,
    query: String,
    phrase: bool,
    seed: u64,
}

fuzz_target!(|input: Input| {
    let index = SearchIndex::from_entries(
        input
            .entries
            .into_iter()
            .take(32)
            .enumerate()
            .map(|(i, (title, content))| Entry::new(title, format!("/{}", i), content)),
    );
    let mode = if input.phrase { SearchMode::Phrase } else { SearchMode::Keyword };
    let query: String = input.query.chars().take(64).collect();

    // INVARIANT 1: neither search nor render panics
    let outcome = search(&index, &query, mode);
    let view = Renderer::new(SearchConfig::default(), input.seed).render(&index, &query, mode, &outcome);

    // INVARIANT 2: ranked order, positive scores, every match in range
    for pair in outcome.matches().windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for m in outcome.matches() {
        assert!(m.score > 0);
        assert!(m.doc < index.len());
    }

    // INVARIANT 3: the cap holds in keyword mode
    if let ViewState::Results { shown, total } = view.state {
        assert_eq!(total, outcome.matches().len());
        if mode == SearchMode::Keyword {
            assert!(shown <= SearchConfig::default().max_results);
        }
    }
});
