// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numbers behind search ranking.
//!
//! # Keyword mode
//!
//! Each keyword contributes independently, and contributions add up:
//!
//! | Condition                                          | Points |
//! |----------------------------------------------------|--------|
//! | keyword in title (lowercased or accent-folded)     | +5     |
//! | keyword in content (lowercased or accent-folded)   | +1     |
//! | title equals keyword, or keyword in content        | +2     |
//!
//! The third row counts content containment a second time, so a content hit
//! is really worth 3. Sites have tuned their result pages against this
//! ordering, so it stays. A title-only hit (5) still outranks a content-only
//! hit (3), and a keyword that is the whole title gets 7.
//!
//! # Phrase mode
//!
//! Binary: title contains the phrase = 2, content contains it = 1.

use crate::types::EntryFields;

/// Keyword found in the title.
pub const TITLE_MATCH_SCORE: u32 = 5;

/// Keyword found in the content.
pub const CONTENT_MATCH_SCORE: u32 = 1;

/// Title is exactly the keyword, or the keyword appears in the content.
pub const EXACT_OR_CONTENT_BONUS: u32 = 2;

/// Phrase found in the title.
pub const PHRASE_TITLE_SCORE: u32 = 2;

/// Phrase found in the content.
pub const PHRASE_CONTENT_SCORE: u32 = 1;

/// Points one keyword earns for one entry. Zero means no match.
///
/// `keyword` must already be lowercase.
pub fn keyword_score(fields: &EntryFields, keyword: &str) -> u32 {
    let mut score = 0;

    if fields.title.contains(keyword) {
        score += TITLE_MATCH_SCORE;
    }
    if fields.content.contains(keyword) {
        score += CONTENT_MATCH_SCORE;
    }
    // Plain lowercased content only; the folded twin is not consulted here.
    if fields.title.lower == keyword || fields.content.lower.contains(keyword) {
        score += EXACT_OR_CONTENT_BONUS;
    }

    score
}

/// Total over every keyword of the query.
pub fn keywords_score(fields: &EntryFields, keywords: &[String]) -> u32 {
    keywords.iter().map(|kw| keyword_score(fields, kw)).sum()
}

/// Phrase mode score. `phrase` must already be lowercase.
pub fn phrase_score(fields: &EntryFields, phrase: &str) -> u32 {
    let title = if fields.title.lower.contains(phrase) {
        PHRASE_TITLE_SCORE
    } else {
        0
    };
    let content = if fields.content.lower.contains(phrase) {
        PHRASE_CONTENT_SCORE
    } else {
        0
    };
    title + content
}
