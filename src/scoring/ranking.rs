// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: highest score first, source order among equals.
//!
//! The sort is stable, so entries that tie keep the order the site generator
//! wrote them in. Same index and same query always give the same ranking.

use crate::types::Match;
use std::cmp::Ordering;

/// Descending by score. Ties compare equal so a stable sort keeps source order.
pub fn compare_matches(a: &Match, b: &Match) -> Ordering {
    b.score.cmp(&a.score)
}

/// Sort matches in place for display.
pub fn rank(matches: &mut [Match]) {
    matches.sort_by(compare_matches);
}
