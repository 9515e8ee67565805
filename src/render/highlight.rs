// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlight markup.
//!
//! Highlighting is done in two passes. First every occurrence of every
//! keyword is located in the raw text and overlapping ranges are resolved.
//! Then the text is emitted once, escaping the plain stretches and wrapping
//! the matched ones. Because markup is only produced in the second pass, a
//! keyword such as "span" or "style" can never match inside a highlight
//! inserted for an earlier keyword.

use crate::util::occurrences_ci;
use std::ops::Range;

/// Resolve overlaps: earlier start wins, and the longer range wins a tie.
///
/// Output is sorted and pairwise disjoint.
pub fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if merged.last().is_some_and(|last| range.start < last.end) {
            continue;
        }
        merged.push(range);
    }
    merged
}

/// Every case-insensitive occurrence of any keyword, disjoint and in order.
pub fn keyword_ranges(text: &str, keywords: &[String]) -> Vec<Range<usize>> {
    let ranges = keywords
        .iter()
        .flat_map(|keyword| occurrences_ci(text, keyword))
        .collect();
    merge_ranges(ranges)
}

/// Emit `text` as HTML, passing each matched stretch (already escaped) to `wrap`.
///
/// `ranges` must be sorted, disjoint, and on char boundaries of `text`, which
/// is what [`keyword_ranges`] and [`occurrences_ci`] produce.
pub fn splice_html<F>(text: &str, ranges: &[Range<usize>], mut wrap: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut html = String::with_capacity(text.len() + ranges.len() * 64);
    let mut cursor = 0;

    for range in ranges {
        html.push_str(&html_escape::encode_text(&text[cursor..range.start]));
        html.push_str(&wrap(&html_escape::encode_text(&text[range.clone()])));
        cursor = range.end;
    }
    html.push_str(&html_escape::encode_text(&text[cursor..]));
    html
}

/// `<span class="search-keyword" style="background:COLOR">…</span>`
pub fn keyword_span(color: Option<&str>, inner: &str) -> String {
    match color {
        Some(color) => format!(
            "<span class=\"search-keyword\" style=\"background:{}\">{}</span>",
            html_escape::encode_double_quoted_attribute(color),
            inner
        ),
        None => format!("<span class=\"search-keyword\">{}</span>", inner),
    }
}

/// `<mark>…</mark>`
pub fn mark(inner: &str) -> String {
    format!("<mark>{}</mark>", inner)
}
