// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet windows for the phrase renderer.
//!
//! A snippet is a stretch of content around the first match: a little left
//! context, the match, and a longer tail. Window sizes are in characters.

use crate::util::{find_ci, occurrences_ci};
use crate::render::highlight::{mark, splice_html};

/// A window of content plus whether text was cut off on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snippet<'a> {
    pub text: &'a str,
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
}

/// Byte offset of the `n`th character, or `text.len()` past the end.
fn byte_at_char(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(offset, _)| offset)
}

/// Cut the window around the first case-insensitive occurrence of `phrase`.
///
/// Keeps up to `before` characters ahead of the match and up to `after`
/// characters past its end. Content without an occurrence (the phrase only
/// hit the title) yields its first `after` characters.
pub fn snippet_window<'a>(content: &'a str, phrase: &str, before: usize, after: usize) -> Snippet<'a> {
    let total = content.chars().count();

    let (start, end) = match find_ci(content, phrase) {
        Some(range) => {
            let match_start = content[..range.start].chars().count();
            let match_len = content[range].chars().count();
            (
                match_start.saturating_sub(before),
                total.min(match_start + match_len + after),
            )
        }
        None => (0, total.min(after)),
    };

    let text = &content[byte_at_char(content, start)..byte_at_char(content, end)];
    Snippet {
        text,
        leading_ellipsis: start > 0,
        trailing_ellipsis: end < total,
    }
}

impl Snippet<'_> {
    /// HTML for the window with every occurrence of `phrase` in `<mark>`.
    pub fn to_html(&self, phrase: &str) -> String {
        let ranges = occurrences_ci(self.text, phrase);
        let mut html = String::new();
        if self.leading_ellipsis {
            html.push_str("...");
        }
        html.push_str(&splice_html(self.text, &ranges, mark));
        if self.trailing_ellipsis {
            html.push_str("...");
        }
        html
    }
}
