// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive literal search over the original text.
//!
//! Highlighting has to wrap the characters as written ("Hello"), not the
//! lowercased copy the matcher compared against ("hello"). Lowercasing can
//! change byte lengths ('İ' becomes two chars), so offsets in the lowercased
//! copy are useless for splicing. Instead we walk the original text and
//! lowercase on the fly, reporting byte ranges that always sit on char
//! boundaries of the original.

use std::ops::Range;

/// Whole-string lowercasing turns a word-final 'Σ' into 'ς', per-char
/// lowercasing always gives 'σ'. Both sides compare as 'σ'.
#[inline]
fn same_lower(a: char, b: char) -> bool {
    let sigma = |c: char| if c == 'ς' { 'σ' } else { c };
    sigma(a) == sigma(b)
}

/// Length in bytes of a match of `needle` starting at the beginning of `hay`.
///
/// `needle` must already be lowercase. A match has to consume whole
/// characters of `hay`: if the needle ends halfway through the lowercase
/// expansion of one character, it does not count.
fn match_len_at(hay: &str, needle: &[char]) -> Option<usize> {
    let mut pending = needle.iter();
    let mut remaining = needle.len();

    for (offset, c) in hay.char_indices() {
        if remaining == 0 {
            return Some(offset);
        }
        for lower in c.to_lowercase() {
            match pending.next() {
                Some(&expected) if same_lower(expected, lower) => remaining -= 1,
                _ => return None,
            }
        }
    }

    (remaining == 0).then_some(hay.len())
}

/// First case-insensitive occurrence of `needle` in `hay`, at or after byte `from`.
///
/// `from` must be a char boundary of `hay`. Returns `None` for an empty needle.
pub fn find_ci_from(hay: &str, needle: &str, from: usize) -> Option<Range<usize>> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return None;
    }
    find_chars_from(hay, &needle, from)
}

fn find_chars_from(hay: &str, needle: &[char], from: usize) -> Option<Range<usize>> {
    let tail = hay.get(from..)?;
    tail.char_indices().find_map(|(offset, _)| {
        let start = from + offset;
        match_len_at(&hay[start..], needle).map(|len| start..start + len)
    })
}

/// First case-insensitive occurrence of `needle` (already lowercase) in `hay`.
pub fn find_ci(hay: &str, needle: &str) -> Option<Range<usize>> {
    find_ci_from(hay, needle, 0)
}

/// Every non-overlapping occurrence, left to right.
pub fn occurrences_ci(hay: &str, needle: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = needle.chars().collect();
    let mut found = Vec::new();
    if needle.is_empty() {
        return found;
    }

    let mut from = 0;
    while let Some(range) = find_chars_from(hay, &needle, from) {
        from = range.end;
        found.push(range);
    }
    found
}

/// The first `n` characters of `text` (characters, not bytes).
pub fn prefix_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
