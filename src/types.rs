// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a site search.
//!
//! An [`Entry`] is one page of the site as the index generator saw it. A
//! [`SearchIndex`] owns every retained entry in source order, plus the
//! lowercased and accent-folded forms the matcher compares against. The index
//! is built once when the load completes and never mutated afterwards, so
//! everything downstream borrows it.
//!
//! # Invariants
//!
//! - **Entry**: `!title.is_empty() ∧ !url.is_empty()` for every entry held by
//!   a `SearchIndex`. Incomplete records are dropped at construction.
//!
//! - **SearchIndex**: `entries.len() = fields.len()`, and `fields[i]` is the
//!   normalized form of `entries[i]`.
//!
//! - **Match**: `score ≥ 1 ∧ doc < index.len()`. Zero-score entries never
//!   become matches.

use crate::util::{fold_diacritics, lowercase};
use serde::{Deserialize, Serialize};

// =============================================================================
// ENTRIES
// =============================================================================

/// One indexed page or post.
///
/// Every field defaults to empty so that a record with missing fields still
/// deserializes; [`SearchIndex::from_entries`] then drops it if the title or
/// url came out empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub title: String,
    pub url: String,
    pub content: String,
    /// Publish date, carried by the JSON `posts` format only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Entry {
    pub fn new(title: impl Into<String>, url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: content.into(),
            date: None,
        }
    }

    /// Attach a publish date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Can this entry be shown as a result? Needs a title to display and a url to link.
    #[inline]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.url.is_empty()
    }
}

/// Lowercased and accent-folded copies of one field.
///
/// `folded` is the NFD-decomposed form with combining marks removed, so a
/// keyword typed without accents ("cafe") still finds "café".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldText {
    pub lower: String,
    pub folded: String,
}

impl FieldText {
    pub fn new(raw: &str) -> Self {
        let lower = lowercase(raw);
        let folded = fold_diacritics(&lower);
        Self { lower, folded }
    }

    /// Does `needle` occur in the lowercased text or its accent-folded twin?
    #[inline]
    pub fn contains(&self, needle: &str) -> bool {
        self.lower.contains(needle) || self.folded.contains(needle)
    }
}

/// Normalized title and content for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFields {
    pub title: FieldText,
    pub content: FieldText,
}

impl EntryFields {
    fn new(entry: &Entry) -> Self {
        Self {
            title: FieldText::new(&entry.title),
            content: FieldText::new(&entry.content),
        }
    }
}

// =============================================================================
// INDEX
// =============================================================================

/// Every retained entry of the site, in source order.
///
/// An empty index means the load has not completed (or failed); the matcher
/// reports that as a loading state rather than "no results".
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<Entry>,
    fields: Vec<EntryFields>,
}

impl SearchIndex {
    /// An index with nothing loaded yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index, dropping entries without a title or url.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let entries: Vec<Entry> = entries.into_iter().filter(Entry::is_complete).collect();
        let fields = entries.iter().map(EntryFields::new).collect();
        Self { entries, fields }
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        !self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, doc: usize) -> Option<&Entry> {
        self.entries.get(doc)
    }

    /// Entries zipped with their normalized fields.
    pub fn iter_fields(&self) -> impl Iterator<Item = (usize, &Entry, &EntryFields)> {
        self.entries
            .iter()
            .zip(self.fields.iter())
            .enumerate()
            .map(|(doc, (entry, fields))| (doc, entry, fields))
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A scored hit, before rendering. `doc` indexes into the [`SearchIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub doc: usize,
    pub score: u32,
}

/// A rendered hit: title and content already carry highlight markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredResult {
    pub score: u32,
    pub title: String,
    pub url: String,
    pub content: String,
}

/// Which presentation a query goes through.
///
/// `Keyword` is the search-as-you-type box: whitespace tokens, weighted
/// scoring, capped list with prefix previews. `Phrase` is the dedicated
/// search page: the whole query as one literal, binary scoring, and a
/// snippet window around the first hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Keyword,
    Phrase,
}
