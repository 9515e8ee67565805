// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON index documents.
//!
//! Two shapes are accepted: the dedicated search page's `{"posts": [...]}`
//! and a bare array of entries. Each record may spell its link as `url`,
//! `path`, `permalink` or `link`, depending on the site generator; when several
//! are present the first non-empty one in that order wins. Null or missing
//! fields become empty strings.

use crate::types::Entry;
use serde::Deserialize;

#[derive(Deserialize)]
struct JsonEntry {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    permalink: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

impl JsonEntry {
    fn take_url(&mut self) -> String {
        [&mut self.url, &mut self.path, &mut self.permalink, &mut self.link]
            .into_iter()
            .find_map(|field| field.take().filter(|u| !u.is_empty()))
            .unwrap_or_default()
    }
}

impl From<JsonEntry> for Entry {
    fn from(mut raw: JsonEntry) -> Self {
        let url = raw.take_url();
        Entry {
            title: raw.title.unwrap_or_default(),
            url,
            content: raw.content.unwrap_or_default(),
            date: raw.date.filter(|d| !d.is_empty()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonIndex {
    Posts { posts: Vec<JsonEntry> },
    Bare(Vec<JsonEntry>),
}

/// Every record of the document, in order. Completeness is not checked here.
pub fn parse_json(body: &str) -> Result<Vec<Entry>, serde_json::Error> {
    let records = match serde_json::from_str::<JsonIndex>(body)? {
        JsonIndex::Posts { posts } => posts,
        JsonIndex::Bare(entries) => entries,
    };
    Ok(records.into_iter().map(Entry::from).collect())
}
