// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index loading: one fetch, one parse, one immutable [`SearchIndex`].
//!
//! The loader runs once per page. It does not retry: a failure is logged and
//! returned, the caller keeps its empty index, and searches report the
//! loading state until the page is reloaded.
//!
//! # Failure taxonomy
//!
//! | Failure                       | Error                 | Log level |
//! |-------------------------------|-----------------------|-----------|
//! | no response / missing file    | `Transport`           | error     |
//! | non-success response          | `Status`              | error     |
//! | body is not an entry list     | `Parse`               | error     |
//! | no usable entries             | `Empty`               | warn      |
//! | entry missing title or url    | (dropped silently)    | debug     |

mod fetch;
pub mod json;
pub mod xml;

pub use fetch::Fetch;
#[cfg(feature = "fs")]
pub use fetch::FsFetcher;

use crate::config::SearchConfig;
use crate::error::LoadError;
use crate::types::{Entry, SearchIndex};
use serde::Serialize;
use std::fmt;

/// Which document format the body turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexFormat {
    Xml,
    Json,
}

impl fmt::Display for IndexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexFormat::Xml => write!(f, "xml"),
            IndexFormat::Json => write!(f, "json"),
        }
    }
}

/// What a successful load saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    pub format: IndexFormat,
    /// Records in the document.
    pub parsed: usize,
    /// Records kept (title and url present).
    pub kept: usize,
}

impl LoadReport {
    pub fn dropped(&self) -> usize {
        self.parsed - self.kept
    }
}

/// Sniff the format: markup starts with `<`, anything else is JSON.
pub fn detect_format(body: &str) -> IndexFormat {
    if body.trim_start_matches('\u{feff}').trim_start().starts_with('<') {
        IndexFormat::Xml
    } else {
        IndexFormat::Json
    }
}

/// Parse a fetched body into an index. `path` is only used in errors.
pub fn parse_document(path: &str, body: &str) -> Result<(SearchIndex, LoadReport), LoadError> {
    let format = detect_format(body);
    let parsed: Result<Vec<Entry>, String> = match format {
        IndexFormat::Xml => xml::parse_xml(body).map_err(|e| e.to_string()),
        IndexFormat::Json => json::parse_json(body).map_err(|e| e.to_string()),
    };
    let entries = parsed.map_err(|reason| LoadError::Parse {
        path: path.to_string(),
        reason,
    })?;

    let parsed = entries.len();
    for dropped in entries.iter().filter(|e| !e.is_complete()) {
        log::debug!(
            "dropping incomplete entry (title: {:?}, url: {:?})",
            dropped.title,
            dropped.url
        );
    }

    let index = SearchIndex::from_entries(entries);
    let report = LoadReport {
        format,
        parsed,
        kept: index.len(),
    };

    if index.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_string(),
        });
    }
    Ok((index, report))
}

/// Fetches and parses the index resource at a fixed path.
#[derive(Debug, Clone)]
pub struct IndexLoader {
    path: String,
}

impl IndexLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.index_path.clone())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fetch once and parse, logging any failure before returning it.
    pub async fn load_with_report<F: Fetch>(
        &self,
        fetcher: &F,
    ) -> Result<(SearchIndex, LoadReport), LoadError> {
        let result = match fetcher.fetch(&self.path).await {
            Ok(body) => parse_document(&self.path, &body),
            Err(err) => Err(err),
        };

        match &result {
            Ok((_, report)) => log::info!(
                "loaded {} search entries from {} ({}, {} dropped)",
                report.kept,
                self.path,
                report.format,
                report.dropped()
            ),
            Err(err @ LoadError::Empty { .. }) => log::warn!("search index is empty: {}", err),
            Err(err) => log::error!("search index failed to load: {}", err),
        }
        result
    }

    /// Fetch once and parse. On failure the caller should keep an empty index.
    pub async fn load<F: Fetch>(&self, fetcher: &F) -> Result<SearchIndex, LoadError> {
        self.load_with_report(fetcher).await.map(|(index, _)| index)
    }
}
