// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full-text search for static sites, in the browser or on the command line.
//!
//! A site generator writes an index of its pages (`search.xml` or a JSON
//! entry list). This crate fetches it once, scores entries against a query by
//! weighted substring counting, and renders highlighted HTML for the page to
//! drop into its result container.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  loader     │────▶│  search      │────▶│  render     │
//! │ (fetch,     │     │ (keyword,    │     │ (highlight, │
//! │  xml, json) │     │  phrase)     │     │  snippet)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │   session (SearchIndex + Renderer + Debouncer)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! | Module     | Responsibility                                          |
//! |------------|---------------------------------------------------------|
//! | `types`    | `Entry`, `SearchIndex`, `Match`, `ScoredResult`         |
//! | `loader`   | Single-shot async fetch + parse                         |
//! | `scoring`  | Per-field weights, stable ranking                       |
//! | `search`   | Query parsing, keyword and phrase matchers              |
//! | `render`   | HTML fragments, view states, seeded highlight colors    |
//! | `debounce` | Cancellable delayed-task scheduler                      |
//! | `session`  | The pieces wired together for one page                  |
//!
//! # Usage
//!
//! ```ignore
//! use sitesearch::{FsFetcher, SearchConfig, SearchMode, SearchSession};
//!
//! let mut session = SearchSession::new(SearchConfig::default(), 42);
//! session.load(&FsFetcher::new("public")).await?;
//!
//! let view = session.search("rust wasm", SearchMode::Keyword);
//! println!("{}", view.html);
//! ```

pub mod config;
pub mod debounce;
pub mod error;
pub mod loader;
pub mod render;
pub mod scoring;
pub mod search;
pub mod session;
pub mod testing;
mod types;
pub mod util;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{Messages, SearchConfig};
pub use debounce::{Debouncer, TaskId};
pub use error::LoadError;
pub use loader::{detect_format, parse_document, Fetch, IndexFormat, IndexLoader, LoadReport};
#[cfg(feature = "fs")]
pub use loader::FsFetcher;
pub use render::{RenderedView, Renderer, ViewState};
pub use search::{parse_phrase, parse_query, search, search_keywords, search_phrase, SearchOutcome};
pub use session::SearchSession;
pub use types::{Entry, EntryFields, FieldText, Match, ScoredResult, SearchIndex, SearchMode};
pub use util::normalize::{fold_diacritics, lowercase};

#[cfg(feature = "wasm")]
pub use wasm::SiteSearch;
