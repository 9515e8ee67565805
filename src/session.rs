// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine as a page sees it.
//!
//! A `SearchSession` owns the loaded index, the renderer and the input
//! debouncer. There is no module-level state: whoever wires up the page
//! constructs one session at startup and routes events into it.
//!
//! ```text
//! keystroke ─▶ on_input ─▶ Debouncer ─(quiet period)─▶ poll/fire
//!                                                        │
//!                               SearchIndex ─▶ search ─▶ Renderer ─▶ RenderedView
//! ```

use crate::config::SearchConfig;
use crate::debounce::{Debouncer, TaskId};
use crate::error::LoadError;
use crate::loader::{Fetch, IndexLoader, LoadReport};
use crate::render::{RenderedView, Renderer};
use crate::search::search;
use crate::types::{SearchIndex, SearchMode};

#[derive(Debug, Clone)]
struct QueuedQuery {
    query: String,
    mode: SearchMode,
}

pub struct SearchSession {
    index: SearchIndex,
    renderer: Renderer,
    debouncer: Debouncer<QueuedQuery>,
}

impl SearchSession {
    /// A session with nothing loaded yet. `seed` drives highlight colors.
    pub fn new(config: SearchConfig, seed: u64) -> Self {
        Self::with_index(SearchIndex::empty(), config, seed)
    }

    pub fn with_index(index: SearchIndex, config: SearchConfig, seed: u64) -> Self {
        let debouncer = Debouncer::new(config.debounce_ms);
        Self {
            index,
            renderer: Renderer::new(config, seed),
            debouncer,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        self.renderer.config()
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn is_loaded(&self) -> bool {
        self.index.is_loaded()
    }

    /// Install a loaded index. The index is written once per page; later
    /// calls are ignored so a search never sees entries change under it.
    pub fn set_index(&mut self, index: SearchIndex) -> bool {
        if self.index.is_loaded() {
            log::warn!("search index already loaded, ignoring {} new entries", index.len());
            return false;
        }
        self.index = index;
        true
    }

    /// Load the configured index resource through `fetcher`.
    ///
    /// On failure the session keeps its empty index and keeps answering
    /// with the loading state.
    pub async fn load<F: Fetch>(&mut self, fetcher: &F) -> Result<LoadReport, LoadError> {
        let loader = IndexLoader::from_config(self.config());
        let (index, report) = loader.load_with_report(fetcher).await?;
        self.set_index(index);
        Ok(report)
    }

    /// Search and render right away, bypassing the debouncer.
    pub fn search(&mut self, query: &str, mode: SearchMode) -> RenderedView {
        let outcome = search(&self.index, query, mode);
        self.renderer.render(&self.index, query, mode, &outcome)
    }

    /// Record a keystroke. Any query still waiting is superseded.
    pub fn on_input(&mut self, now_ms: u64, query: &str, mode: SearchMode) -> TaskId {
        self.debouncer.schedule(
            now_ms,
            QueuedQuery {
                query: query.to_string(),
                mode,
            },
        )
    }

    /// When the pending query becomes due, if there is one.
    pub fn deadline(&self) -> Option<u64> {
        self.debouncer.deadline()
    }

    /// Run the pending query if its quiet period is over.
    pub fn poll(&mut self, now_ms: u64) -> Option<RenderedView> {
        let queued = self.debouncer.poll(now_ms)?;
        Some(self.search(&queued.query, queued.mode))
    }

    /// Run the pending query if it is still `id` and due. For host timers,
    /// which may outlive the keystroke that armed them.
    pub fn fire(&mut self, id: TaskId, now_ms: u64) -> Option<RenderedView> {
        let queued = self.debouncer.fire(id, now_ms)?;
        Some(self.search(&queued.query, queued.mode))
    }

    /// The clear button: drop any pending query and empty the results.
    pub fn clear(&mut self) -> RenderedView {
        self.debouncer.cancel();
        RenderedView::cleared()
    }
}
