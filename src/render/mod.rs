// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering: ranked matches to HTML fragments.
//!
//! The renderer owns the only nondeterminism in the pipeline, the highlight
//! colors, and draws them from a seeded [`StdRng`]. Order, scores, counts and
//! markup structure depend only on the index and the query; seed the renderer
//! and the colors are reproducible too.
//!
//! # View states
//!
//! | Outcome    | State                    | Clear button | HTML                        |
//! |------------|--------------------------|--------------|-----------------------------|
//! | `Cleared`  | `Cleared`                | hidden       | empty                       |
//! | `Loading`  | `Loading`                | shown        | loading message             |
//! | `NotFound` | `NotFound`               | shown        | not-found message           |
//! | `Found`    | `Results{shown, total}`  | shown        | result list (+ footer)      |

pub mod highlight;
pub mod snippet;

use crate::config::SearchConfig;
use crate::search::{parse_phrase, parse_query, SearchOutcome};
use crate::types::{Entry, Match, ScoredResult, SearchIndex, SearchMode};
use crate::util::prefix_chars;
use highlight::{keyword_ranges, keyword_span, splice_html};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use snippet::snippet_window;

/// Which of the mutually exclusive UI states a view is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ViewState {
    Cleared,
    Loading,
    NotFound,
    Results { shown: usize, total: usize },
}

/// Everything the host page needs to update its result area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedView {
    pub state: ViewState,
    /// Fragment for the result container.
    pub html: String,
    /// Rendered results, in display order.
    pub results: Vec<ScoredResult>,
    /// Whether the clear affordance should be visible.
    pub show_clear: bool,
    /// Total number of matches (not just the rendered ones).
    pub count: usize,
}

impl RenderedView {
    pub fn cleared() -> Self {
        Self {
            state: ViewState::Cleared,
            html: String::new(),
            results: Vec::new(),
            show_clear: false,
            count: 0,
        }
    }

    fn message(state: ViewState, class: &str, text: &str) -> Self {
        Self {
            state,
            html: format!("<p class=\"{}\">{}</p>", class, html_escape::encode_text(text)),
            results: Vec::new(),
            show_clear: true,
            count: 0,
        }
    }
}

/// Turns search outcomes into HTML.
pub struct Renderer {
    config: SearchConfig,
    rng: StdRng,
}

impl Renderer {
    /// A renderer whose highlight colors follow from `seed`.
    pub fn new(config: SearchConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Render `outcome`, which must have come from searching `index` for `query` in `mode`.
    pub fn render(
        &mut self,
        index: &SearchIndex,
        query: &str,
        mode: SearchMode,
        outcome: &SearchOutcome,
    ) -> RenderedView {
        let messages = &self.config.messages;
        match outcome {
            SearchOutcome::Cleared => RenderedView::cleared(),
            SearchOutcome::Loading => {
                RenderedView::message(ViewState::Loading, "search-loading", &messages.loading)
            }
            SearchOutcome::NotFound => {
                RenderedView::message(ViewState::NotFound, "search-empty", &messages.not_found)
            }
            SearchOutcome::Found(matches) => match mode {
                SearchMode::Keyword => self.render_keywords(index, query, matches),
                SearchMode::Phrase => self.render_phrase(index, query, matches),
            },
        }
    }

    /// Keyword list: first `max_results` matches, prefix previews, random-color highlights.
    fn render_keywords(&mut self, index: &SearchIndex, query: &str, matches: &[Match]) -> RenderedView {
        let keywords = parse_query(query);
        let total = matches.len();
        let shown = total.min(self.config.max_results);

        let results: Vec<ScoredResult> = matches[..shown]
            .iter()
            .filter_map(|m| index.get(m.doc).map(|entry| (m.score, entry)))
            .map(|(score, entry)| self.keyword_result(score, entry, &keywords))
            .collect();

        let mut html: String = results
            .iter()
            .map(|r| {
                format!(
                    "<div class=\"search-item\"><a href=\"{}\"><h3>{}</h3></a><p>{}...</p></div>",
                    html_escape::encode_double_quoted_attribute(&r.url),
                    r.title,
                    r.content
                )
            })
            .collect();

        if total > shown {
            html.push_str(&format!(
                "<p class=\"search-footer\">{}</p>",
                html_escape::encode_text(&self.config.messages.showing(shown, total))
            ));
        }

        RenderedView {
            state: ViewState::Results { shown, total },
            html,
            results,
            show_clear: true,
            count: total,
        }
    }

    fn keyword_result(&mut self, score: u32, entry: &Entry, keywords: &[String]) -> ScoredResult {
        let preview = prefix_chars(&entry.content, self.config.preview_chars);
        ScoredResult {
            score,
            title: self.highlight_keywords(&entry.title, keywords),
            url: entry.url.clone(),
            content: self.highlight_keywords(preview, keywords),
        }
    }

    /// Wrap every keyword occurrence in a span with an independently drawn color.
    pub fn highlight_keywords(&mut self, text: &str, keywords: &[String]) -> String {
        let ranges = keyword_ranges(text, keywords);
        let palette = &self.config.palette;
        let rng = &mut self.rng;
        splice_html(text, &ranges, |inner| {
            let color = (!palette.is_empty()).then(|| palette[rng.random_range(0..palette.len())].as_str());
            keyword_span(color, inner)
        })
    }

    /// Dedicated search page: every match, snippet window, `<mark>` on the literal phrase.
    fn render_phrase(&mut self, index: &SearchIndex, query: &str, matches: &[Match]) -> RenderedView {
        let phrase = parse_phrase(query).unwrap_or_default();
        let total = matches.len();

        let mut html = String::new();
        let mut results = Vec::with_capacity(total);
        for m in matches {
            let Some(entry) = index.get(m.doc) else {
                continue;
            };
            let snippet = snippet_window(
                &entry.content,
                &phrase,
                self.config.snippet_before,
                self.config.snippet_after,
            )
            .to_html(&phrase);
            let title = html_escape::encode_text(&entry.title).into_owned();

            html.push_str(&format!(
                "<div class=\"search-result\"><h3><a href=\"{}\">{}</a></h3><div class=\"search-snippet\">{}</div>",
                html_escape::encode_double_quoted_attribute(&entry.url),
                title,
                snippet
            ));
            if let Some(date) = &entry.date {
                html.push_str(&format!(
                    "<div class=\"search-meta\">{}</div>",
                    html_escape::encode_text(date)
                ));
            }
            html.push_str("</div>");

            results.push(ScoredResult {
                score: m.score,
                title,
                url: entry.url.clone(),
                content: snippet,
            });
        }

        RenderedView {
            state: ViewState::Results { shown: results.len(), total },
            html,
            results,
            show_clear: true,
            count: total,
        }
    }
}
