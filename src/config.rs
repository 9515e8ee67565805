// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Everything a site might want to tune without touching the algorithm:
//! where the index lives, how long to wait after a keystroke, how much to
//! show, and the user-facing strings. Every field has a default, so a config
//! file (or JS options object) only needs the keys it changes.

use serde::{Deserialize, Serialize};

/// Path of the generated index, relative to the site root.
pub const DEFAULT_INDEX_PATH: &str = "/search.xml";

/// Quiet period after the last keystroke before a search runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Keyword mode renders at most this many results.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Keyword mode previews this many characters of content.
pub const DEFAULT_PREVIEW_CHARS: usize = 150;

/// Phrase mode snippet: context kept before the first match.
pub const DEFAULT_SNIPPET_BEFORE: usize = 20;

/// Phrase mode snippet: context kept after the end of the first match.
pub const DEFAULT_SNIPPET_AFTER: usize = 80;

/// Highlight backgrounds, one picked at random per occurrence.
pub const DEFAULT_PALETTE: [&str; 5] = ["#ffeb3b", "#ff5722", "#8bc34a", "#03a9f4", "#e91e63"];

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub not_found: String,
    pub loading: String,
    /// Footer when results were capped. `{shown}` and `{total}` are substituted.
    pub showing: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            not_found: "没有找到捏".to_string(),
            loading: "搜索数据加载中，请稍后再试".to_string(),
            showing: "显示 {shown} / {total} 条结果 (showing {shown} of {total})".to_string(),
        }
    }
}

impl Messages {
    pub fn showing(&self, shown: usize, total: usize) -> String {
        self.showing
            .replace("{shown}", &shown.to_string())
            .replace("{total}", &total.to_string())
    }
}

/// Search options, from a JSON file or a JavaScript object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Index resource path (default: "/search.xml")
    pub index_path: String,
    /// Debounce delay in milliseconds (default: 300)
    pub debounce_ms: u64,
    /// Maximum number of rendered keyword results (default: 10)
    pub max_results: usize,
    /// Characters of content shown under each keyword result (default: 150)
    pub preview_chars: usize,
    /// Snippet context before the first match (default: 20)
    pub snippet_before: usize,
    /// Snippet context after the first match (default: 80)
    pub snippet_after: usize,
    /// Highlight colors
    pub palette: Vec<String>,
    pub messages: Messages,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_path: DEFAULT_INDEX_PATH.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_results: DEFAULT_MAX_RESULTS,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            snippet_before: DEFAULT_SNIPPET_BEFORE,
            snippet_after: DEFAULT_SNIPPET_AFTER,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            messages: Messages::default(),
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
