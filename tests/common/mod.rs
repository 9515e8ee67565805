//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sitesearch::{search, Entry, RenderedView, Renderer, SearchConfig, SearchIndex, SearchMode};
use std::fs;
use std::path::{Path, PathBuf};

// Re-export canonical test utilities from sitesearch::testing
pub use sitesearch::testing::{common_index, hello_index, make_entry, to_search_xml, StaticFetcher};
#[cfg(feature = "fs")]
pub use sitesearch::testing::block_on;

// ============================================================================
// FIXTURES
// ============================================================================

/// A small blog: mixed-case titles, markup in content, accents, a dated post.
pub fn blog_entries() -> Vec<Entry> {
    vec![
        Entry::new(
            "Getting Started with Rust",
            "/2024/01/rust-start/",
            "Rust is a systems language. Install rustup and write hello world.",
        )
        .with_date("2024-01-12"),
        Entry::new(
            "WebAssembly in the Browser",
            "/2024/02/wasm/",
            "Compile Rust to WebAssembly and call it from JavaScript.",
        ),
        Entry::new("Café Notes", "/2024/03/cafe/", "Espresso, crème brûlée and a résumé of the week."),
        Entry::new("Release Notes", "/2024/04/release/", "Nothing about the language here."),
        Entry::new("rust", "/tags/rust/", "Posts tagged rust."),
    ]
}

pub fn blog_index() -> SearchIndex {
    SearchIndex::from_entries(blog_entries())
}

// ============================================================================
// HELPERS
// ============================================================================

/// Search and render with a fixed seed.
pub fn render(index: &SearchIndex, query: &str, mode: SearchMode) -> RenderedView {
    render_with(index, query, mode, SearchConfig::default(), 7)
}

pub fn render_with(
    index: &SearchIndex,
    query: &str,
    mode: SearchMode,
    config: SearchConfig,
    seed: u64,
) -> RenderedView {
    let outcome = search(index, query, mode);
    Renderer::new(config, seed).render(index, query, mode, &outcome)
}

/// URLs of the matched entries, in ranked order.
pub fn ranked_urls(index: &SearchIndex, query: &str, mode: SearchMode) -> Vec<String> {
    search(index, query, mode)
        .matches()
        .iter()
        .filter_map(|m| index.get(m.doc))
        .map(|e| e.url.clone())
        .collect()
}

/// Strip tags from rendered HTML, leaving the text a reader would see (still escaped).
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Write `body` as `<dir>/<name>` and return the file path.
pub fn write_site_file(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("Failed to write site file");
    path
}
