//! Ranking tests: weights, quirks, and tie order.

use crate::common::{blog_index, hello_index, ranked_urls};
use sitesearch::{search, Entry, SearchIndex, SearchMode};

fn scores(index: &SearchIndex, query: &str, mode: SearchMode) -> Vec<(String, u32)> {
    search(index, query, mode)
        .matches()
        .iter()
        .map(|m| (index.get(m.doc).unwrap().url.clone(), m.score))
        .collect()
}

#[test]
fn test_title_hit_outranks_content_hit() {
    let index = hello_index();
    // title: +5; content: +1 and +2 bonus (plain content contains "hello")
    assert_eq!(
        scores(&index, "hello", SearchMode::Keyword),
        vec![("/a".to_string(), 5), ("/b".to_string(), 3)]
    );
}

#[test]
fn test_exact_title_gets_bonus() {
    let index = SearchIndex::from_entries(vec![
        Entry::new("Rust", "/exact", ""),
        Entry::new("Rust tips", "/partial", ""),
    ]);
    assert_eq!(
        scores(&index, "rust", SearchMode::Keyword),
        vec![("/exact".to_string(), 7), ("/partial".to_string(), 5)]
    );
}

#[test]
fn test_scores_add_across_keywords() {
    let index = blog_index();
    let both = scores(&index, "rust webassembly", SearchMode::Keyword);
    let wasm_post = both.iter().find(|(url, _)| url == "/2024/02/wasm/").unwrap();
    // "rust" in content only (1 + 2), "webassembly" in title and content (5 + 1 + 2)
    assert_eq!(wasm_post.1, 11);
}

#[test]
fn test_repeated_keyword_counts_once() {
    let index = hello_index();
    assert_eq!(
        scores(&index, "hello hello HELLO", SearchMode::Keyword),
        scores(&index, "hello", SearchMode::Keyword)
    );
}

#[test]
fn test_case_insensitive() {
    let index = blog_index();
    assert_eq!(
        ranked_urls(&index, "RUST", SearchMode::Keyword),
        ranked_urls(&index, "rust", SearchMode::Keyword)
    );
}

#[test]
fn test_equal_scores_keep_index_order() {
    let index = SearchIndex::from_entries(vec![
        Entry::new("First", "/1", "shared"),
        Entry::new("Second", "/2", "shared"),
        Entry::new("Third", "/3", "shared"),
    ]);
    assert_eq!(ranked_urls(&index, "shared", SearchMode::Keyword), vec!["/1", "/2", "/3"]);
}

#[test]
#[cfg(feature = "unicode-normalization")]
fn test_accent_insensitive_matching() {
    let index = blog_index();
    assert_eq!(ranked_urls(&index, "cafe", SearchMode::Keyword), vec!["/2024/03/cafe/"]);
    assert_eq!(ranked_urls(&index, "creme", SearchMode::Keyword), vec!["/2024/03/cafe/"]);
}

#[test]
fn test_phrase_weights() {
    let index = blog_index();
    let ranked = scores(&index, "rust", SearchMode::Phrase);
    // tag page and getting-started: title 2 + content 1; wasm post: content 1
    assert_eq!(
        ranked,
        vec![
            ("/2024/01/rust-start/".to_string(), 3),
            ("/tags/rust/".to_string(), 3),
            ("/2024/02/wasm/".to_string(), 1),
        ]
    );
}

#[test]
fn test_phrase_requires_contiguous_match() {
    let index = blog_index();
    assert!(ranked_urls(&index, "rust to webassembly", SearchMode::Phrase).contains(&"/2024/02/wasm/".to_string()));
    assert!(ranked_urls(&index, "webassembly rust", SearchMode::Phrase).is_empty());
}
