//! Determinism: ranking never depends on the seed, colors only on the seed.

use crate::common::{blog_index, common_index, render_with};
use sitesearch::{search, SearchConfig, SearchMode};

#[test]
fn test_ranking_is_repeatable() {
    let index = blog_index();
    let first = search(&index, "rust notes", SearchMode::Keyword);
    for _ in 0..5 {
        assert_eq!(search(&index, "rust notes", SearchMode::Keyword), first);
    }
}

#[test]
fn test_same_seed_same_html() {
    let index = common_index(12);
    let a = render_with(&index, "post common", SearchMode::Keyword, SearchConfig::default(), 99);
    let b = render_with(&index, "post common", SearchMode::Keyword, SearchConfig::default(), 99);
    assert_eq!(a, b);
}

#[test]
fn test_seed_changes_only_colors() {
    let index = common_index(12);
    let a = render_with(&index, "post common", SearchMode::Keyword, SearchConfig::default(), 1);
    let b = render_with(&index, "post common", SearchMode::Keyword, SearchConfig::default(), 2);
    assert_eq!(a.state, b.state);
    let urls = |v: &sitesearch::RenderedView| v.results.iter().map(|r| r.url.clone()).collect::<Vec<_>>();
    assert_eq!(urls(&a), urls(&b));
    assert_eq!(crate::common::strip_tags(&a.html), crate::common::strip_tags(&b.html));
}

#[test]
fn test_single_color_palette_is_fixed() {
    let mut config = SearchConfig::default();
    config.palette = vec!["#abcdef".to_string()];
    let view = render_with(&blog_index(), "rust", SearchMode::Keyword, config, 5);
    let spans = view.html.matches("search-keyword").count();
    assert!(spans > 0);
    assert_eq!(view.html.matches("background:#abcdef").count(), spans);
}
