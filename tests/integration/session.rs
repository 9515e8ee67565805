//! A page's lifetime: start empty, load once, search, clear.

use crate::common::{blog_entries, block_on, to_search_xml, write_site_file, StaticFetcher};
use sitesearch::{FsFetcher, LoadError, SearchConfig, SearchMode, SearchSession, ViewState};
use tempfile::TempDir;

#[test]
fn test_searches_before_and_after_load() {
    let site = TempDir::new().unwrap();
    write_site_file(site.path(), "search.xml", &to_search_xml(&blog_entries()));

    let mut session = SearchSession::new(SearchConfig::default(), 11);
    assert_eq!(session.search("rust", SearchMode::Keyword).state, ViewState::Loading);

    let report = block_on(session.load(&FsFetcher::new(site.path()))).unwrap();
    assert_eq!(report.kept, 5);
    assert!(session.is_loaded());

    let view = session.search("rust", SearchMode::Keyword);
    assert_eq!(view.state, ViewState::Results { shown: 3, total: 3 });
    // equal scores: the earlier entry wins
    assert_eq!(view.results[0].url, "/2024/01/rust-start/");
    assert_eq!(view.results[1].url, "/tags/rust/");
}

#[test]
fn test_failed_load_keeps_loading_state() {
    let mut session = SearchSession::new(SearchConfig::default(), 11);
    let fetcher = StaticFetcher::err(LoadError::Status {
        path: "/search.xml".to_string(),
        status: 404,
    });
    assert!(block_on(session.load(&fetcher)).is_err());
    assert!(!session.is_loaded());
    assert_eq!(session.search("rust", SearchMode::Keyword).state, ViewState::Loading);
    assert_eq!(session.search("", SearchMode::Keyword).state, ViewState::Cleared);
}

#[test]
fn test_second_load_does_not_replace_index() {
    let mut session = SearchSession::new(SearchConfig::default(), 11);
    block_on(session.load(&StaticFetcher::ok(to_search_xml(&blog_entries())))).unwrap();
    let other = vec![sitesearch::Entry::new("Only", "/only", "")];
    block_on(session.load(&StaticFetcher::ok(to_search_xml(&other)))).unwrap();
    assert_eq!(session.index().len(), 5);
}

#[test]
fn test_clear_after_results() {
    let mut session = SearchSession::new(SearchConfig::default(), 11);
    block_on(session.load(&StaticFetcher::ok(to_search_xml(&blog_entries())))).unwrap();
    assert!(session.search("notes", SearchMode::Keyword).show_clear);
    let view = session.clear();
    assert_eq!(view.state, ViewState::Cleared);
    assert!(view.html.is_empty());
    assert!(!view.show_clear);
}
