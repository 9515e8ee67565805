//! Debounced input through a session.

use crate::common::blog_index;
use sitesearch::{SearchConfig, SearchMode, SearchSession, ViewState};

fn session(delay: u64) -> SearchSession {
    let mut config = SearchConfig::default();
    config.debounce_ms = delay;
    SearchSession::with_index(blog_index(), config, 3)
}

#[test]
fn test_typing_burst_runs_once() {
    let mut session = session(300);
    let mut ran = Vec::new();
    for (t, query) in [(0, "r"), (80, "ru"), (160, "rus"), (240, "rust")] {
        session.on_input(t, query, SearchMode::Keyword);
        if let Some(view) = session.poll(t) {
            ran.push(view);
        }
    }
    assert!(ran.is_empty());
    assert_eq!(session.deadline(), Some(540));

    let view = session.poll(540).unwrap();
    assert_eq!(view.state, ViewState::Results { shown: 3, total: 3 });
    assert!(session.poll(2000).is_none());
}

#[test]
fn test_stale_timer_is_ignored() {
    let mut session = session(300);
    let stale = session.on_input(0, "rust", SearchMode::Keyword);
    let live = session.on_input(100, "café", SearchMode::Keyword);
    assert!(session.fire(stale, 300).is_none());
    assert!(session.fire(live, 400).is_some());
}

#[test]
fn test_clear_during_quiet_period() {
    let mut session = session(300);
    session.on_input(0, "rust", SearchMode::Keyword);
    assert_eq!(session.clear().state, ViewState::Cleared);
    assert_eq!(session.deadline(), None);
    assert!(session.poll(1000).is_none());
}

#[test]
fn test_zero_delay_is_due_immediately() {
    let mut session = session(0);
    session.on_input(50, "rust", SearchMode::Phrase);
    assert!(session.poll(50).is_some());
}
