//! The three empty states never blur into one another.

use crate::common::blog_index;
use proptest::prelude::*;
use sitesearch::{search, SearchIndex, SearchMode, SearchOutcome};

fn mode() -> impl Strategy<Value = SearchMode> {
    prop_oneof![Just(SearchMode::Keyword), Just(SearchMode::Phrase)]
}

proptest! {
    #[test]
    fn prop_whitespace_query_is_cleared(query in "[ \t\n]{0,8}", mode in mode()) {
        prop_assert_eq!(search(&blog_index(), &query, mode), SearchOutcome::Cleared);
        prop_assert_eq!(search(&SearchIndex::empty(), &query, mode), SearchOutcome::Cleared);
    }

    #[test]
    fn prop_empty_index_is_loading(query in "[a-z]{1,8}", mode in mode()) {
        prop_assert_eq!(search(&SearchIndex::empty(), &query, mode), SearchOutcome::Loading);
    }

    #[test]
    fn prop_found_is_never_empty(query in "[a-z ]{1,12}", mode in mode()) {
        if let SearchOutcome::Found(matches) = search(&blog_index(), &query, mode) {
            prop_assert!(!matches.is_empty());
            prop_assert!(matches.iter().all(|m| m.score > 0));
        }
    }

    #[test]
    fn prop_query_case_does_not_matter(query in "[a-zA-Z]{1,8}", mode in mode()) {
        prop_assert_eq!(
            search(&blog_index(), &query, mode),
            search(&blog_index(), &query.to_lowercase(), mode)
        );
    }
}
