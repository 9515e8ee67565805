//! Highlight ranges and snippet windows.

use crate::common::strip_tags;
use proptest::prelude::*;
use sitesearch::render::highlight::{keyword_ranges, merge_ranges};
use sitesearch::render::snippet::snippet_window;

fn keywords() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c]{1,3}", 1..4)
}

proptest! {
    #[test]
    fn prop_merged_ranges_sorted_and_disjoint(
        raw in prop::collection::vec((0usize..50, 1usize..10), 0..20)
    ) {
        let ranges = raw.into_iter().map(|(start, len)| start..start + len).collect();
        let merged = merge_ranges(ranges);
        for pair in merged.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn prop_keyword_ranges_cover_matching_text(text in "[a-cA-C ]{0,40}", kws in keywords()) {
        for range in keyword_ranges(&text, &kws) {
            let matched = text[range].to_lowercase();
            prop_assert!(kws.iter().any(|k| matched == *k));
        }
    }

    #[test]
    fn prop_snippet_respects_window(
        content in "[a-z ]{0,300}",
        phrase in "[a-z]{1,4}",
        before in 0usize..30,
        after in 0usize..100,
    ) {
        let snippet = snippet_window(&content, &phrase, before, after);
        prop_assert!(content.contains(snippet.text));
        prop_assert!(snippet.text.chars().count() <= before + phrase.len() + after);
        if content.contains(&phrase) {
            prop_assert!(snippet.text.contains(&phrase));
        }
    }

    #[test]
    fn prop_snippet_html_keeps_text(content in "[a-z<>& ]{0,120}", phrase in "[a-z]{1,3}") {
        let snippet = snippet_window(&content, &phrase, 20, 80);
        let visible = strip_tags(&snippet.to_html(&phrase));
        let expected = html_escape::encode_text(snippet.text);
        prop_assert!(visible.contains(expected.as_ref()));
    }
}
