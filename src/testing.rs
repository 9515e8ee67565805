//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::error::LoadError;
use crate::loader::Fetch;
use crate::types::{Entry, SearchIndex};

/// Create an entry whose url is derived from its position.
pub fn make_entry(id: usize, title: &str, content: &str) -> Entry {
    Entry::new(title, format!("/post/{}/", id), content)
}

/// The two-entry index used throughout the docs: one title hit, one content hit for "hello".
pub fn hello_index() -> SearchIndex {
    SearchIndex::from_entries(vec![
        Entry::new("Hello World", "/a", "nothing relevant here"),
        Entry::new("Other", "/b", "hello there friend"),
    ])
}

/// `n` entries that all contain "common" in their content.
pub fn common_index(n: usize) -> SearchIndex {
    SearchIndex::from_entries((0..n).map(|i| make_entry(i, &format!("Post {}", i), "common words")))
}

/// Render entries as a Hexo-style `search.xml` body.
pub fn to_search_xml(entries: &[Entry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<search>\n");
    for entry in entries {
        xml.push_str(&format!(
            "  <entry>\n    <title>{}</title>\n    <url>{}</url>\n    <content type=\"html\"><![CDATA[{}]]></content>\n  </entry>\n",
            html_escape::encode_text(&entry.title),
            html_escape::encode_text(&entry.url),
            entry.content
        ));
    }
    xml.push_str("</search>\n");
    xml
}

/// A fetcher that answers every path with the same canned result.
pub struct StaticFetcher {
    pub response: Result<String, LoadError>,
}

impl StaticFetcher {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            response: Ok(body.into()),
        }
    }

    pub fn err(error: LoadError) -> Self {
        Self { response: Err(error) }
    }
}

impl Fetch for StaticFetcher {
    async fn fetch(&self, _path: &str) -> Result<String, LoadError> {
        self.response.clone()
    }
}

/// Drive a future to completion on a fresh current-thread runtime.
#[cfg(any(test, feature = "fs"))]
pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("Failed to build test runtime")
        .block_on(future)
}
