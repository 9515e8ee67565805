//! Loading index documents from disk.

use crate::common::{blog_entries, block_on, to_search_xml, write_site_file};
use sitesearch::{FsFetcher, IndexFormat, IndexLoader, LoadError};
use tempfile::TempDir;

#[test]
fn test_load_search_xml() {
    let site = TempDir::new().unwrap();
    write_site_file(site.path(), "search.xml", &to_search_xml(&blog_entries()));

    let fetcher = FsFetcher::new(site.path());
    let (index, report) = block_on(IndexLoader::new("/search.xml").load_with_report(&fetcher)).unwrap();

    assert_eq!(report.format, IndexFormat::Xml);
    assert_eq!(report.parsed, 5);
    assert_eq!(report.kept, 5);
    assert_eq!(index.entries()[0].title, "Getting Started with Rust");
    assert_eq!(index.entries()[2].title, "Café Notes");
}

#[test]
fn test_load_hexo_style_document() {
    let site = TempDir::new().unwrap();
    let body = r#"<?xml version="1.0" encoding="utf-8"?>
<search>
  <entry>
    <title>Fish &amp; Chips</title>
    <link href="/ignored/"/>
    <url>/food/fish/</url>
    <content type="html"><![CDATA[<p>Crispy &nbsp; batter</p>]]></content>
    <categories><category>food</category></categories>
  </entry>
  <entry>
    <title>No URL</title>
    <content type="html"><![CDATA[orphan]]></content>
  </entry>
</search>
"#;
    write_site_file(site.path(), "search.xml", body);

    let fetcher = FsFetcher::new(site.path());
    let (index, report) = block_on(IndexLoader::new("/search.xml").load_with_report(&fetcher)).unwrap();

    assert_eq!(report.parsed, 2);
    assert_eq!(report.dropped(), 1);
    let entry = &index.entries()[0];
    assert_eq!(entry.title, "Fish & Chips");
    assert_eq!(entry.url, "/food/fish/");
    assert_eq!(entry.content, "<p>Crispy &nbsp; batter</p>");
}

#[test]
fn test_load_json_posts() {
    let site = TempDir::new().unwrap();
    let body = r#"{"posts": [
        {"title": "Alpha", "path": "/alpha/", "content": "first", "date": "2024-06-01"},
        {"title": "Beta", "permalink": "/beta/", "content": null},
        {"title": "Gamma", "link": "/gamma/"}
    ]}"#;
    write_site_file(site.path(), "content.json", body);

    let fetcher = FsFetcher::new(site.path());
    let (index, report) = block_on(IndexLoader::new("/content.json").load_with_report(&fetcher)).unwrap();

    assert_eq!(report.format, IndexFormat::Json);
    assert_eq!(index.len(), 3);
    let urls: Vec<&str> = index.entries().iter().map(|e| e.url.as_str()).collect();
    assert_eq!(urls, vec!["/alpha/", "/beta/", "/gamma/"]);
    assert_eq!(index.entries()[0].date.as_deref(), Some("2024-06-01"));
    assert_eq!(index.entries()[1].content, "");
}

#[test]
fn test_missing_file_is_transport_error() {
    let site = TempDir::new().unwrap();
    let fetcher = FsFetcher::new(site.path());
    let err = block_on(IndexLoader::new("/search.xml").load(&fetcher)).unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err, LoadError::Transport { ref path, .. } if path == "/search.xml"));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let site = TempDir::new().unwrap();
    write_site_file(site.path(), "search.json", "{\"posts\": [");
    let fetcher = FsFetcher::new(site.path());
    let err = block_on(IndexLoader::new("/search.json").load(&fetcher)).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn test_empty_document_is_empty_error() {
    let site = TempDir::new().unwrap();
    write_site_file(site.path(), "search.xml", "<?xml version=\"1.0\"?><search></search>");
    let fetcher = FsFetcher::new(site.path());
    let err = block_on(IndexLoader::new("/search.xml").load(&fetcher)).unwrap_err();
    assert_eq!(
        err,
        LoadError::Empty {
            path: "/search.xml".to_string()
        }
    );
}

#[test]
fn test_nested_path_resolves_under_root() {
    let site = TempDir::new().unwrap();
    std::fs::create_dir(site.path().join("assets")).unwrap();
    write_site_file(&site.path().join("assets"), "search.xml", &to_search_xml(&blog_entries()));
    let fetcher = FsFetcher::new(site.path());
    let index = block_on(IndexLoader::new("/assets/search.xml").load(&fetcher)).unwrap();
    assert_eq!(index.len(), 5);
}
