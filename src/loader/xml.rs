// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `search.xml`, as written by Hexo's search-db generator.
//!
//! ```xml
//! <search>
//!   <entry>
//!     <title>Hello World</title>
//!     <url>/2024/01/01/hello/</url>
//!     <content type="html"><![CDATA[<p>Welcome</p>]]></content>
//!   </entry>
//! </search>
//! ```
//!
//! Only `entry`, `title`, `url` and `content` elements are interpreted; a
//! missing field stays empty. Text inside unknown elements nested in a field
//! is appended to that field.

use crate::types::Entry;
use quick_xml::escape::{resolve_html5_entity, resolve_predefined_entity, unescape_with};
use quick_xml::events::{BytesText, Event};
use quick_xml::Reader;

#[derive(Debug, Clone, Copy)]
enum Field {
    Title,
    Url,
    Content,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"title" => Some(Field::Title),
            b"url" => Some(Field::Url),
            b"content" => Some(Field::Content),
            _ => None,
        }
    }

    fn of(self, entry: &mut Entry) -> &mut String {
        match self {
            Field::Title => &mut entry.title,
            Field::Url => &mut entry.url,
            Field::Content => &mut entry.content,
        }
    }
}

fn resolve_entity(name: &str) -> Option<&'static str> {
    resolve_predefined_entity(name).or_else(|| resolve_html5_entity(name))
}

/// Unescape XML and HTML named entities plus character references. An
/// entity nobody knows stays as written; its neighbours are still decoded.
fn text_of(text: &BytesText<'_>) -> String {
    let raw = String::from_utf8_lossy(text);
    if let Ok(unescaped) = unescape_with(&raw, resolve_entity) {
        return unescaped.into_owned();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest: &str = &raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let reference = rest.find(';').map(|semi| &rest[..=semi]);
        match reference.and_then(|r| unescape_with(r, resolve_entity).ok()) {
            Some(decoded) => {
                out.push_str(&decoded);
                rest = &rest[reference.map_or(0, str::len)..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Trim each field once the entry is complete. Whitespace between inline
/// elements inside a field is kept.
fn finish(mut entry: Entry) -> Entry {
    for field in [&mut entry.title, &mut entry.url, &mut entry.content] {
        let trimmed = field.trim();
        if trimmed.len() != field.len() {
            *field = trimmed.to_string();
        }
    }
    entry
}

/// Every `<entry>` of the document, in order. Completeness is not checked here.
pub fn parse_xml(body: &str) -> Result<Vec<Entry>, quick_xml::Error> {
    let mut reader = Reader::from_str(body);

    let mut entries = Vec::new();
    let mut current: Option<Entry> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event()? {
            Event::Start(tag) => {
                let name = tag.local_name();
                if name.as_ref() == b"entry" {
                    current = Some(Entry::default());
                    field = None;
                } else if field.is_none() && current.is_some() {
                    field = Field::from_tag(name.as_ref());
                }
            }
            Event::End(tag) => {
                let name = tag.local_name();
                if name.as_ref() == b"entry" {
                    entries.extend(current.take().map(finish));
                    field = None;
                } else if Field::from_tag(name.as_ref()).is_some() {
                    field = None;
                }
            }
            Event::Text(text) => {
                if let (Some(entry), Some(f)) = (current.as_mut(), field) {
                    f.of(entry).push_str(&text_of(&text));
                }
            }
            Event::CData(data) => {
                if let (Some(entry), Some(f)) = (current.as_mut(), field) {
                    f.of(entry).push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}
