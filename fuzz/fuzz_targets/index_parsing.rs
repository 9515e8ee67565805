// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index document parsing.
//!
//! Whatever the server sends back, the loader either produces an index of
//! complete entries or a typed error. It never panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitesearch::{parse_document, LoadError};

fuzz_target!(|data: &[u8]| {
    let body = String::from_utf8_lossy(data);

    match parse_document("/search.xml", &body) {
        Ok((index, report)) => {
            assert!(!index.is_empty());
            assert_eq!(report.kept, index.len());
            assert!(report.parsed >= report.kept);
            assert!(index.entries().iter().all(|e| e.is_complete()));
        }
        Err(LoadError::Parse { .. } | LoadError::Empty { .. }) => {}
        Err(other) => panic!("unexpected error from parsing alone: {}", other),
    }
});
