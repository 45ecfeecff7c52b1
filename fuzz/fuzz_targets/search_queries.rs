// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary corpora and queries. Search must never panic, never return more
//! than ten results, and never break score order.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitesearch::{build_index, search, Document};

#[derive(Debug, Arbitrary)]
struct Input {
    docs: Vec<(String, String, String, Option<Vec<String>>)>,
    query: String,
}

fuzz_target!(|input: Input| {
    let docs: Vec<Document> = input
        .docs
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, (title, excerpt, content, tags))| Document {
            title,
            excerpt,
            content,
            categories: None,
            tags,
            url: format!("/doc/{}", i),
            kind: "post".to_string(),
            date: None,
        })
        .collect();
    let doc_count = docs.len();
    let index = build_index(docs);

    let query: String = input.query.chars().take(200).collect();
    let results = search(&index, &query);

    // INVARIANT 1: Results bounded by the limit
    assert!(results.len() <= 10, "got {} results", results.len());

    // INVARIANT 2: Every result points at a real document
    for r in &results {
        assert!(r.index() < doc_count);
        assert!(r.score > 0);
    }

    // INVARIANT 3: Scores non-increasing, ties in load order
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].index() < pair[1].index());
        }
    }

    // INVARIANT 4: Short queries return nothing
    if query.trim().chars().count() < 2 {
        assert!(results.is_empty());
    }

    // INVARIANT 5: Deterministic
    assert_eq!(results, search(&index, &query));
});
