// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::build_index;
use crate::types::{Document, SearchIndex};

/// Create a simple post with an empty body.
pub fn make_doc(title: &str, url: &str) -> Document {
    Document {
        title: title.to_string(),
        excerpt: format!("Excerpt for {}", title),
        content: String::new(),
        categories: None,
        tags: None,
        url: url.to_string(),
        kind: "post".to_string(),
        date: None,
    }
}

/// Create a post with every searchable field set.
pub fn make_full_doc(
    title: &str,
    excerpt: &str,
    content: &str,
    categories: &[&str],
    tags: &[&str],
) -> Document {
    Document {
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        categories: Some(categories.iter().map(|s| s.to_string()).collect()),
        tags: Some(tags.iter().map(|s| s.to_string()).collect()),
        url: format!("/{}", title.to_lowercase().replace(' ', "-")),
        kind: "post".to_string(),
        date: None,
    }
}

/// Create a document from `(title, content)` with a given url.
pub fn make_content_doc(title: &str, content: &str, url: &str) -> Document {
    Document {
        content: content.to_string(),
        ..make_doc(title, url)
    }
}

/// The two-document corpus from the ranking walkthrough:
/// a title hit ("Machine Learning Basics") and a content-only hit ("Cooking Tips").
pub fn machine_learning_corpus() -> Vec<Document> {
    vec![
        Document {
            title: "Machine Learning Basics".to_string(),
            excerpt: "intro".to_string(),
            content: "neural networks".to_string(),
            categories: None,
            tags: None,
            url: "/p1".to_string(),
            kind: "post".to_string(),
            date: None,
        },
        Document {
            title: "Cooking Tips".to_string(),
            excerpt: "pasta".to_string(),
            content: "machine learning is not discussed".to_string(),
            categories: None,
            tags: None,
            url: "/p2".to_string(),
            kind: "post".to_string(),
            date: None,
        },
    ]
}

/// Build an index from `(title, content)` pairs; urls are `/doc/{i}`.
pub fn build_test_index(docs: &[(&str, &str)]) -> SearchIndex {
    build_index(
        docs.iter()
            .enumerate()
            .map(|(i, (title, content))| make_content_doc(title, content, &format!("/doc/{}", i)))
            .collect(),
    )
}

/// A `(title, content)` corpus large enough to exercise truncation: `n` posts
/// that all mention "rust" in the body.
pub fn make_rust_corpus(n: usize) -> Vec<Document> {
    (0..n)
        .map(|i| {
            make_content_doc(
                &format!("Post {}", i),
                "notes on rust and systems programming",
                &format!("/posts/{}", i),
            )
        })
        .collect()
}
