// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search index.
//!
//! Three layers, each wrapping the previous one:
//!
//! | Type              | Created by      | Lifetime                     |
//! |-------------------|-----------------|------------------------------|
//! | `Document`        | index loader    | whole page                   |
//! | `IndexedDocument` | index builder   | whole page, never mutated    |
//! | `ScoredResult`    | query engine    | one query, discarded after render |
//!
//! # Invariants
//!
//! - **IndexedDocument**: `search_text == search_text(&document)` and
//!   `index` is the document's position in the loaded array.
//! - **SearchIndex**: `docs[i].index == i`. Built once, read-only after.
//! - **ScoredResult**: `score >= 1`. Zero-score documents never become results.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// One indexable content item (post, project, publication) as served by the site.
///
/// Field names follow the JSON the static-site generator emits. `type` is a
/// keyword in Rust, hence `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Document {
    /// Categories, treating an absent list as empty.
    pub fn categories(&self) -> &[String] {
        self.categories.as_deref().unwrap_or_default()
    }

    /// Tags, treating an absent list as empty.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// A document plus its precomputed lowercase search blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedDocument {
    #[serde(flatten)]
    pub document: Document,
    /// Lowercased `title excerpt content categories tags`.
    pub search_text: String,
    /// Lowercased title, cached so queries don't lowercase it per term.
    #[serde(skip)]
    pub title_lower: String,
    /// Position in the loaded array. Stable, used for traceability and tie order.
    pub index: usize,
}

impl Deref for IndexedDocument {
    type Target = Document;

    fn deref(&self) -> &Document {
        &self.document
    }
}

/// A per-query view over an indexed document.
///
/// Borrows the document so a query never copies the corpus. Results are
/// rendered and dropped; nothing is written back to the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult<'a> {
    #[serde(flatten)]
    pub doc: &'a IndexedDocument,
    pub score: u32,
    pub title_matches: u32,
    pub content_matches: u32,
}

impl ScoredResult<'_> {
    pub fn title(&self) -> &str {
        &self.doc.title
    }

    pub fn url(&self) -> &str {
        &self.doc.url
    }

    /// Original position of the document in the index.
    pub fn index(&self) -> usize {
        self.doc.index
    }

    pub fn matched_title(&self) -> bool {
        self.title_matches > 0
    }
}

/// The in-memory index: every loaded document, indexed, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchIndex {
    pub docs: Vec<IndexedDocument>,
}

impl SearchIndex {
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&IndexedDocument> {
        self.docs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexedDocument> {
        self.docs.iter()
    }
}
