// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search index construction.
//!
//! A pure map from documents to indexed documents. No tokenization, no
//! stemming, no stop words: the search blob is the fields glued together with
//! single spaces and lowercased, so a query term matches anything that is a
//! substring of it, including across field boundaries.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **FIELD_ORDER**: title, excerpt, content, categories, tags. Always.
//! 2. **ABSENT_IS_EMPTY**: missing categories/tags contribute an empty string,
//!    so the separators are still there (`"t e c  "` for no categories or tags).
//! 3. **STABLE_POSITION**: `docs[i].index == i`.
//! 4. **BUILT_ONCE**: the returned index is never mutated.

use crate::types::{Document, IndexedDocument, SearchIndex};

/// Build the in-memory index. Consumes the loaded documents.
pub fn build_index(docs: Vec<Document>) -> SearchIndex {
    let docs: Vec<IndexedDocument> = docs
        .into_iter()
        .enumerate()
        .map(|(index, document)| IndexedDocument {
            search_text: search_text(&document),
            title_lower: document.title.to_lowercase(),
            document,
            index,
        })
        .collect();

    tracing::debug!(
        docs = docs.len(),
        blob_bytes = docs.iter().map(|d| d.search_text.len()).sum::<usize>(),
        "built search index"
    );
    SearchIndex { docs }
}

/// The lowercase blob every query term is matched against.
pub fn search_text(doc: &Document) -> String {
    let categories = doc.categories().join(" ");
    let tags = doc.tags().join(" ");
    [
        doc.title.as_str(),
        doc.excerpt.as_str(),
        doc.content.as_str(),
        categories.as_str(),
        tags.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}
