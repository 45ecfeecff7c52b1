// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking. There isn't much of it.
//!
//! Linear term counting over two substring checks per term:
//!
//! | Check                          | Points |
//! |--------------------------------|--------|
//! | term ⊂ lowercase title         | 10     |
//! | term ⊂ search blob             | 1      |
//!
//! The blob starts with the title, so every title hit is also a blob hit and
//! contributes 11. That double count is how the shipped widget ranks; keep it.
//!
//! # Key Invariant: Title Dominance
//!
//! For a single-term query, any title hit (11) beats any content-only hit (1).
//! With `n` terms, a document with one more title hit than another always wins:
//! `10 > n * 1` stops holding at `n >= 10` terms, which nobody types.

use crate::types::IndexedDocument;

/// Points for a term found in the title.
pub const TITLE_MATCH_SCORE: u32 = 10;

/// Points for a term found anywhere in the search blob.
pub const CONTENT_MATCH_SCORE: u32 = 1;

/// Per-document tally for one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocScore {
    pub score: u32,
    pub title_matches: u32,
    pub content_matches: u32,
}

impl DocScore {
    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// Score one document against already-lowercased terms.
pub fn score_document<S: AsRef<str>>(doc: &IndexedDocument, terms: &[S]) -> DocScore {
    let mut tally = DocScore::default();
    for term in terms {
        let term = term.as_ref();
        if doc.title_lower.contains(term) {
            tally.title_matches += 1;
            tally.score += TITLE_MATCH_SCORE;
        }
        if doc.search_text.contains(term) {
            tally.content_matches += 1;
            tally.score += CONTENT_MATCH_SCORE;
        }
    }
    tally
}
