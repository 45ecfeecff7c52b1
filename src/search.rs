// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: a linear scan over every document.
//!
//! No inverted index, no trie. A personal site has a few hundred documents at
//! most, and scoring all of them takes well under a millisecond, so the scan
//! runs synchronously on every (debounced) keystroke.
//!
//! # Pipeline
//!
//! ```text
//! query ──trim──▶ too short? ──yes──▶ []
//!                     │no
//!                     ▼
//!          lowercase + split on whitespace
//!                     │
//!                     ▼
//!   score every doc (scoring::score_document), drop zeros
//!                     │
//!                     ▼
//!   stable sort by score desc (ties keep load order) ──▶ truncate
//! ```
//!
//! `search` is a pure function of the query and the index: same input, same
//! ordered output, every time.

use crate::config::{SearchConfig, DEFAULT_MAX_RESULTS, DEFAULT_MIN_QUERY_CHARS};
use crate::scoring::score_document;
use crate::types::{ScoredResult, SearchIndex};

/// Search with the shipped limits (2-character minimum, 10 results).
pub fn search<'a>(index: &'a SearchIndex, query: &str) -> Vec<ScoredResult<'a>> {
    search_limited(index, query, DEFAULT_MIN_QUERY_CHARS, DEFAULT_MAX_RESULTS)
}

/// Search honouring the configured minimum query length and result limit.
pub fn search_with<'a>(
    index: &'a SearchIndex,
    query: &str,
    config: &SearchConfig,
) -> Vec<ScoredResult<'a>> {
    search_limited(index, query, config.min_query_chars, config.max_results)
}

fn search_limited<'a>(
    index: &'a SearchIndex,
    query: &str,
    min_chars: usize,
    limit: usize,
) -> Vec<ScoredResult<'a>> {
    if !is_searchable(query, min_chars) {
        return Vec::new();
    }
    let terms = query_terms(query);

    let mut results: Vec<ScoredResult<'a>> = index
        .iter()
        .filter_map(|doc| {
            let tally = score_document(doc, &terms);
            tally.is_match().then_some(ScoredResult {
                doc,
                score: tally.score,
                title_matches: tally.title_matches,
                content_matches: tally.content_matches,
            })
        })
        .collect();

    let matched = results.len();
    // sort_by is stable: equal scores stay in load order
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);

    tracing::debug!(query, terms = terms.len(), matched, returned = results.len(), "search");
    results
}

/// Whether the trimmed query is long enough to run at all.
///
/// Length is counted in characters, so "é" is one character, not two bytes.
pub fn is_searchable(query: &str, min_chars: usize) -> bool {
    query.trim().chars().count() >= min_chars
}

/// Lowercase the query and split it into non-empty whitespace-separated terms.
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
