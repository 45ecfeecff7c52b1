//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sitesearch::{build_index, load_path, Document, ScoredResult, SearchIndex};
use std::path::{Path, PathBuf};

// Re-export canonical test utilities from sitesearch::testing
pub use sitesearch::testing::{
    build_test_index, machine_learning_corpus, make_content_doc, make_doc, make_full_doc,
    make_rust_corpus,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// A built site root containing `search.json`.
pub const FIXTURE_SITE: &str = "tests/fixtures/site";

pub fn fixture_site() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(FIXTURE_SITE)
}

pub fn fixture_docs() -> Vec<Document> {
    load_path(&fixture_site(), "/search.json").expect("fixture index should load")
}

pub fn fixture_index() -> SearchIndex {
    build_index(fixture_docs())
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub fn urls<'a>(results: &'a [ScoredResult<'_>]) -> Vec<&'a str> {
    results.iter().map(|r| r.url()).collect()
}

/// Scores never increase down the list, and equal scores keep load order.
pub fn assert_ranked(results: &[ScoredResult<'_>]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "scores out of order: {} ({}) before {} ({})",
            pair[0].url(),
            pair[0].score,
            pair[1].url(),
            pair[1].score
        );
        if pair[0].score == pair[1].score {
            assert!(
                pair[0].index() < pair[1].index(),
                "tie at score {} not in load order: #{} before #{}",
                pair[0].score,
                pair[0].index(),
                pair[1].index()
            );
        }
    }
}
