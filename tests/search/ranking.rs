//! Ranking: title dominance, multi-term accumulation, ties, truncation.

use super::common::{assert_ranked, build_test_index, fixture_index, make_rust_corpus, urls};
use sitesearch::{build_index, search, search_with, SearchConfig};

#[test]
fn test_title_hit_beats_any_single_term_body_hit() {
    let index = build_test_index(&[
        ("Notes", "rust rust rust rust rust"),
        ("Rust", ""),
    ]);
    let results = search(&index, "rust");
    assert_eq!(urls(&results), vec!["/doc/1", "/doc/0"]);
    // Repeated occurrences do not add up
    assert_eq!(results[1].score, 1);
}

#[test]
fn test_scores_accumulate_per_term() {
    let index = build_test_index(&[
        ("Rust Wasm", ""),
        ("Rust", "wasm"),
        ("Other", "rust wasm"),
    ]);
    let results = search(&index, "rust wasm");

    let scores: Vec<u32> = results.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![22, 12, 2]);
    assert_eq!(results[0].title_matches, 2);
    assert_eq!(results[1].title_matches, 1);
    assert_eq!(results[2].title_matches, 0);
}

#[test]
fn test_partial_term_coverage_still_matches() {
    let index = build_test_index(&[("Rust", ""), ("Go", "")]);
    let results = search(&index, "rust haskell");
    assert_eq!(urls(&results), vec!["/doc/0"]);
    assert_eq!(results[0].score, 11);
}

#[test]
fn test_ties_keep_load_order() {
    let index = build_index(make_rust_corpus(5));
    let results = search(&index, "rust");
    assert_eq!(
        urls(&results),
        vec!["/posts/0", "/posts/1", "/posts/2", "/posts/3", "/posts/4"]
    );
    assert_ranked(&results);
}

#[test]
fn test_truncated_to_ten() {
    let index = build_index(make_rust_corpus(25));
    let results = search(&index, "rust");
    assert_eq!(results.len(), 10);
    assert_eq!(results[9].url(), "/posts/9");
}

#[test]
fn test_configured_limit() {
    let index = build_index(make_rust_corpus(25));
    let config = SearchConfig {
        max_results: 3,
        ..Default::default()
    };
    assert_eq!(search_with(&index, "rust", &config).len(), 3);

    let config = SearchConfig {
        max_results: 50,
        ..Default::default()
    };
    assert_eq!(search_with(&index, "rust", &config).len(), 25);
}

#[test]
fn test_fixture_rankings_are_ordered() {
    let index = fixture_index();
    for query in ["rust", "teaching", "search", "the", "salt water", "ml python"] {
        assert_ranked(&search(&index, query));
    }
}
