//! Query engine properties.

use super::common::assert_ranked;
use super::{corpus_strategy, query_strategy, word_strategy};
use proptest::prelude::*;
use sitesearch::{build_index, search, TITLE_MATCH_SCORE};

proptest! {
    /// Queries under two characters after trimming never return anything.
    #[test]
    fn prop_short_query_is_empty(
        corpus in corpus_strategy(),
        c in "[a-zA-Z]?",
        pad_left in " {0,3}",
        pad_right in " {0,3}",
    ) {
        let index = build_index(corpus);
        let query = format!("{}{}{}", pad_left, c, pad_right);
        prop_assert!(search(&index, &query).is_empty());
    }

    /// A term inside a title surfaces that document with a title hit.
    #[test]
    fn prop_title_substring_is_found(
        corpus in corpus_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!corpus.is_empty());
        let target = pick.index(corpus.len());
        let term = corpus[target]
            .title
            .split_whitespace()
            .next()
            .map(str::to_lowercase)
            .unwrap_or_default();
        prop_assume!(term.chars().count() >= 2);

        // With a large corpus the target can fall outside the top 10;
        // the property is about the document's own score.
        let index = build_index(corpus);
        let doc = index.get(target).unwrap();
        let tally = sitesearch::score_document(doc, &[term.as_str()]);
        prop_assert!(tally.title_matches >= 1);
        prop_assert!(tally.score >= TITLE_MATCH_SCORE);

        let results = search(&index, &term);
        let returned = results.iter().any(|r| r.index() == target);
        let full_page_of_title_hits = results.len() == 10
            && results.iter().all(|r| r.title_matches >= 1);
        prop_assert!(returned || full_page_of_title_hits);
    }

    /// Same index, same query, same ordered output.
    #[test]
    fn prop_search_is_idempotent(corpus in corpus_strategy(), query in query_strategy()) {
        let index = build_index(corpus);
        prop_assert_eq!(search(&index, &query), search(&index, &query));
    }

    /// Never more than ten results, however many documents match.
    #[test]
    fn prop_at_most_ten_results(
        corpus in corpus_strategy(),
        query in query_strategy(),
    ) {
        let index = build_index(corpus);
        prop_assert!(search(&index, &query).len() <= 10);
    }

    /// Scores never increase down the list; ties keep load order.
    #[test]
    fn prop_results_are_ranked(corpus in corpus_strategy(), query in query_strategy()) {
        let index = build_index(corpus);
        assert_ranked(&search(&index, &query));
    }

    /// Every returned document scored above zero, and the tallies add up.
    #[test]
    fn prop_scores_are_consistent(corpus in corpus_strategy(), query in query_strategy()) {
        let index = build_index(corpus);
        for r in search(&index, &query) {
            prop_assert!(r.score > 0);
            prop_assert_eq!(r.score, r.title_matches * 10 + r.content_matches);
            prop_assert!(r.title_matches <= r.content_matches);
        }
    }

    /// Case never changes the answer.
    #[test]
    fn prop_case_insensitive(corpus in corpus_strategy(), word in word_strategy()) {
        let index = build_index(corpus);
        prop_assert_eq!(search(&index, &word), search(&index, &word.to_uppercase()));
    }
}
