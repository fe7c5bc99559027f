//! Properties of whole-corpus searches.

use fuzzline::{
    distinct_words, evaluate_document, scan, search, Corpus, LineMatch, LineParams, Query,
};
use proptest::prelude::*;

use crate::common::{corpus_strategy, query_strategy, ungated_config};

proptest! {
    /// Property: results are sorted by score, best first.
    #[test]
    fn prop_results_sorted(corpus in corpus_strategy(), query in query_strategy()) {
        let result = search(&corpus, &query, &ungated_config());
        for pair in result.matches.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Property: the same query over the same corpus gives the same answer.
    #[test]
    fn prop_search_deterministic(corpus in corpus_strategy(), query in query_strategy()) {
        let config = ungated_config();
        let first = search(&corpus, &query, &config);
        let second = search(&corpus, &query, &config);
        prop_assert_eq!(first, second);
    }

    /// Property: a scan equals evaluating each document in order, then a
    /// stable sort by score.
    #[test]
    fn prop_scan_matches_sequential_oracle(corpus in corpus_strategy(), query in query_strategy()) {
        let config = ungated_config();
        let params = LineParams::from(&config);
        let words = distinct_words(&query);

        let mut expected: Vec<LineMatch> = corpus
            .documents()
            .iter()
            .flat_map(|doc| evaluate_document(doc, &words, &params))
            .collect();
        expected.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());

        let result = scan(&corpus, &Query::parse(&query), &config);
        prop_assert_eq!(result.matches, expected);
    }

    /// Property: inclusion flags agree with the matches.
    #[test]
    fn prop_inclusion_consistent(corpus in corpus_strategy(), query in query_strategy()) {
        let result = search(&corpus, &query, &ungated_config());
        prop_assert!(result.is_complete());
        prop_assert_eq!(result.documents.len(), corpus.len());

        for (i, entry) in result.documents.iter().enumerate() {
            prop_assert_eq!(entry.id.as_str(), corpus.id(i));
            let has_match = result.matches.iter().any(|m| m.document == entry.id);
            prop_assert_eq!(entry.included, has_match);
            prop_assert_eq!(entry.best_score.is_some(), has_match);
        }
    }
}
