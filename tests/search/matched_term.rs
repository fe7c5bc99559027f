//! Which query word a matched term is reported under.

use fuzzline::search;

use crate::common::{make_corpus, ungated_config};

#[test]
fn test_reports_first_query_word_that_clears_threshold() {
    // "caches" in the line pairs with both query words; both pairs are
    // reported under "cache", the earlier query word.
    let corpus = make_corpus(&[("c.md", "caches")]);
    let result = search(&corpus, "cache caches", &ungated_config());

    let terms: Vec<(&str, &str)> = result.matches[0]
        .matched_terms
        .iter()
        .map(|t| (t.query_word.as_str(), t.matched_word.as_str()))
        .collect();
    assert_eq!(terms, vec![("cache", "caches"), ("cache", "caches")]);
}

#[test]
fn test_similarity_is_the_pairs_own() {
    let corpus = make_corpus(&[("c.md", "caches")]);
    let result = search(&corpus, "cache caches", &ungated_config());
    let sims: Vec<f64> = result.matches[0].matched_terms.iter().map(|t| t.similarity).collect();
    assert!((sims[0] - (1.0 - 1.0 / 6.0)).abs() < 1e-12);
    assert_eq!(sims[1], 1.0);
}

#[test]
fn test_serialized_terms_are_camel_case() {
    let corpus = make_corpus(&[("c.md", "the cache evicts")]);
    let result = search(&corpus, "cache evicts", &ungated_config());
    let json = serde_json::to_value(&result.matches[0]).unwrap();

    assert_eq!(json["lineNumber"], 1);
    assert_eq!(json["contextStart"], 1);
    assert_eq!(json["matchedTerms"][0]["queryWord"], "cache");
    assert_eq!(json["matchedTerms"][0]["matchedWord"], "cache");
}
