//! Ordering of aggregated results.

use fuzzline::{aggregate, search, Document, DocumentMatches, LineMatch, ScoreMode, SearchConfig};

use crate::common::{make_corpus, match_positions, ungated_config};

fn line_match(document: &str, line_number: usize, score: f64) -> LineMatch {
    LineMatch {
        document: document.to_string(),
        line_number,
        content: String::new(),
        context: vec![],
        context_start: line_number,
        score,
        matched_terms: vec![],
    }
}

#[test]
fn test_better_line_in_later_document_ranks_first() {
    let result = aggregate(vec![
        DocumentMatches {
            document: Document::new("first.md", "a"),
            matches: vec![line_match("first.md", 1, 0.95)],
        },
        DocumentMatches {
            document: Document::new("second.md", "b"),
            matches: vec![line_match("second.md", 7, 0.99)],
        },
    ]);
    assert_eq!(
        match_positions(&result.matches),
        vec![("second.md".to_string(), 7), ("first.md".to_string(), 1)]
    );
}

#[test]
fn test_exact_line_beats_typo_line() {
    let corpus = make_corpus(&[
        ("typo.md", "the cache evict entri"),
        ("exact.md", "the cache evicts entry"),
    ]);
    let result = search(&corpus, "cache evicts entry", &ungated_config());
    assert_eq!(
        match_positions(&result.matches),
        vec![("exact.md".to_string(), 1), ("typo.md".to_string(), 1)]
    );
    assert_eq!(result.matches[0].score, 1.0);
    assert!(result.matches[1].score < 1.0);
}

#[test]
fn test_ties_keep_corpus_then_line_order() {
    let corpus = make_corpus(&[
        ("b.md", "cache evicts\nnoise\ncache evicts"),
        ("a.md", "cache evicts"),
    ]);
    let result = search(&corpus, "cache evicts", &ungated_config());
    assert_eq!(
        match_positions(&result.matches),
        vec![
            ("b.md".to_string(), 1),
            ("b.md".to_string(), 3),
            ("a.md".to_string(), 1),
        ]
    );
}

#[test]
fn test_score_modes_differ_on_repeated_near_matches() {
    let corpus = make_corpus(&[("c.md", "cache caches evicts")]);

    let all_pairs = search(&corpus, "cache evicts", &ungated_config());
    let best = search(
        &corpus,
        "cache evicts",
        &SearchConfig {
            score_mode: ScoreMode::BestPerQueryWord,
            ..ungated_config()
        },
    );

    // cache~cache 1.0, cache~caches 5/6, evicts~evicts 1.0
    let expected = (1.0 + (1.0 - 1.0 / 6.0) + 1.0) / 3.0;
    assert!((all_pairs.matches[0].score - expected).abs() < 1e-12);
    assert_eq!(best.matches[0].score, 1.0);
}
