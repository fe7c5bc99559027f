//! Whole-document output.

use fuzzline::{begin_marker, end_marker, render, search, InclusionMode, Rendered, SearchConfig, DEFAULT_PREAMBLE};

use crate::common::{make_corpus, notes_corpus};

fn documents_config() -> SearchConfig {
    SearchConfig {
        mode: InclusionMode::Documents,
        ..SearchConfig::default()
    }
}

#[test]
fn test_matching_document_is_returned_verbatim() {
    let corpus = notes_corpus();
    let config = documents_config();
    let result = search(&corpus, "what evicts the oldest entry", &config);

    let text = match render(&result, config.mode, None) {
        Rendered::Documents(text) => text,
        other => panic!("expected documents, got {:?}", other),
    };
    let cache = &corpus.documents()[0];
    assert_eq!(
        text,
        format!("{}\n{}\n{}", begin_marker("cache.md"), cache.content, end_marker("cache.md"))
    );
}

#[test]
fn test_documents_keep_scan_order_not_score_order() {
    let corpus = make_corpus(&[
        ("weak.md", "the cache evict"),
        ("other.md", "nothing here"),
        ("strong.md", "the cache evicts"),
    ]);
    let result = search(&corpus, "how does the cache evicts", &documents_config());
    let text = match render(&result, InclusionMode::Documents, None) {
        Rendered::Documents(text) => text,
        other => panic!("expected documents, got {:?}", other),
    };

    assert_eq!(
        text,
        "==INIT-FILE: weak.md==\nthe cache evict\n==END-FILE: weak.md==\n\n\
         ==INIT-FILE: strong.md==\nthe cache evicts\n==END-FILE: strong.md=="
    );
    // Line mode over the same result still ranks the exact line first.
    assert_eq!(result.matches[0].document, "strong.md");
}

#[test]
fn test_preamble_goes_first() {
    let result = search(&notes_corpus(), "what evicts the oldest entry", &documents_config());
    match render(&result, InclusionMode::Documents, Some(DEFAULT_PREAMBLE)) {
        Rendered::Documents(text) => {
            let mut lines = text.lines();
            assert_eq!(lines.next(), Some(DEFAULT_PREAMBLE));
            assert_eq!(lines.next(), Some("==INIT-FILE: cache.md=="));
        }
        other => panic!("expected documents, got {:?}", other),
    }
}

#[test]
fn test_no_match_is_explicit_in_documents_mode() {
    let result = search(&notes_corpus(), "what banana smoothie recipe", &documents_config());
    assert_eq!(render(&result, InclusionMode::Documents, None), Rendered::NoMatches);
}
