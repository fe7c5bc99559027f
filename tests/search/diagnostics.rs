//! Directory corpora, unreadable documents and partial scans.

use std::fs;
use std::time::{Duration, Instant};

use fuzzline::{search, search_with_options, DirectoryCorpus, ScanOptions, ScanStatus, SearchConfig};

use crate::common::{write_corpus, CACHE_LINE};

#[test]
fn test_directory_search_end_to_end() {
    let dir = write_corpus(&[
        ("cache.md", format!("intro\n{}\n", CACHE_LINE).as_str()),
        ("nested/deep.md", CACHE_LINE),
        ("fruit.md", "apples"),
    ]);

    let flat = DirectoryCorpus::open(dir.path()).unwrap();
    let result = search(&flat, "what evicts the entry", &SearchConfig::default());
    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].document, "cache.md");
    assert_eq!(result.matches[0].line_number, 2);

    let deep = DirectoryCorpus::open_recursive(dir.path()).unwrap();
    let result = search(&deep, "what evicts the entry", &SearchConfig::default());
    let ids: Vec<&str> = result.matches.iter().map(|m| m.document.as_str()).collect();
    assert_eq!(ids, vec!["cache.md", "nested/deep.md"]);
}

#[test]
fn test_invalid_utf8_document_is_skipped_with_diagnostic() {
    let dir = write_corpus(&[("a.md", CACHE_LINE), ("c.md", CACHE_LINE)]);
    fs::write(dir.path().join("b.bin"), [0xc3, 0x28, 0xff]).unwrap();

    let corpus = DirectoryCorpus::open(dir.path()).unwrap();
    let result = search(&corpus, "what evicts the entry", &SearchConfig::default());

    assert!(result.is_complete(), "one bad file must not abort the scan");
    assert_eq!(result.matches.len(), 2);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].id, "b.bin");
    assert!(result.diagnostics[0].message.contains("UTF-8"));
    // The failed document is reported, not listed as "evaluated, no match".
    assert!(result.documents.iter().all(|d| d.id != "b.bin"));
}

#[test]
fn test_diagnostics_are_separate_from_no_matches() {
    let dir = write_corpus(&[("a.md", "apples")]);
    fs::write(dir.path().join("b.bin"), [0xff]).unwrap();

    let corpus = DirectoryCorpus::open(dir.path()).unwrap();
    let result = search(&corpus, "what evicts the entry", &SearchConfig::default());
    assert!(result.is_empty());
    assert_eq!(result.diagnostics.len(), 1);
}

#[test]
fn test_expired_deadline_gives_partial_result() {
    let dir = write_corpus(&[("a.md", CACHE_LINE), ("b.md", CACHE_LINE)]);
    let corpus = DirectoryCorpus::open(dir.path()).unwrap();

    let options = ScanOptions {
        deadline: Some(Instant::now()),
    };
    let result = search_with_options(&corpus, "what evicts the entry", &SearchConfig::default(), options);
    assert_eq!(result.status, ScanStatus::Partial { scanned: 0, total: 2 });
    assert!(result.is_empty());
    assert!(!result.is_complete(), "partial must not look like a complete empty scan");
}

#[test]
fn test_generous_deadline_is_complete() {
    let dir = write_corpus(&[("a.md", CACHE_LINE)]);
    let corpus = DirectoryCorpus::open(dir.path()).unwrap();

    let options = ScanOptions {
        deadline: Some(Instant::now() + Duration::from_secs(600)),
    };
    let result = search_with_options(&corpus, "what evicts the entry", &SearchConfig::default(), options);
    assert!(result.is_complete());
    assert_eq!(result.matches.len(), 1);
}
