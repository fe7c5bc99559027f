// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for end-to-end search.
//!
//! Arbitrary queries against arbitrary documents must never panic, and every
//! match must respect the line, context and ordering invariants.

#![no_main]

use arbitrary::Arbitrary;
use fuzzline::{search, Document, InMemoryCorpus, SearchConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    query: String,
    documents: Vec<String>,
    context_lines: u8,
    gated: bool,
}

fuzz_target!(|input: SearchInput| {
    let query: String = input.query.chars().take(200).collect();
    let corpus: InMemoryCorpus = input
        .documents
        .iter()
        .take(8)
        .enumerate()
        .map(|(i, text)| Document::new(format!("doc{}", i), text.chars().take(2000).collect::<String>()))
        .collect();

    let mut config = SearchConfig {
        context_lines: (input.context_lines % 8) as usize,
        ..SearchConfig::default()
    };
    if !input.gated {
        config = config.without_gate();
    }

    // INVARIANT 1: search() never panics
    let result = search(&corpus, &query, &config);

    // INVARIANT 2: ranking is non-increasing
    for pair in result.matches.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    for m in &result.matches {
        let doc = corpus
            .documents()
            .iter()
            .find(|d| d.id == m.document)
            .expect("match from unknown document");
        let lines = doc.raw_lines();

        // INVARIANT 3: line number and context stay inside the document
        assert!(m.line_number >= 1 && m.line_number <= lines.len());
        assert!(m.context_start >= 1);
        assert!(m.context_start <= m.line_number);
        assert!(m.context_start + m.context.len() - 1 <= lines.len());
        assert!(m.context.len() <= 2 * config.context_lines + 1);

        // INVARIANT 4: scores are fractions
        assert!((0.0..=1.0).contains(&m.score));
        assert!(!m.matched_terms.is_empty());
    }
});
