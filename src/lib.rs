// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy, word-level line retrieval over plain-text corpora.
//!
//! Give it a free-text question and a set of documents; it finds lines whose
//! vocabulary approximately matches the question, scores them, and returns
//! them best first with a few lines of context. There is no index: every
//! query re-scans the corpus, which keeps the engine stateless and the
//! results exactly reproducible.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   text.rs   │────▶│   fuzzy/     │────▶│  search/     │
//! │ (normalize, │     │ (distance,   │     │ (line, scan, │
//! │  tokenize)  │     │  similarity, │     │  aggregate)  │
//! └─────────────┘     │  fuzzy_match)│     └──────────────┘
//!        │            └──────────────┘             │
//!        ▼                                         ▼
//! ┌─────────────┐                          ┌──────────────┐
//! │   gate.rs   │                          │  scoring/    │
//! │ (QueryGate) │                          │ (line_score, │
//! └─────────────┘                          │  ranking)    │
//!                                          └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use fuzzline::{search, Document, InMemoryCorpus, SearchConfig};
//!
//! let corpus = InMemoryCorpus::new(vec![
//!     Document::new("cache.md", "The cache evicts the oldest entry"),
//! ]);
//! let result = search(&corpus, "what evicts the entry", &SearchConfig::default());
//!
//! assert_eq!(result.matches.len(), 1);
//! assert_eq!(result.matches[0].line_number, 1);
//! ```

pub mod config;
pub mod contracts;
pub mod corpus;
pub mod error;
pub mod fuzzy;
pub mod gate;
pub mod scoring;
pub mod search;
pub mod testing;
mod text;
mod types;

pub use config::{InclusionMode, SearchConfig, DEFAULT_CONTEXT_LINES, DEFAULT_MIN_WORD_MATCH_RATIO, DEFAULT_PREAMBLE};
pub use corpus::{Corpus, DirectoryCorpus, InMemoryCorpus};
pub use error::{ConfigError, CorpusError, Error, Result};
pub use fuzzy::{
    bounded_distance, distance, fuzzy_match, levenshtein_within, similarity, similarity_at_least,
    DEFAULT_SIMILARITY_THRESHOLD,
};
pub use gate::{QueryGate, DEFAULT_KEYWORDS};
pub use scoring::ranking::{compare_matches, sort_matches};
pub use scoring::{line_score, required_matches, satisfied_query_words, ScoreMode};
pub use search::{
    aggregate, begin_marker, context_window, end_marker, evaluate_document, evaluate_line, render, render_documents,
    resolve_query_word, scan, scan_with_options, search, search_with_options, LineParams,
    Rendered, ScanOptions,
};
pub use text::{distinct_words, gate_tokens, normalize, tokenize};
pub use types::{
    Document, DocumentDiagnostic, DocumentInclusion, DocumentMatches, Line, LineMatch, Query,
    ScanStatus, SearchResult, WordPair,
};
