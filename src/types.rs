// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search.
//!
//! Everything here lives for exactly one query: a [`Query`] and the corpus
//! [`Document`]s go in, a [`SearchResult`] comes out, and nothing persists.
//!
//! # Invariants
//!
//! - **WordPair**: `0 ≤ similarity ≤ 1`, and `similarity = 1` iff the words are
//!   equal after lowercasing.
//! - **LineMatch**: `line_number ≥ 1`; `context` is a contiguous run of the
//!   document's lines that contains the matched line and never reaches past
//!   either end of the document.
//! - **SearchResult**: `matches` is sorted by score descending; equal scores
//!   keep corpus order, then line order.

use serde::{Deserialize, Serialize};

use crate::text::{distinct_words, normalize, tokenize};

// =============================================================================
// INPUTS
// =============================================================================

/// A free-text query after cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Text exactly as the caller supplied it.
    pub raw: String,
    /// Mention markup stripped, whitespace trimmed.
    pub normalized: String,
    /// Distinct lowercase words of `normalized`, in first-occurrence order.
    pub words: Vec<String>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        let normalized = normalize(raw);
        let words = distinct_words(&normalized);
        Self {
            raw: raw.to_string(),
            normalized,
            words,
        }
    }

    /// A query with no words can never match a line.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// One document of the corpus: an identifier plus its full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Raw lines, split on `\n` only. A trailing newline yields a final
    /// empty line, the way a plain split would.
    pub fn raw_lines(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }

    /// Lines with numbering and tokens.
    pub fn lines(&self) -> Vec<Line<'_>> {
        self.raw_lines()
            .into_iter()
            .enumerate()
            .map(|(i, raw)| Line::new(i + 1, raw))
            .collect()
    }
}

/// A single line of a document, borrowed from its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based.
    pub number: usize,
    pub raw: &'a str,
    pub trimmed: &'a str,
    /// Lowercase whitespace-separated tokens of `raw`.
    pub words: Vec<String>,
}

impl<'a> Line<'a> {
    pub fn new(number: usize, raw: &'a str) -> Self {
        Self {
            number,
            raw,
            trimmed: raw.trim(),
            words: tokenize(raw),
        }
    }
}

// =============================================================================
// MATCHES
// =============================================================================

/// A query word paired with a line word it fuzzily matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPair {
    pub query_word: String,
    pub matched_word: String,
    pub similarity: f64,
}

/// A line that satisfied enough query words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineMatch {
    /// Identifier of the document the line came from.
    pub document: String,
    pub line_number: usize,
    /// The matched line, trimmed.
    pub content: String,
    /// Raw lines around the match, the match itself included.
    pub context: Vec<String>,
    /// Line number of `context[0]`.
    pub context_start: usize,
    pub score: f64,
    pub matched_terms: Vec<WordPair>,
}

// =============================================================================
// RESULTS
// =============================================================================

/// How far a scan got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ScanStatus {
    /// The query gate turned the query away; no document was read.
    Rejected,
    /// Every document was evaluated.
    Complete,
    /// A deadline cut the scan short. Missing documents were not evaluated,
    /// which is not the same as "evaluated and found nothing".
    Partial { scanned: usize, total: usize },
}

/// Whether one document contributed to the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInclusion {
    pub id: String,
    pub included: bool,
    /// Highest line score in the document, if any line matched.
    pub best_score: Option<f64>,
}

/// A document the corpus could not hand over. The scan carried on without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDiagnostic {
    pub id: String,
    pub message: String,
}

/// Per-document output of a scan, before aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMatches {
    pub document: Document,
    /// Matches in line order.
    pub matches: Vec<LineMatch>,
}

impl DocumentMatches {
    pub fn is_included(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn best_score(&self) -> Option<f64> {
        self.matches.iter().map(|m| m.score).reduce(f64::max)
    }
}

/// Everything one query produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// All line matches across documents, best first.
    pub matches: Vec<LineMatch>,
    /// One entry per evaluated document, in corpus order.
    pub documents: Vec<DocumentInclusion>,
    /// Documents that contributed, in corpus order, with their full content.
    #[serde(skip)]
    pub included: Vec<Document>,
    pub diagnostics: Vec<DocumentDiagnostic>,
    pub status: ScanStatus,
}

impl SearchResult {
    /// Result for a query the gate turned away.
    pub fn rejected() -> Self {
        Self {
            matches: Vec::new(),
            documents: Vec::new(),
            included: Vec::new(),
            diagnostics: Vec::new(),
            status: ScanStatus::Rejected,
        }
    }

    /// No line anywhere qualified (or the gate rejected the query).
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.status == ScanStatus::Complete
    }

    pub fn is_rejected(&self) -> bool {
        self.status == ScanStatus::Rejected
    }
}
