// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Merge per-document matches into one ranked result, and render it.
//!
//! The same per-document match set serves both output modes: line mode
//! returns the ranked [`LineMatch`] list, document mode returns every
//! contributing document verbatim between begin/end markers.

use crate::config::InclusionMode;
use crate::scoring::ranking::sort_matches;
use crate::types::{Document, DocumentInclusion, DocumentMatches, LineMatch, ScanStatus, SearchResult};

/// Opening marker line of a framed document.
pub fn begin_marker(id: &str) -> String {
    format!("==INIT-FILE: {}==", id)
}

/// Closing marker line of a framed document.
pub fn end_marker(id: &str) -> String {
    format!("==END-FILE: {}==", id)
}

/// A result in the shape the consumer asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Nothing qualified, or the gate rejected the query.
    NoMatches,
    Lines(Vec<LineMatch>),
    Documents(String),
}

impl Rendered {
    pub fn is_empty(&self) -> bool {
        matches!(self, Rendered::NoMatches)
    }
}

/// Concatenate matches in corpus order and rank them.
///
/// Returns a complete-scan result; the scanner adds diagnostics and
/// downgrades the status when it had to stop early.
pub fn aggregate(per_document: Vec<DocumentMatches>) -> SearchResult {
    let mut matches = Vec::new();
    let mut documents = Vec::with_capacity(per_document.len());
    let mut included = Vec::new();

    for doc in per_document {
        documents.push(DocumentInclusion {
            id: doc.document.id.clone(),
            included: doc.is_included(),
            best_score: doc.best_score(),
        });
        if doc.is_included() {
            included.push(doc.document);
            matches.extend(doc.matches);
        }
    }

    sort_matches(&mut matches);

    SearchResult {
        matches,
        documents,
        included,
        diagnostics: Vec::new(),
        status: ScanStatus::Complete,
    }
}

/// Frame each document between its markers; blocks are separated by a
/// blank line. `preamble`, if given, goes on its own line first.
pub fn render_documents(documents: &[Document], preamble: Option<&str>) -> String {
    let blocks: Vec<String> = documents
        .iter()
        .map(|doc| format!("{}\n{}\n{}", begin_marker(&doc.id), doc.content, end_marker(&doc.id)))
        .collect();

    let body = blocks.join("\n\n");
    match preamble {
        Some(preamble) => format!("{}\n{}", preamble, body),
        None => body,
    }
}

pub fn render(result: &SearchResult, mode: InclusionMode, preamble: Option<&str>) -> Rendered {
    if result.is_empty() {
        return Rendered::NoMatches;
    }
    match mode {
        InclusionMode::Lines => Rendered::Lines(result.matches.clone()),
        InclusionMode::Documents => Rendered::Documents(render_documents(&result.included, preamble)),
    }
}
