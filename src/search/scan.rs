// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus scanning: evaluate every document, then aggregate.
//!
//! Documents are independent, so with the `parallel` feature they are
//! evaluated on the rayon pool. Rayon's indexed `collect` keeps results in
//! corpus order, and the aggregator's stable sort then produces the same
//! ranking as a sequential scan.
//!
//! A document that fails to load becomes a [`DocumentDiagnostic`]. An
//! optional deadline stops new documents from being started; the result is
//! then marked [`ScanStatus::Partial`].

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::aggregate::aggregate;
use super::line::{evaluate_document, LineParams};
use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::gate::QueryGate;
use crate::types::{DocumentDiagnostic, DocumentMatches, Query, ScanStatus, SearchResult};

/// Knobs that shape a scan without changing what a match is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Documents not started by this instant are skipped.
    pub deadline: Option<Instant>,
}

/// Outcome for one corpus position.
enum Evaluated {
    Done(DocumentMatches),
    Failed(DocumentDiagnostic),
    Skipped,
}

/// Gate, parse and scan in one call.
///
/// A query the gate rejects comes back as [`SearchResult::rejected`] without
/// any document being read.
pub fn search<C: Corpus + ?Sized>(corpus: &C, raw_query: &str, config: &SearchConfig) -> SearchResult {
    search_with_options(corpus, raw_query, config, ScanOptions::default())
}

pub fn search_with_options<C: Corpus + ?Sized>(
    corpus: &C,
    raw_query: &str,
    config: &SearchConfig,
    options: ScanOptions,
) -> SearchResult {
    let gate = QueryGate::new(&config.keywords);
    if !gate.accept(raw_query) {
        info!("query rejected by gate, corpus not scanned");
        return SearchResult::rejected();
    }
    scan_with_options(corpus, &Query::parse(raw_query), config, options)
}

/// Evaluate every document of `corpus` against an already-accepted query.
pub fn scan<C: Corpus + ?Sized>(corpus: &C, query: &Query, config: &SearchConfig) -> SearchResult {
    scan_with_options(corpus, query, config, ScanOptions::default())
}

pub fn scan_with_options<C: Corpus + ?Sized>(
    corpus: &C,
    query: &Query,
    config: &SearchConfig,
    options: ScanOptions,
) -> SearchResult {
    let started = Instant::now();
    let params = LineParams::from(config);
    let total = corpus.len();

    let evaluate = |index: usize| evaluate_entry(corpus, index, query, &params, options.deadline);

    #[cfg(feature = "parallel")]
    let evaluated: Vec<Evaluated> = (0..total).into_par_iter().map(evaluate).collect();
    #[cfg(not(feature = "parallel"))]
    let evaluated: Vec<Evaluated> = (0..total).map(evaluate).collect();

    let mut per_document = Vec::new();
    let mut diagnostics = Vec::new();
    let mut skipped = 0usize;
    for outcome in evaluated {
        match outcome {
            Evaluated::Done(matches) => per_document.push(matches),
            Evaluated::Failed(diagnostic) => diagnostics.push(diagnostic),
            Evaluated::Skipped => skipped += 1,
        }
    }

    let mut result = aggregate(per_document);
    result.diagnostics = diagnostics;
    if skipped > 0 {
        warn!(skipped, total, "deadline reached, scan is partial");
        result.status = ScanStatus::Partial {
            scanned: total - skipped,
            total,
        };
    }

    info!(
        documents = total,
        included = result.included.len(),
        matches = result.matches.len(),
        failed = result.diagnostics.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "scan finished"
    );
    result
}

fn evaluate_entry<C: Corpus + ?Sized>(
    corpus: &C,
    index: usize,
    query: &Query,
    params: &LineParams,
    deadline: Option<Instant>,
) -> Evaluated {
    if deadline.is_some_and(|d| Instant::now() >= d) {
        return Evaluated::Skipped;
    }

    match corpus.load(index) {
        Ok(document) => {
            let matches = evaluate_document(&document, &query.words, params);
            debug!(id = %document.id, matches = matches.len(), "document evaluated");
            Evaluated::Done(DocumentMatches { document, matches })
        }
        Err(err) => {
            let id = corpus.id(index).to_string();
            warn!(id = %id, error = %err, "skipping unreadable document");
            Evaluated::Failed(DocumentDiagnostic {
                id,
                message: err.to_string(),
            })
        }
    }
}
