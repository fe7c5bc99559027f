// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation over a corpus.
//!
//! # Pipeline
//!
//! ```text
//! raw query ─▶ QueryGate ─▶ Query::parse ─▶ scan ──▶ aggregate ─▶ render
//!                  │                          │
//!                  ▼                          ▼  per document (parallel)
//!             rejected result           evaluate_line per line
//! ```
//!
//! - [`line`]: is one line a match, what is its score and context
//! - [`scan`]: walk the corpus, collect per-document matches and diagnostics
//! - [`aggregate`]: merge, rank, and render in line or document mode

pub mod aggregate;
pub mod line;
pub mod scan;

pub use aggregate::{aggregate, begin_marker, end_marker, render, render_documents, Rendered};
pub use line::{context_window, evaluate_document, evaluate_line, resolve_query_word, LineParams};
pub use scan::{scan, scan_with_options, search, search_with_options, ScanOptions};
