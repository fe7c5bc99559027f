// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::config::SearchConfig;
use crate::corpus::InMemoryCorpus;
use crate::types::{Document, LineMatch};

/// Build an in-memory corpus from `(id, content)` pairs.
pub fn make_corpus(docs: &[(&str, &str)]) -> InMemoryCorpus {
    docs.iter()
        .map(|(id, content)| Document::new(*id, *content))
        .collect()
}

/// Default config with the keyword gate switched off.
pub fn ungated_config() -> SearchConfig {
    SearchConfig::default().without_gate()
}

/// `(document, line_number)` of each match, in result order.
pub fn match_positions(matches: &[LineMatch]) -> Vec<(String, usize)> {
    matches
        .iter()
        .map(|m| (m.document.clone(), m.line_number))
        .collect()
}
