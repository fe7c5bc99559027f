// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cheap pre-filter: is this query worth a corpus scan at all?
//!
//! A query passes if it mentions at least one configured keyword. The default
//! list holds general-intent words ("how", "what", "explain", ...), which
//! separates questions from chatter without touching the corpus.
//!
//! Keywords are matched two different ways, and the asymmetry is deliberate:
//! - a single-word keyword must equal a whole token of the query
//!   ("how" matches "how?" but not "however");
//! - a multi-word keyword is a plain substring test on the normalized,
//!   lowercased query, so "how to" also matches inside "show tomorrow".
//!
//! An empty keyword list accepts everything. Rejection is not an error; the
//! caller just gets the empty result.

use tracing::info;

use crate::text::{gate_tokens, normalize};

/// General-intent words that mark a query as a question.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "knowledge",
    "how",
    "know",
    "what",
    "where",
    "explain",
    "show",
    "tell",
    "will",
    "why",
    "features",
    "use",
    "using",
    "work",
    "access",
    "get",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryGate {
    keywords: Vec<String>,
}

impl Default for QueryGate {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl QueryGate {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// A gate that lets every query through.
    pub fn accept_all() -> Self {
        Self {
            keywords: Vec::new(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn accept(&self, query: &str) -> bool {
        if self.keywords.is_empty() {
            return true;
        }

        let text = normalize(query).to_lowercase();
        let tokens = gate_tokens(&text);
        let accepted = self.keywords.iter().any(|keyword| {
            if keyword.contains(char::is_whitespace) {
                text.contains(keyword.as_str())
            } else {
                tokens.iter().any(|t| t == keyword)
            }
        });

        info!(accepted, "query gate");
        accepted
    }
}
