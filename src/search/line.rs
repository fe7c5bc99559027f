// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line-level matching: does this line answer the query, and how well?
//!
//! A line qualifies when its fuzzy pairs cover at least
//! `ceil(|query words| × min_word_match_ratio)` distinct query words. Its score
//! then comes from [`line_score`], and it carries a window of surrounding
//! lines so the reader sees the match in place.

use std::ops::Range;

use crate::config::SearchConfig;
use crate::contracts::{check_context_window, check_ratio_in_range};
use crate::fuzzy::{fuzzy_match, similarity};
use crate::scoring::{line_score, required_matches, satisfied_query_words, ScoreMode};
use crate::types::{Document, Line, LineMatch, WordPair};

/// The subset of [`SearchConfig`] that line evaluation reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParams {
    pub context_lines: usize,
    pub min_word_match_ratio: f64,
    pub similarity_threshold: f64,
    pub score_mode: ScoreMode,
}

impl Default for LineParams {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for LineParams {
    fn from(config: &SearchConfig) -> Self {
        Self {
            context_lines: config.context_lines,
            min_word_match_ratio: config.min_word_match_ratio,
            similarity_threshold: config.similarity_threshold,
            score_mode: config.score_mode,
        }
    }
}

/// Indices of the lines shown around line `index`, clipped to `[0, line_count)`.
pub fn context_window(index: usize, line_count: usize, radius: usize) -> Range<usize> {
    let start = index.saturating_sub(radius);
    let end = index.saturating_add(radius).saturating_add(1).min(line_count);
    check_context_window(start, end, index, line_count);
    start..end
}

/// The first query word similar enough to `text_word`, or `""` if none is.
///
/// This looks the word up by value rather than remembering which query word
/// produced the pair, so when two query words both clear the threshold the
/// earlier one is reported even if the pair came from the later one.
pub fn resolve_query_word(text_word: &str, query_words: &[String], threshold: f64) -> String {
    query_words
        .iter()
        .find(|q| similarity(q, text_word) >= threshold)
        .cloned()
        .unwrap_or_default()
}

/// Evaluate line `index` of `lines` against the query.
///
/// `lines` is the whole document so the context window can reach the
/// neighbours. Returns `None` when too few query words are satisfied.
pub fn evaluate_line(
    document_id: &str,
    lines: &[Line<'_>],
    index: usize,
    query_words: &[String],
    params: &LineParams,
) -> Option<LineMatch> {
    check_ratio_in_range(params.min_word_match_ratio);
    let line = &lines[index];

    let pairs = fuzzy_match(&line.words, query_words, params.similarity_threshold);
    let required = required_matches(query_words.len(), params.min_word_match_ratio);
    if satisfied_query_words(&pairs) < required {
        return None;
    }

    let score = line_score(&pairs, params.score_mode);
    let window = context_window(index, lines.len(), params.context_lines);
    let context_start = lines[window.start].number;
    let context = window.map(|i| lines[i].raw.to_string()).collect();
    let matched_terms = pairs
        .into_iter()
        .map(|pair| WordPair {
            query_word: resolve_query_word(
                &pair.matched_word,
                query_words,
                params.similarity_threshold,
            ),
            matched_word: pair.matched_word,
            similarity: pair.similarity,
        })
        .collect();

    Some(LineMatch {
        document: document_id.to_string(),
        line_number: line.number,
        content: line.trimmed.to_string(),
        context,
        context_start,
        score,
        matched_terms,
    })
}

/// Every qualifying line of `document`, in line order.
pub fn evaluate_document(
    document: &Document,
    query_words: &[String],
    params: &LineParams,
) -> Vec<LineMatch> {
    if query_words.is_empty() {
        return Vec::new();
    }
    let lines = document.lines();
    (0..lines.len())
        .filter_map(|i| evaluate_line(&document.id, &lines, i, query_words, params))
        .collect()
}
