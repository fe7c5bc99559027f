// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cross-product word matching.
//!
//! Every line word is compared with every query word. There is no index and
//! no deduplication: one line word may satisfy several query words and one
//! query word may be satisfied by several line words. Callers decide what to
//! make of the pairs.
//!
//! # Cost
//!
//! `O(|line_words| · |query_words|)` edit-distance computations per line, each
//! `O(len_a · len_b)`. This is where a scan spends nearly all of its time;
//! large corpora with long lines are the scaling risk. The length-gap and
//! row-minimum early exits in [`bounded_distance`](super::bounded_distance)
//! cut most of the non-matches short.

use super::similarity::similarity_at_least;
use crate::types::WordPair;

/// Default minimum similarity for a pair to count.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// All `(query word, line word)` pairs with similarity `≥ threshold`.
///
/// Pairs come out in line-word order, then query-word order.
///
/// ```
/// use fuzzline::fuzzy_match;
///
/// let line = vec!["the".to_string(), "cache".to_string(), "evicts".to_string()];
/// let query = vec!["evict".to_string(), "caches".to_string()];
/// let pairs = fuzzy_match(&line, &query, 0.8);
///
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[0].matched_word, "cache");
/// assert_eq!(pairs[0].query_word, "caches");
/// ```
pub fn fuzzy_match(line_words: &[String], query_words: &[String], threshold: f64) -> Vec<WordPair> {
    let mut pairs = Vec::new();
    for text_word in line_words {
        for query_word in query_words {
            if let Some(similarity) = similarity_at_least(query_word, text_word, threshold) {
                pairs.push(WordPair {
                    query_word: query_word.clone(),
                    matched_word: text_word.clone(),
                    similarity,
                });
            }
        }
    }
    pairs
}
