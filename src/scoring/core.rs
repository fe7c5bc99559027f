// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a line score.
//!
//! Two averaging rules are available:
//!
//! | Mode               | Averages over                                      |
//! |--------------------|----------------------------------------------------|
//! | `AllPairs`         | every qualifying `(query word, line word)` pair    |
//! | `BestPerQueryWord` | the strongest pair of each satisfied query word     |
//!
//! `AllPairs` is the default and the reference behavior. It lets a line with
//! many weak-but-passing pairs outscore a line with fewer strong ones, which
//! is surprising, but changing it moves rankings. `BestPerQueryWord` exists
//! so the two can be compared side by side.

use serde::{Deserialize, Serialize};

use crate::contracts::check_score_in_range;
use crate::types::WordPair;

/// How pair similarities collapse into one line score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreMode {
    #[default]
    AllPairs,
    BestPerQueryWord,
}

/// Number of distinct query words with at least one pair.
pub fn satisfied_query_words(pairs: &[WordPair]) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for pair in pairs {
        if !seen.contains(&pair.query_word.as_str()) {
            seen.push(&pair.query_word);
        }
    }
    seen.len()
}

/// How many distinct query words a line must satisfy.
///
/// `ceil(query_word_count × ratio)`, but never less than one: a line with no
/// matching word at all is not a match even at ratio 0.
pub fn required_matches(query_word_count: usize, ratio: f64) -> usize {
    let required = (query_word_count as f64 * ratio).ceil() as usize;
    required.max(1)
}

/// Mean similarity of `pairs` under `mode`. `pairs` must be non-empty.
pub fn line_score(pairs: &[WordPair], mode: ScoreMode) -> f64 {
    assert!(!pairs.is_empty(), "line_score called without pairs");

    let score = match mode {
        ScoreMode::AllPairs => mean(pairs.iter().map(|p| p.similarity)),
        ScoreMode::BestPerQueryWord => {
            let mut best: Vec<(&str, f64)> = Vec::new();
            for pair in pairs {
                match best.iter_mut().find(|(q, _)| *q == pair.query_word) {
                    Some((_, s)) => *s = s.max(pair.similarity),
                    None => best.push((&pair.query_word, pair.similarity)),
                }
            }
            mean(best.into_iter().map(|(_, s)| s))
        }
    };

    check_score_in_range(score);
    score
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    sum / count as f64
}
