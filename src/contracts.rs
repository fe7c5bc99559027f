// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the matching pipeline.
//!
//! A violated contract is a bug in this crate, never bad user input, so the
//! checks panic instead of clamping. The cheap O(1) checks use `assert!` and
//! run in every build. The O(n) ordering check uses `debug_assert!`.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                   |
//! |--------------------------------|--------------------------------------------|
//! | `check_similarity_in_range`    | `0 ≤ similarity ≤ 1`                       |
//! | `check_ratio_in_range`         | `0 ≤ minWordMatchRatio ≤ 1`                |
//! | `check_context_window`         | `start ≤ line < end ≤ line_count`          |
//! | `check_score_in_range`         | line score finite and in `[0, 1]`          |
//! | `check_sorted_by_score`        | matches sorted by score descending         |

use crate::types::LineMatch;

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Similarity must be a real number in `[0, 1]`.
#[inline]
pub fn check_similarity_in_range(similarity: f64) {
    assert!(
        (0.0..=1.0).contains(&similarity),
        "Contract violation: similarity {} outside [0, 1]",
        similarity
    );
}

/// A line score is a mean of similarities, so it lives in `[0, 1]` too.
#[inline]
pub fn check_score_in_range(score: f64) {
    assert!(
        (0.0..=1.0).contains(&score),
        "Contract violation: line score {} outside [0, 1]",
        score
    );
}

// ============================================================================
// EVALUATION CONTRACTS
// ============================================================================

/// The word-match ratio must be a fraction. Config validation rejects bad
/// values, so reaching the evaluator with one means validation was bypassed.
#[inline]
pub fn check_ratio_in_range(ratio: f64) {
    assert!(
        (0.0..=1.0).contains(&ratio),
        "Contract violation: minWordMatchRatio {} outside [0, 1]",
        ratio
    );
}

/// The context window `[start, end)` must contain `line` and stay inside the
/// document.
#[inline]
pub fn check_context_window(start: usize, end: usize, line: usize, line_count: usize) {
    assert!(
        start <= line && line < end && end <= line_count,
        "Contract violation: context window [{}, {}) for line {} in document of {} lines",
        start,
        end,
        line,
        line_count
    );
}

// ============================================================================
// ORDERING CONTRACTS
// ============================================================================

/// Matches must come out best first.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_sorted_by_score(matches: &[LineMatch]) {
    for (i, pair) in matches.windows(2).enumerate() {
        debug_assert!(
            pair[0].score >= pair[1].score,
            "Contract violation: matches[{}].score {} < matches[{}].score {}",
            i,
            pair[0].score,
            i + 1,
            pair[1].score
        );
    }
}
