// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over Unicode scalar values.
//!
//! The textbook recurrence fills a `(|a|+1) × (|b|+1)` table where cell
//! `(i, j)` is the distance between the first `i` chars of `a` and the first
//! `j` chars of `b`. Only the previous row is ever read, so we keep a single
//! row and a carried diagonal. Same numbers as the full matrix, `O(|b|)` space.
//!
//! [`bounded_distance`] adds two early exits for callers that only care about
//! distances inside a budget:
//! 1. `|len(a) - len(b)|` is a lower bound on the distance, so a length gap
//!    larger than the budget rejects without touching the table.
//! 2. If every cell in a row exceeds the budget, later rows can only grow.

/// Minimum number of single-char insertions, deletions and substitutions
/// turning `a` into `b`.
///
/// Case-sensitive; callers that want case folding lowercase first.
///
/// ```
/// use fuzzline::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("", "abc"), 3);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Iterate the longer string in the outer loop so the row is the short one.
    let (outer, inner) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    let mut row: Vec<usize> = (0..=inner.len()).collect();
    for (i, oc) in outer.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;

        for (j, ic) in inner.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if oc == ic {
                diag
            } else {
                1 + diag.min(above).min(row[j])
            };
            diag = above;
        }
    }

    row[inner.len()]
}

/// Edit distance, or `None` as soon as it provably exceeds `max`.
///
/// Returns exactly `Some(distance(a, b))` whenever that distance is within
/// budget. Both early exits are sound: they never reject a pair that fits.
pub fn bounded_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
    }

    (dp[b_len] <= max).then_some(dp[b_len])
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    bounded_distance(a, b, max).is_some()
}
