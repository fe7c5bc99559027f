// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalized similarity: `1 - distance / longest`, case-insensitive.
//!
//! Lengths are counted in chars of the lowercased words. Lowercasing can
//! change the char count (`İ` folds to two chars), and measuring after the
//! fold is what keeps the ratio inside `[0, 1]`.

use super::levenshtein::{bounded_distance, distance};
use crate::contracts::check_similarity_in_range;

/// Similarity of two words in `[0, 1]`. `1.0` iff equal after lowercasing.
///
/// Two empty strings are identical, so they score `1.0` instead of dividing
/// zero by zero.
///
/// ```
/// use fuzzline::similarity;
///
/// assert_eq!(similarity("Cache", "cache"), 1.0);
/// assert_eq!(similarity("entry", "entri"), 0.8);
/// assert_eq!(similarity("", ""), 1.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let score = ratio(distance(&a, &b), longest);
    check_similarity_in_range(score);
    score
}

/// `Some(similarity(a, b))` if it reaches `threshold`, otherwise `None`.
///
/// Equivalent to computing [`similarity`] and comparing, but converts the
/// threshold into an edit budget first so hopeless pairs bail out of the DP
/// early. The budget is derived with the same float expression as the score,
/// so boundary cases land on the same side either way.
pub fn similarity_at_least(a: &str, b: &str, threshold: f64) -> Option<f64> {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return (1.0 >= threshold).then_some(1.0);
    }

    let budget = edit_budget(threshold, longest)?;
    let d = bounded_distance(&a, &b, budget)?;
    let score = ratio(d, longest);
    check_similarity_in_range(score);
    Some(score)
}

#[inline]
fn ratio(distance: usize, longest: usize) -> f64 {
    1.0 - distance as f64 / longest as f64
}

/// Largest distance whose ratio still reaches `threshold`.
///
/// `ratio` is non-increasing in the distance, so every smaller distance also
/// passes and the passing set is exactly `0..=budget`.
fn edit_budget(threshold: f64, longest: usize) -> Option<usize> {
    (0..=longest).rev().find(|&d| ratio(d, longest) >= threshold)
}
