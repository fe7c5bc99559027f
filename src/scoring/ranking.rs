// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how line matches get sorted.
//!
//! Score descending, nothing else. The sort is stable, so whatever order the
//! matches arrive in (corpus order, then line order) decides ties. That makes
//! output deterministic as long as the input order is.

use std::cmp::Ordering;

use crate::contracts::check_sorted_by_score;
use crate::types::LineMatch;

/// Compare two matches for ranking. Higher score sorts first.
pub fn compare_matches(a: &LineMatch, b: &LineMatch) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Stable sort, best first.
pub fn sort_matches(matches: &mut [LineMatch]) {
    matches.sort_by(compare_matches);
    check_sorted_by_score(matches);
}
