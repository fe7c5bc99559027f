// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy word comparison: typo tolerance via edit distance.
//!
//! Three layers, each built on the one before: raw Levenshtein distance,
//! a normalized similarity in `[0, 1]`, and the cross-product matcher that
//! pairs query words with line words.

mod levenshtein;
mod matcher;
mod similarity;

pub use levenshtein::*;
pub use matcher::*;
pub use similarity::*;
