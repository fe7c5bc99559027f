// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and similarity.
//!
//! The bounded distance must agree with the full one whenever it answers,
//! and the threshold shortcut must agree with computing the score outright.
//! Every line score is built on these two.

#![no_main]

use arbitrary::Arbitrary;
use fuzzline::{bounded_distance, distance, similarity, similarity_at_least};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
    c: String,
    max: u8,
    /// Mapped onto [0, 1].
    threshold: u16,
}

fn cap(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let a = cap(&input.a, 64);
    let b = cap(&input.b, 64);
    let c = cap(&input.c, 64);
    let max = input.max as usize;
    let threshold = input.threshold as f64 / u16::MAX as f64;

    let d = distance(&a, &b);

    // INVARIANT 1: symmetric, zero only on equal strings
    assert_eq!(d, distance(&b, &a));
    assert_eq!(d == 0, a == b);

    // INVARIANT 2: triangle inequality
    assert!(d <= distance(&a, &c) + distance(&c, &b));

    // INVARIANT 3: bounded distance is exact within the bound
    match bounded_distance(&a, &b, max) {
        Some(bounded) => assert_eq!(bounded, d),
        None => assert!(d > max, "bounded gave up at max={} but d={}", max, d),
    }

    // INVARIANT 4: similarity is a fraction and the shortcut agrees with it
    let s = similarity(&a, &b);
    assert!((0.0..=1.0).contains(&s));
    match similarity_at_least(&a, &b, threshold) {
        Some(fast) => {
            assert_eq!(fast, s);
            assert!(s >= threshold);
        }
        None => assert!(s < threshold, "shortcut rejected s={} at t={}", s, threshold),
    }
});
