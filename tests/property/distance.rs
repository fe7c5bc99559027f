//! Metric properties of edit distance and similarity.

use fuzzline::{bounded_distance, distance, similarity, similarity_at_least};
use proptest::prelude::*;

use crate::common::text_strategy;

proptest! {
    /// Property: distance(a, a) = 0.
    #[test]
    fn prop_distance_identity(a in text_strategy()) {
        prop_assert_eq!(distance(&a, &a), 0);
    }

    /// Property: distance is symmetric.
    #[test]
    fn prop_distance_symmetric(a in text_strategy(), b in text_strategy()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    /// Property: distance(a, c) ≤ distance(a, b) + distance(b, c).
    #[test]
    fn prop_distance_triangle(a in text_strategy(), b in text_strategy(), c in text_strategy()) {
        let ac = distance(&a, &c);
        let via_b = distance(&a, &b) + distance(&b, &c);
        prop_assert!(ac <= via_b, "d({:?},{:?})={} > {}", a, c, ac, via_b);
    }

    /// Property: distance never exceeds the longer length.
    #[test]
    fn prop_distance_bounded_by_length(a in text_strategy(), b in text_strategy()) {
        let longest = a.chars().count().max(b.chars().count());
        prop_assert!(distance(&a, &b) <= longest);
    }

    /// Property: the bounded variant is exact whenever it answers.
    #[test]
    fn prop_bounded_matches_full(a in text_strategy(), b in text_strategy(), max in 0usize..8) {
        let d = distance(&a, &b);
        match bounded_distance(&a, &b, max) {
            Some(bounded) => prop_assert_eq!(bounded, d),
            None => prop_assert!(d > max),
        }
    }

    /// Property: similarity lies in [0, 1] and is 1 on identical input.
    #[test]
    fn prop_similarity_range(a in text_strategy(), b in text_strategy()) {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
        prop_assert_eq!(similarity(&a, &a), 1.0);
        prop_assert_eq!(s, similarity(&b, &a));
    }

    /// Property: case never changes similarity.
    #[test]
    fn prop_similarity_case_blind(a in "[a-zA-Z]{0,10}", b in "[a-zA-Z]{0,10}") {
        prop_assert_eq!(similarity(&a, &b), similarity(&a.to_uppercase(), &b.to_lowercase()));
    }

    /// Property: the threshold shortcut decides exactly like the full score.
    #[test]
    fn prop_shortcut_agrees(a in text_strategy(), b in text_strategy(), threshold in 0.0f64..=1.0) {
        let s = similarity(&a, &b);
        match similarity_at_least(&a, &b, threshold) {
            Some(fast) => {
                prop_assert_eq!(fast, s);
                prop_assert!(s >= threshold);
            }
            None => prop_assert!(s < threshold),
        }
    }
}
