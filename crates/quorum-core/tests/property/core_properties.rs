use proptest::prelude::*;
use quorum_core::models::{Dimension, DimensionScores, DiversityMatrix};
use quorum_core::text;

// ── Diversity matrix invariants ──────────────────────────────────────────

proptest! {
    #[test]
    fn matrix_is_symmetric_with_zero_diagonal(
        n in 1usize..8,
        values in prop::collection::vec(0.0f64..=1.0, 0..32),
    ) {
        let mut m = DiversityMatrix::new(n);
        let mut k = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if k < values.len() {
                    m.set_pair(i, j, values[k]);
                    k += 1;
                }
            }
        }
        for i in 0..n {
            prop_assert_eq!(m.get(i, i), 0.0);
            for j in 0..n {
                prop_assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
    }

    #[test]
    fn mean_to_subset_is_bounded_by_extremes(
        d01 in 0.0f64..=1.0,
        d02 in 0.0f64..=1.0,
    ) {
        let mut m = DiversityMatrix::new(3);
        m.set_pair(0, 1, d01);
        m.set_pair(0, 2, d02);
        let mean = m.mean_to(0, &[1, 2]);
        prop_assert!(mean >= d01.min(d02) - 1e-12);
        prop_assert!(mean <= d01.max(d02) + 1e-12);
    }
}

// ── Dimension score invariants ───────────────────────────────────────────

proptest! {
    #[test]
    fn clamped_scores_stay_in_unit_interval(
        a in -2.0f64..2.0,
        b in -2.0f64..2.0,
        c in -2.0f64..2.0,
        d in -2.0f64..2.0,
        e in -2.0f64..2.0,
    ) {
        let scores = DimensionScores {
            accuracy: a,
            completeness: b,
            consistency: c,
            relevance: d,
            novelty: e,
        }
        .clamped();
        for dim in Dimension::ALL {
            prop_assert!((0.0..=1.0).contains(&scores.get(dim)));
        }
    }
}

// ── Text utility invariants ──────────────────────────────────────────────

proptest! {
    #[test]
    fn jaccard_is_symmetric_and_bounded(a in "[a-z ]{0,40}", b in "[a-z ]{0,40}") {
        let sa = text::token_set(&a);
        let sb = text::token_set(&b);
        let ab = text::jaccard(&sa, &sb);
        let ba = text::jaccard(&sb, &sa);
        prop_assert_eq!(ab, ba);
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn identical_nonempty_texts_have_similarity_one(a in "[a-z]{1,10}( [a-z]{1,10}){0,5}") {
        prop_assert_eq!(text::text_similarity(&a, &a), 1.0);
    }
}
