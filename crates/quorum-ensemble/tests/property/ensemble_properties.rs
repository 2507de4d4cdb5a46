use proptest::prelude::*;
use quorum_core::candidate::{Candidate, Element, ElementCategory};
use quorum_core::config::{DiversityConfig, SelectionAlgorithm, SelectionConfig};
use quorum_core::models::{
    BayesianMetrics, CandidateAssessment, DimensionScores, RefinementAnalysis, UncertaintyRecord,
};
use quorum_ensemble::{optimize, select, DiversityCalculator};

fn assessment(index: usize, overall: f64) -> CandidateAssessment {
    CandidateAssessment {
        candidate: index,
        quality: DimensionScores::uniform(overall),
        bayesian: BayesianMetrics::neutral(),
        uncertainty: UncertaintyRecord::default(),
        refinement: RefinementAnalysis {
            overall_score: overall,
            passed: false,
            failing: vec![],
            suggestions: vec![],
        },
    }
}

fn arb_candidates() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(
        prop::collection::vec("[a-z]{2,6}( [a-z]{2,6}){0,5}", 0..5),
        1..6,
    )
    .prop_map(|texts_per_candidate| {
        texts_per_candidate
            .into_iter()
            .enumerate()
            .map(|(i, texts)| {
                let elements = texts
                    .into_iter()
                    .enumerate()
                    .map(|(j, t)| Element::new(format!("c{i}-e{j}"), i, ElementCategory::Claim, t))
                    .collect();
                Candidate::new(format!("c{i}"), elements)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn matrix_values_are_bounded_symmetric_with_zero_diagonal(
        candidates in arb_candidates(),
    ) {
        let m = DiversityCalculator::new(DiversityConfig::default()).matrix(&candidates);
        let n = candidates.len();
        for i in 0..n {
            prop_assert_eq!(m.get(i, i), 0.0);
            for j in 0..n {
                prop_assert_eq!(m.get(i, j), m.get(j, i));
                prop_assert!((0.0..=1.0).contains(&m.get(i, j)));
            }
        }
    }

    #[test]
    fn primary_has_maximal_quality_and_leads_the_selection(
        candidates in arb_candidates(),
        seed_scores in prop::collection::vec(0.0f64..=1.0, 6),
        mmr in any::<bool>(),
    ) {
        let n = candidates.len();
        let assessments: Vec<_> = (0..n)
            .map(|i| assessment(i, seed_scores[i % seed_scores.len()]))
            .collect();
        let m = DiversityCalculator::new(DiversityConfig::default()).matrix(&candidates);
        let config = SelectionConfig {
            algorithm: if mmr { SelectionAlgorithm::Mmr } else { SelectionAlgorithm::Greedy },
            ..SelectionConfig::default()
        };
        let selection = select(&candidates, &assessments, &m, &config);

        prop_assert!(!selection.is_empty());
        prop_assert!(selection.len() <= config.max_ensemble_size);
        let primary = selection.primary();
        for a in &assessments {
            prop_assert!(a.overall_score() <= assessments[primary].overall_score() + 1e-12);
        }
    }

    #[test]
    fn every_selected_pair_respects_the_diversity_gate(
        candidates in arb_candidates(),
        scores in prop::collection::vec(0.0f64..=1.0, 6),
        threshold in 0.0f64..=0.5,
    ) {
        let n = candidates.len();
        let assessments: Vec<_> = (0..n)
            .map(|i| assessment(i, scores[i % scores.len()]))
            .collect();
        let m = DiversityCalculator::new(DiversityConfig::default()).matrix(&candidates);
        let config = SelectionConfig {
            min_diversity_threshold: threshold,
            ..SelectionConfig::default()
        };
        let selection = select(&candidates, &assessments, &m, &config);
        for (a, &i) in selection.selected.iter().enumerate() {
            for &j in &selection.selected[a + 1..] {
                prop_assert!(m.get(i, j) >= threshold);
            }
        }
    }

    #[test]
    fn primary_elements_always_survive_pareto(
        candidates in arb_candidates(),
        scores in prop::collection::vec(0.0f64..=1.0, 6),
    ) {
        let n = candidates.len();
        let assessments: Vec<_> = (0..n)
            .map(|i| assessment(i, scores[i % scores.len()]))
            .collect();
        let m = DiversityCalculator::new(DiversityConfig::default()).matrix(&candidates);
        let selection = select(&candidates, &assessments, &m, &SelectionConfig::default());
        let set = optimize(&candidates, &assessments, &selection, &m);

        let primary = selection.primary();
        // Deduplication only applies to non-primary candidates; every
        // primary element survives, repeats included.
        prop_assert_eq!(
            set.primary_elements().count(),
            candidates[primary].content_elements().count()
        );
    }
}
