use proptest::prelude::*;
use quorum_core::candidate::{Candidate, Element, ElementCategory};
use quorum_core::config::VerificationConfig;
use quorum_core::models::{ParetoSet, ScoredElement};
use quorum_combine::{assembler, pruning};

fn arb_pareto() -> impl Strategy<Value = (Candidate, ParetoSet)> {
    (
        prop::collection::vec("[a-z]{2,6}( [a-z]{2,6}){1,5}", 1..5),
        prop::collection::vec(
            ("[a-z]{2,6}( [a-z]{2,6}){1,5}", 0.1f64..=1.0, 1usize..4),
            0..6,
        ),
    )
        .prop_map(|(primary_texts, extra)| {
            let primary_elements: Vec<Element> = primary_texts
                .iter()
                .enumerate()
                .map(|(i, t)| Element::new(format!("p{i}"), 0, ElementCategory::Claim, t.as_str()))
                .collect();
            let primary = Candidate::new("primary", primary_elements.clone());

            let mut elements: Vec<ScoredElement> = primary_elements
                .into_iter()
                .map(|e| ScoredElement {
                    element: e,
                    quality: 0.8,
                    diversity_contribution: 0.3,
                    combination_weight: 0.8,
                })
                .collect();
            for (i, (text, quality, source)) in extra.into_iter().enumerate() {
                elements.push(ScoredElement {
                    element: Element::new(format!("x{i}"), source, ElementCategory::Claim, text),
                    quality,
                    diversity_contribution: 0.3,
                    combination_weight: quality,
                });
            }
            (primary, ParetoSet {
                primary: 0,
                elements,
            })
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn assembly_accounts_for_every_element_exactly_once(
        (primary, pareto) in arb_pareto(),
        threshold in 0.0f64..=0.5,
    ) {
        let response = assembler::assemble(&primary, &pareto, threshold);
        prop_assert_eq!(response.element_count(), pareto.elements.len());

        let composition_total: usize = response
            .ensemble_composition
            .iter()
            .map(|c| c.elements)
            .sum();
        prop_assert_eq!(composition_total, response.element_count());
        prop_assert!((0.0..=1.0).contains(&response.primary_contribution_ratio));
    }

    #[test]
    fn section_weights_always_sum_to_one(
        (primary, pareto) in arb_pareto(),
        threshold in 0.0f64..=0.5,
    ) {
        let response = assembler::assemble(&primary, &pareto, threshold);
        for section in &response.sections {
            let sum: f64 = section.elements.iter().map(|e| e.combination_weight).sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn pruning_never_touches_primary_elements(
        (primary, pareto) in arb_pareto(),
    ) {
        let config = VerificationConfig {
            important_keywords: vec![],
            max_pruning_fraction: 1.0,
            ..VerificationConfig::default()
        };
        let mut response = assembler::assemble(&primary, &pareto, 0.1);
        let original = response.element_count();
        let primary_count = response.elements().filter(|e| e.is_from(0)).count();

        let mut pruned = 0;
        while pruning::prune_one(&mut response, pruned, original, &config) {
            pruned += 1;
        }
        // Only non-primary elements can go; the primary backbone stays.
        prop_assert_eq!(
            response.elements().filter(|e| e.is_from(0)).count(),
            primary_count
        );
        prop_assert_eq!(response.element_count(), primary_count);
        prop_assert_eq!(pruned, original - primary_count);

        // Once nothing non-primary remains, pruning is a no-op.
        let before = response.clone();
        prop_assert!(!pruning::prune_one(&mut response, pruned, original, &config));
        prop_assert_eq!(response, before);
    }
}
