use proptest::prelude::*;
use quorum_core::candidate::{Candidate, Element, ElementCategory};
use quorum_core::config::{BayesianConfig, EngineConfig};
use quorum_core::evidence::{Concept, DomainEvidence, Fact};
use quorum_core::intent::{IntentComponent, QueryIntent};
use quorum_core::models::Dimension;
use quorum_scoring::{bayesian, ScoringEngine};

fn arb_candidate() -> impl Strategy<Value = Candidate> {
    prop::collection::vec(("[a-z]{2,8}( [a-z]{2,8}){0,6}", 0u8..4), 0..8).prop_map(|parts| {
        let elements = parts
            .into_iter()
            .enumerate()
            .map(|(i, (text, kind))| {
                let category = match kind {
                    0 => ElementCategory::Claim,
                    1 => ElementCategory::Evidence,
                    2 => ElementCategory::Formula,
                    _ => ElementCategory::SectionHeader,
                };
                Element::new(format!("e{i}"), 0, category, text)
            })
            .collect();
        Candidate::new("c0", elements)
    })
}

fn arb_evidence() -> impl Strategy<Value = DomainEvidence> {
    (
        prop::collection::vec(("[a-z]{2,8}( [a-z]{2,8}){0,4}", 0.0f64..=1.0), 0..4),
        prop::collection::vec(("[a-z]{2,8}", 0.0f64..=1.0), 0..4),
    )
        .prop_map(|(facts, concepts)| DomainEvidence {
            facts: facts
                .into_iter()
                .map(|(statement, confidence)| Fact {
                    statement,
                    confidence,
                })
                .collect(),
            formulas: vec![],
            key_concepts: concepts
                .into_iter()
                .map(|(name, importance)| Concept { name, importance })
                .collect(),
        })
}

fn arb_intent() -> impl Strategy<Value = QueryIntent> {
    prop::collection::vec(("[a-z]{2,8}", prop::collection::vec("[a-z]{2,8}", 0..3)), 0..3)
        .prop_map(|components| QueryIntent {
            components: components
                .into_iter()
                .map(|(name, terms)| {
                    let refs: Vec<&str> = terms.iter().map(String::as_str).collect();
                    IntentComponent::new(name, &refs)
                })
                .collect(),
            required_topics: vec![],
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn posterior_identity_holds_for_arbitrary_inputs(
        candidate in arb_candidate(),
        evidence in arb_evidence(),
        intent in arb_intent(),
    ) {
        let metrics = bayesian::evaluate(
            &candidate,
            &evidence,
            &intent,
            &BayesianConfig::default(),
        );
        prop_assert!(metrics.self_check());
        prop_assert!((0.0..=1.0).contains(&metrics.posterior));
        prop_assert!((0.0..=1.0).contains(&metrics.prior));
        prop_assert!((0.0..=1.0).contains(&metrics.likelihood));
    }

    #[test]
    fn quality_scores_stay_in_unit_interval(
        candidate in arb_candidate(),
        evidence in arb_evidence(),
        intent in arb_intent(),
    ) {
        let engine = ScoringEngine::new(EngineConfig::default());
        let assessment = engine.assess(0, &candidate, &evidence, &intent);
        for d in Dimension::ALL {
            prop_assert!((0.0..=1.0).contains(&assessment.quality.get(d)));
        }
        prop_assert!((0.0..=1.0).contains(&assessment.refinement.overall_score));
    }

    #[test]
    fn empty_candidate_always_scores_zero(
        evidence in arb_evidence(),
        intent in arb_intent(),
    ) {
        let engine = ScoringEngine::new(EngineConfig::default());
        let assessment = engine.assess(0, &Candidate::new("c0", vec![]), &evidence, &intent);
        for d in Dimension::ALL {
            prop_assert_eq!(assessment.quality.get(d), 0.0);
        }
    }

    #[test]
    fn uncertainty_fields_stay_in_bounds(
        candidate in arb_candidate(),
        evidence in arb_evidence(),
        intent in arb_intent(),
    ) {
        let engine = ScoringEngine::new(EngineConfig::default());
        let assessment = engine.assess(0, &candidate, &evidence, &intent);
        for (_, u) in assessment.uncertainty.iter() {
            prop_assert!((0.01..=0.25).contains(&u.variance));
            prop_assert!((0.05..=0.2).contains(&u.half_width));
            prop_assert!((0.1..=0.99).contains(&u.confidence));
        }
        prop_assert!((0.5..=1.0).contains(&assessment.uncertainty.overall_confidence));
    }
}
