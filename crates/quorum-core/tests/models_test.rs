use quorum_core::models::{BayesianMetrics, Dimension, DimensionScores, VerificationReport};

#[test]
fn dimension_canonical_order_is_stable() {
    let names: Vec<&str> = Dimension::ALL.iter().map(|d| d.name()).collect();
    assert_eq!(
        names,
        vec![
            "accuracy",
            "completeness",
            "consistency",
            "relevance",
            "novelty"
        ]
    );
}

#[test]
fn bayesian_self_check_holds_for_consistent_metrics() {
    let metrics = BayesianMetrics {
        likelihood: 0.6,
        prior: 0.5,
        evidence_factor: 0.55,
        posterior: 0.6 * 0.5 / 0.55,
        information_gain: 0.2,
        mutual_information: 0.4,
    };
    assert!(metrics.self_check());
}

#[test]
fn bayesian_self_check_rejects_broken_identity() {
    let metrics = BayesianMetrics {
        likelihood: 0.6,
        prior: 0.5,
        evidence_factor: 0.55,
        posterior: 0.9,
        information_gain: 0.0,
        mutual_information: 0.0,
    };
    assert!(!metrics.self_check());
}

#[test]
fn bayesian_degenerate_evidence_falls_back_to_prior() {
    let metrics = BayesianMetrics {
        likelihood: 0.6,
        prior: 0.42,
        evidence_factor: 0.0,
        posterior: 0.42,
        information_gain: 0.0,
        mutual_information: 0.0,
    };
    assert!(metrics.self_check());
}

#[test]
fn verification_summary_names_failing_dimensions() {
    let report = VerificationReport {
        passed: false,
        dimension_scores: DimensionScores::uniform(0.7),
        overall_score: 0.7,
        pruned_element_count: 2,
        retries_used: 3,
        shortfall: vec![quorum_core::models::FailingDimension {
            dimension: Dimension::Accuracy,
            score: 0.7,
            threshold: 0.8,
            gap: 0.1,
            priority: 1.0,
        }],
        directive: None,
    };
    let summary = report.summary();
    assert!(summary.contains("failed"));
    assert!(summary.contains("accuracy"));
}
