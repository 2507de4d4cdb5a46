//! Uncertainty quantification: variance and confidence intervals per
//! quality dimension.

use quorum_core::candidate::Candidate;
use quorum_core::config::UncertaintyConfig;
use quorum_core::models::{
    BayesianMetrics, Dimension, DimensionUncertainty, UncertaintyRecord,
};

const VARIANCE_MIN: f64 = 0.01;
const VARIANCE_MAX: f64 = 0.25;

/// Quantify uncertainty for the five dimension scores of one candidate.
pub fn quantify(
    candidate: &Candidate,
    bayesian: &BayesianMetrics,
    config: &UncertaintyConfig,
) -> UncertaintyRecord {
    let complexity = complexity(candidate);
    let z = z_score(config.confidence_level);

    let mut record = UncertaintyRecord {
        overall_confidence: 0.5 + (bayesian.posterior - 0.5).abs(),
        confidence_level: config.confidence_level,
        ..UncertaintyRecord::default()
    };

    for dimension in Dimension::ALL {
        let prior = config.variance_priors.get(dimension);
        let strength = evidence_strength(dimension, bayesian);
        let variance = (prior * complexity / strength).clamp(VARIANCE_MIN, VARIANCE_MAX);
        let half_width = (z * variance.sqrt()).clamp(config.min_margin, config.max_margin);
        let confidence = (1.0 - 2.0 * variance).clamp(0.1, 0.99);
        record.set(
            dimension,
            DimensionUncertainty {
                variance,
                half_width,
                confidence,
            },
        );
    }
    record
}

/// Structural complexity in [0.5, 2.0], mixing element count, derived
/// section count, and category variety at 0.5/0.3/0.2.
fn complexity(candidate: &Candidate) -> f64 {
    let element_factor = (candidate.elements.len() as f64 / 20.0).min(1.0);
    let section_factor = (candidate.derived_sections().len() as f64 / 5.0).min(1.0);
    let variety = candidate
        .elements
        .iter()
        .map(|e| e.category)
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    let variety_factor = variety as f64 / 5.0;

    let mix = 0.5 * element_factor + 0.3 * section_factor + 0.2 * variety_factor;
    0.5 + 1.5 * mix
}

/// How strongly the evidence pins down each dimension, in [0.5, 2.0].
/// Consistency and novelty are judged from the candidate alone, so
/// their strengths are fixed.
fn evidence_strength(dimension: Dimension, bayesian: &BayesianMetrics) -> f64 {
    match dimension {
        Dimension::Accuracy => 0.5 + 1.5 * bayesian.likelihood.clamp(0.0, 1.0),
        Dimension::Completeness => 0.5 + 1.5 * bayesian.evidence_factor.clamp(0.0, 1.0),
        Dimension::Relevance => 0.5 + 1.5 * bayesian.mutual_information.clamp(0.0, 1.0),
        Dimension::Consistency => 0.8,
        Dimension::Novelty => 0.7,
    }
}

/// Two-sided normal quantile for the supported confidence levels.
fn z_score(confidence_level: f64) -> f64 {
    if confidence_level >= 0.95 {
        1.96
    } else {
        1.645
    }
}
