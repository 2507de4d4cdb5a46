//! ScoringEngine: runs the Bayesian evaluator, the five dimensions,
//! the uncertainty quantifier, and the refinement analyzer on one
//! candidate, in that order, collecting the results into a
//! `CandidateAssessment`.

use tracing::debug;

use quorum_core::candidate::Candidate;
use quorum_core::config::EngineConfig;
use quorum_core::evidence::DomainEvidence;
use quorum_core::intent::QueryIntent;
use quorum_core::models::{CandidateAssessment, DimensionScores};

use crate::dimensions::{accuracy, completeness, consistency, novelty, relevance};
use crate::{bayesian, refinement, uncertainty};

/// Per-candidate scoring pipeline. Stateless; safe to share across
/// rayon workers by reference.
pub struct ScoringEngine {
    config: EngineConfig,
}

impl ScoringEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Assess one candidate. `index` is its position in the input list.
    pub fn assess(
        &self,
        index: usize,
        candidate: &Candidate,
        evidence: &DomainEvidence,
        intent: &QueryIntent,
    ) -> CandidateAssessment {
        let metrics = bayesian::evaluate(candidate, evidence, intent, &self.config.bayesian);

        // An empty candidate scores exactly 0.0 on every dimension.
        let quality = if candidate.is_empty() {
            DimensionScores::zero()
        } else {
            DimensionScores {
                accuracy: accuracy::score(candidate, evidence, Some(&metrics)),
                completeness: completeness::score(candidate, evidence, intent),
                consistency: consistency::score(candidate),
                relevance: relevance::score(candidate, intent, Some(&metrics)),
                novelty: novelty::score(candidate, evidence),
            }
            .clamped()
        };

        let uncertainty = uncertainty::quantify(candidate, &metrics, &self.config.uncertainty);
        let refinement = refinement::analyze(
            &quality,
            &uncertainty,
            &self.config.dimension_weights,
            &self.config.dimension_thresholds,
            self.config.global_threshold,
        );

        debug!(
            candidate = index,
            overall = refinement.overall_score,
            passed = refinement.passed,
            posterior = metrics.posterior,
            "scored candidate"
        );

        CandidateAssessment {
            candidate: index,
            quality,
            bayesian: metrics,
            uncertainty,
            refinement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quorum_core::candidate::{Element, ElementCategory};

    #[test]
    fn empty_candidate_scores_zero_everywhere() {
        let engine = ScoringEngine::new(EngineConfig::default());
        let assessment = engine.assess(
            0,
            &Candidate::new("c0", vec![]),
            &DomainEvidence::default(),
            &QueryIntent::default(),
        );
        assert_eq!(assessment.quality, DimensionScores::zero());
        assert_eq!(assessment.refinement.overall_score, 0.0);
        assert!(!assessment.refinement.passed);
    }

    #[test]
    fn assessment_carries_all_stages() {
        let engine = ScoringEngine::new(EngineConfig::default());
        let candidate = Candidate::new(
            "c0",
            vec![Element::new(
                "e0",
                0,
                ElementCategory::Claim,
                "a claim about the domain",
            )],
        );
        let assessment = engine.assess(
            0,
            &candidate,
            &DomainEvidence::default(),
            &QueryIntent::default(),
        );
        assert!(assessment.bayesian.self_check());
        assert!(assessment.uncertainty.overall_confidence >= 0.5);
        assert!((0.0..=1.0).contains(&assessment.refinement.overall_score));
    }
}
