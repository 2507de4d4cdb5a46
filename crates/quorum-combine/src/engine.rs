//! Combiner: assemble, verify, and prune until the thresholds pass or
//! the retry budget runs out, keeping the best version seen.

use tracing::{debug, info};

use quorum_core::candidate::Candidate;
use quorum_core::config::EngineConfig;
use quorum_core::evidence::DomainEvidence;
use quorum_core::intent::QueryIntent;
use quorum_core::models::{
    CandidateAssessment, CombinedResponse, ParetoSet, VerificationReport,
};
use quorum_scoring::{refinement, ScoringEngine};

use crate::{assembler, pruning, verifier};

/// Assembly + verification + bounded pruning.
pub struct Combiner {
    scoring: ScoringEngine,
}

impl Combiner {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            scoring: ScoringEngine::new(config),
        }
    }

    /// Combine the Pareto set into one response and verify it. On
    /// failure, weak non-primary elements are pruned one per retry; the
    /// best-scoring version seen is what gets returned, pass or fail.
    pub fn combine(
        &self,
        primary: &Candidate,
        pareto: &ParetoSet,
        evidence: &DomainEvidence,
        intent: &QueryIntent,
    ) -> (CombinedResponse, VerificationReport) {
        let config = self.scoring.config().clone();

        let mut response = assembler::assemble(
            primary,
            pareto,
            config.verification.section_match_threshold,
        );
        let original_count = response.element_count();

        let mut assessment = verifier::verify(&self.scoring, &response, evidence, intent);
        let mut best: (CombinedResponse, CandidateAssessment) =
            (response.clone(), assessment.clone());

        let mut retries = 0usize;
        let mut pruned = 0usize;
        while !assessment.refinement.passed && retries < config.verification.max_pruning_retries {
            if !pruning::prune_one(&mut response, pruned, original_count, &config.verification) {
                debug!("nothing left to prune");
                break;
            }
            pruned += 1;
            retries += 1;

            assessment = verifier::verify(&self.scoring, &response, evidence, intent);
            if assessment.overall_score() > best.1.overall_score() {
                best = (response.clone(), assessment.clone());
            }
            if assessment.refinement.passed {
                best = (response.clone(), assessment.clone());
            }
        }

        let (best_response, best_assessment) = best;
        let report = report_from(&best_assessment, pruned, retries);
        info!(
            passed = report.passed,
            overall = report.overall_score,
            pruned_elements = report.pruned_element_count,
            retries = report.retries_used,
            "combination verified"
        );
        (best_response, report)
    }
}

fn report_from(
    assessment: &CandidateAssessment,
    pruned: usize,
    retries: usize,
) -> VerificationReport {
    let analysis = &assessment.refinement;
    VerificationReport {
        passed: analysis.passed,
        dimension_scores: assessment.quality,
        overall_score: analysis.overall_score,
        pruned_element_count: pruned,
        retries_used: retries,
        shortfall: analysis.failing.clone(),
        directive: (!analysis.passed).then(|| refinement::directive(analysis)),
    }
}
