//! Pipeline orchestration.

use rayon::prelude::*;
use tracing::{debug, info};

use quorum_core::candidate::Candidate;
use quorum_core::config::EngineConfig;
use quorum_core::errors::{QuorumError, QuorumResult};
use quorum_core::evidence::DomainEvidence;
use quorum_core::intent::QueryIntent;
use quorum_core::models::{
    CandidateAssessment, CombinedResponse, DiversityMatrix, EnsembleSelection, ParetoSet,
    VerificationReport,
};
use quorum_combine::Combiner;
use quorum_ensemble::{self as ensemble, DiversityCalculator};
use quorum_scoring::ScoringEngine;

/// The full optimization pipeline. Stateless between calls; the same
/// pipeline can serve any number of requests.
pub struct Pipeline {
    config: EngineConfig,
    scoring: ScoringEngine,
    diversity: DiversityCalculator,
    combiner: Combiner,
}

impl Pipeline {
    /// Build a pipeline, rejecting invalid configuration up front.
    pub fn new(config: EngineConfig) -> QuorumResult<Self> {
        config.validate()?;
        Ok(Self {
            scoring: ScoringEngine::new(config.clone()),
            diversity: DiversityCalculator::new(config.diversity.clone()),
            combiner: Combiner::new(config.clone()),
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the whole pipeline: score, diversify, select, optimize,
    /// combine, verify.
    pub fn evaluate_and_combine(
        &self,
        candidates: &[Candidate],
        evidence: &DomainEvidence,
        intent: &QueryIntent,
    ) -> QuorumResult<(CombinedResponse, VerificationReport)> {
        self.validate_inputs(candidates, evidence, intent)?;
        info!(candidates = candidates.len(), "pipeline started");

        let assessments = self.score_candidates(candidates, evidence, intent);
        let matrix = self.compute_diversity_matrix(candidates);
        let selection = self.select_ensemble(candidates, &assessments, &matrix);
        debug!(ensemble = ?selection.selected, "ensemble selected");

        self.combine(candidates, &assessments, &selection, &matrix, evidence, intent)
    }

    /// Score one candidate through all four scoring stages.
    pub fn score_candidate(
        &self,
        index: usize,
        candidate: &Candidate,
        evidence: &DomainEvidence,
        intent: &QueryIntent,
    ) -> CandidateAssessment {
        self.scoring.assess(index, candidate, evidence, intent)
    }

    /// Score every candidate in parallel. The ordered collect keeps
    /// assessment `i` aligned with candidate `i`.
    pub fn score_candidates(
        &self,
        candidates: &[Candidate],
        evidence: &DomainEvidence,
        intent: &QueryIntent,
    ) -> Vec<CandidateAssessment> {
        candidates
            .par_iter()
            .enumerate()
            .map(|(i, c)| self.scoring.assess(i, c, evidence, intent))
            .collect()
    }

    /// Pairwise diversity matrix over the candidate set.
    pub fn compute_diversity_matrix(&self, candidates: &[Candidate]) -> DiversityMatrix {
        self.diversity.matrix(candidates)
    }

    /// Greedy or MMR ensemble selection, primary first.
    pub fn select_ensemble(
        &self,
        candidates: &[Candidate],
        assessments: &[CandidateAssessment],
        matrix: &DiversityMatrix,
    ) -> EnsembleSelection {
        ensemble::select(candidates, assessments, matrix, &self.config.selection)
    }

    /// Pareto-optimize the selected ensemble's elements, then assemble,
    /// verify, and prune.
    pub fn combine(
        &self,
        candidates: &[Candidate],
        assessments: &[CandidateAssessment],
        selection: &EnsembleSelection,
        matrix: &DiversityMatrix,
        evidence: &DomainEvidence,
        intent: &QueryIntent,
    ) -> QuorumResult<(CombinedResponse, VerificationReport)> {
        if selection.is_empty() {
            return Err(QuorumError::NoCandidates);
        }
        let pareto: ParetoSet = ensemble::optimize(candidates, assessments, selection, matrix);
        debug!(elements = pareto.elements.len(), "pareto set built");

        let primary = &candidates[selection.primary()];
        Ok(self.combiner.combine(primary, &pareto, evidence, intent))
    }

    /// Fail fast on malformed inputs, before any computation.
    fn validate_inputs(
        &self,
        candidates: &[Candidate],
        evidence: &DomainEvidence,
        intent: &QueryIntent,
    ) -> QuorumResult<()> {
        if candidates.is_empty() {
            return Err(QuorumError::NoCandidates);
        }
        for candidate in candidates {
            for element in &candidate.elements {
                if !element.relevance.is_finite() {
                    return Err(QuorumError::NonFinite {
                        field: "element relevance",
                    });
                }
            }
        }
        for component in &intent.components {
            if !component.weight.is_finite() {
                return Err(QuorumError::NonFinite {
                    field: "intent component weight",
                });
            }
        }
        evidence.validate()
    }
}
