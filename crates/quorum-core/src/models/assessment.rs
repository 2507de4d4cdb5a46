//! Per-candidate assessment: the pipeline-result struct threaded between
//! the scoring stages instead of a mutable shared context.

use serde::{Deserialize, Serialize};

use super::bayesian::BayesianMetrics;
use super::combined::{FailingDimension, Suggestion};
use super::dimension::DimensionScores;
use super::uncertainty::UncertaintyRecord;

/// Pass/fail verdict plus refinement guidance for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinementAnalysis {
    /// Weighted overall score across the five dimensions.
    pub overall_score: f64,
    pub passed: bool,
    /// Failing dimensions ranked by refinement priority, highest first.
    pub failing: Vec<FailingDimension>,
    pub suggestions: Vec<Suggestion>,
}

/// Everything the scoring stages know about one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAssessment {
    /// Index of the candidate in the input list.
    pub candidate: usize,
    pub quality: DimensionScores,
    pub bayesian: BayesianMetrics,
    pub uncertainty: UncertaintyRecord,
    pub refinement: RefinementAnalysis,
}

impl CandidateAssessment {
    pub fn overall_score(&self) -> f64 {
        self.refinement.overall_score
    }
}
