//! Data models produced and consumed by the pipeline stages.

pub mod assessment;
pub mod bayesian;
pub mod combined;
pub mod dimension;
pub mod diversity;
pub mod ensemble;
pub mod uncertainty;

pub use assessment::{CandidateAssessment, RefinementAnalysis};
pub use bayesian::BayesianMetrics;
pub use combined::{
    CombinedResponse, CombinedSection, FailingDimension, RefinementDirective, Severity,
    SourceContribution, Suggestion, VerificationReport,
};
pub use dimension::{Dimension, DimensionScores};
pub use diversity::DiversityMatrix;
pub use ensemble::{EnsembleSelection, ParetoSet, ScoredElement};
pub use uncertainty::{DimensionUncertainty, UncertaintyRecord};
