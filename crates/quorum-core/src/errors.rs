/// Result alias used across the workspace.
pub type QuorumResult<T> = Result<T, QuorumError>;

/// Engine errors.
///
/// Only invalid inputs abort a run. Numeric degeneracy is handled by
/// documented fallbacks, and a quality shortfall is a normal outcome
/// reported in the verification report, never an error.
#[derive(Debug, thiserror::Error)]
pub enum QuorumError {
    #[error("candidate list is empty")]
    NoCandidates,

    #[error("dimension weights sum to {sum}, expected 1.0")]
    WeightSum { sum: f64 },

    #[error("diversity weights sum to {sum}, expected 1.0")]
    DiversityWeightSum { sum: f64 },

    #[error("alpha parameter {alpha} outside [0, 1]")]
    AlphaRange { alpha: f64 },

    #[error("ensemble size bounds inverted: min {min} > max {max}")]
    EnsembleBounds { min: usize, max: usize },

    #[error("max ensemble size must be at least 1")]
    ZeroEnsemble,

    #[error("non-finite value in {field}")]
    NonFinite { field: &'static str },

    #[error("malformed evidence: {reason}")]
    MalformedEvidence { reason: String },

    #[error("config parse failed: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
