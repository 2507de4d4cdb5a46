/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Below this, the Bayesian evidence factor is treated as degenerate and
/// the posterior falls back to the prior.
pub const EVIDENCE_EPSILON: f64 = 1e-9;

/// Tolerance for weight-sum validation and posterior self-checks.
pub const FLOAT_TOLERANCE: f64 = 1e-9;

/// Jaccard similarity at or above which a statement counts as a
/// near-verbatim repetition of a domain fact (novelty scoring).
pub const REPETITION_SIMILARITY: f64 = 0.8;

/// Minimum token overlap for two claims to be about the same subject
/// (consistency scoring).
pub const SUBJECT_OVERLAP: f64 = 0.5;

/// Title given to the implicit section formed by leading headerless
/// elements of a candidate.
pub const IMPLICIT_SECTION_TITLE: &str = "Overview";
