//! Default values for every configuration knob, in one place.

use crate::models::DimensionScores;

pub const DEFAULT_GLOBAL_THRESHOLD: f64 = 0.75;

pub fn default_dimension_weights() -> DimensionScores {
    DimensionScores {
        accuracy: 0.30,
        completeness: 0.25,
        consistency: 0.15,
        relevance: 0.25,
        novelty: 0.05,
    }
}

pub fn default_dimension_thresholds() -> DimensionScores {
    DimensionScores {
        accuracy: 0.80,
        completeness: 0.75,
        consistency: 0.85,
        relevance: 0.75,
        novelty: 0.30,
    }
}

pub fn default_variance_priors() -> DimensionScores {
    DimensionScores {
        accuracy: 0.04,
        completeness: 0.06,
        consistency: 0.03,
        relevance: 0.05,
        novelty: 0.08,
    }
}

pub const DEFAULT_CONTENT_WEIGHT: f64 = 0.4;
pub const DEFAULT_STRUCTURE_WEIGHT: f64 = 0.3;
pub const DEFAULT_EMPHASIS_WEIGHT: f64 = 0.3;
pub const DEFAULT_NGRAM_SIZE: usize = 2;

pub const DEFAULT_ALPHA: f64 = 0.7;
pub const DEFAULT_MIN_ENSEMBLE_SIZE: usize = 1;
pub const DEFAULT_MAX_ENSEMBLE_SIZE: usize = 5;
pub const DEFAULT_MIN_DIVERSITY_THRESHOLD: f64 = 0.0;

pub const DEFAULT_MAX_PRUNING_RETRIES: usize = 3;
pub const DEFAULT_MAX_REFINEMENT_RETRIES: usize = 2;
pub const DEFAULT_SECTION_MATCH_THRESHOLD: f64 = 0.1;
pub const DEFAULT_MAX_PRUNING_FRACTION: f64 = 0.5;

pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;
pub const DEFAULT_MIN_MARGIN: f64 = 0.05;
pub const DEFAULT_MAX_MARGIN: f64 = 0.2;

pub const DEFAULT_BASE_PRIOR: f64 = 0.3;
pub const DEFAULT_MUTUAL_INFORMATION_FLOOR: f64 = 0.1;

pub fn default_important_keywords() -> Vec<String> {
    [
        "conclusion",
        "summary",
        "recommendation",
        "diagnosis",
        "analysis",
        "key finding",
        "critical",
        "essential",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}
