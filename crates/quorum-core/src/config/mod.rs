//! Engine configuration.
//!
//! Weight and threshold invariants are validated once, at construction,
//! not scattered at each use site. All structs take `#[serde(default)]`
//! so a partial TOML document overrides only what it names.

pub mod defaults;

use serde::{Deserialize, Serialize};

use crate::errors::{QuorumError, QuorumResult};
use crate::models::DimensionScores;

/// Ensemble selection algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionAlgorithm {
    Greedy,
    Mmr,
}

/// Weights and n-gram size for pairwise diversity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversityConfig {
    pub content_weight: f64,
    pub structure_weight: f64,
    pub emphasis_weight: f64,
    pub ngram_size: usize,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            content_weight: defaults::DEFAULT_CONTENT_WEIGHT,
            structure_weight: defaults::DEFAULT_STRUCTURE_WEIGHT,
            emphasis_weight: defaults::DEFAULT_EMPHASIS_WEIGHT,
            ngram_size: defaults::DEFAULT_NGRAM_SIZE,
        }
    }
}

/// Quality/diversity trade-off and ensemble bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub algorithm: SelectionAlgorithm,
    /// Higher alpha favors quality over diversity.
    pub alpha: f64,
    pub min_ensemble_size: usize,
    pub max_ensemble_size: usize,
    /// A candidate must keep at least this much diversity to every
    /// already-selected member to be eligible.
    pub min_diversity_threshold: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            algorithm: SelectionAlgorithm::Greedy,
            alpha: defaults::DEFAULT_ALPHA,
            min_ensemble_size: defaults::DEFAULT_MIN_ENSEMBLE_SIZE,
            max_ensemble_size: defaults::DEFAULT_MAX_ENSEMBLE_SIZE,
            min_diversity_threshold: defaults::DEFAULT_MIN_DIVERSITY_THRESHOLD,
        }
    }
}

/// Final-gate verification and pruning bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    pub max_pruning_retries: usize,
    /// Reported to the upstream regeneration collaborator; this engine
    /// never consumes it itself.
    pub max_refinement_retries: usize,
    /// Minimum section-match score before a new section is created.
    pub section_match_threshold: f64,
    /// Never prune more than this fraction of the combined elements.
    pub max_pruning_fraction: f64,
    /// Elements containing any of these keywords are never pruned.
    pub important_keywords: Vec<String>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            max_pruning_retries: defaults::DEFAULT_MAX_PRUNING_RETRIES,
            max_refinement_retries: defaults::DEFAULT_MAX_REFINEMENT_RETRIES,
            section_match_threshold: defaults::DEFAULT_SECTION_MATCH_THRESHOLD,
            max_pruning_fraction: defaults::DEFAULT_MAX_PRUNING_FRACTION,
            important_keywords: defaults::default_important_keywords(),
        }
    }
}

/// Confidence-interval parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UncertaintyConfig {
    pub confidence_level: f64,
    pub variance_priors: DimensionScores,
    pub min_margin: f64,
    pub max_margin: f64,
}

impl Default for UncertaintyConfig {
    fn default() -> Self {
        Self {
            confidence_level: defaults::DEFAULT_CONFIDENCE_LEVEL,
            variance_priors: defaults::default_variance_priors(),
            min_margin: defaults::DEFAULT_MIN_MARGIN,
            max_margin: defaults::DEFAULT_MAX_MARGIN,
        }
    }
}

/// Bayesian evaluator calibration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BayesianConfig {
    /// Floor of the prior before intent coverage lifts it.
    pub base_prior: f64,
    /// Mutual information below this collapses to 0.
    pub mutual_information_floor: f64,
}

impl Default for BayesianConfig {
    fn default() -> Self {
        Self {
            base_prior: defaults::DEFAULT_BASE_PRIOR,
            mutual_information_floor: defaults::DEFAULT_MUTUAL_INFORMATION_FLOOR,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Per-dimension weights for the overall score. Must sum to 1.0.
    pub dimension_weights: DimensionScores,
    pub global_threshold: f64,
    pub dimension_thresholds: DimensionScores,
    pub diversity: DiversityConfig,
    pub selection: SelectionConfig,
    pub verification: VerificationConfig,
    pub uncertainty: UncertaintyConfig,
    pub bayesian: BayesianConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dimension_weights: defaults::default_dimension_weights(),
            global_threshold: defaults::DEFAULT_GLOBAL_THRESHOLD,
            dimension_thresholds: defaults::default_dimension_thresholds(),
            diversity: DiversityConfig::default(),
            selection: SelectionConfig::default(),
            verification: VerificationConfig::default(),
            uncertainty: UncertaintyConfig::default(),
            bayesian: BayesianConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse from a TOML document. Missing fields keep their defaults.
    /// The result is validated before being returned.
    pub fn from_toml(input: &str) -> QuorumResult<Self> {
        let config: EngineConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every construction-time invariant.
    pub fn validate(&self) -> QuorumResult<()> {
        if !self.dimension_weights.all_finite() {
            return Err(QuorumError::NonFinite {
                field: "dimension_weights",
            });
        }
        let weight_sum = self.dimension_weights.sum();
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(QuorumError::WeightSum { sum: weight_sum });
        }

        let diversity_sum = self.diversity.content_weight
            + self.diversity.structure_weight
            + self.diversity.emphasis_weight;
        if !diversity_sum.is_finite() {
            return Err(QuorumError::NonFinite { field: "diversity" });
        }
        if (diversity_sum - 1.0).abs() > 1e-6 {
            return Err(QuorumError::DiversityWeightSum { sum: diversity_sum });
        }

        if !self.selection.alpha.is_finite() || !(0.0..=1.0).contains(&self.selection.alpha) {
            return Err(QuorumError::AlphaRange {
                alpha: self.selection.alpha,
            });
        }
        if self.selection.max_ensemble_size == 0 {
            return Err(QuorumError::ZeroEnsemble);
        }
        if self.selection.min_ensemble_size > self.selection.max_ensemble_size {
            return Err(QuorumError::EnsembleBounds {
                min: self.selection.min_ensemble_size,
                max: self.selection.max_ensemble_size,
            });
        }

        if !self.global_threshold.is_finite() || !self.dimension_thresholds.all_finite() {
            return Err(QuorumError::NonFinite { field: "thresholds" });
        }
        Ok(())
    }
}
