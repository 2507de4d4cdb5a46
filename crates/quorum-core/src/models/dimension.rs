//! The five quality dimensions and per-dimension score records.

use serde::{Deserialize, Serialize};

/// A quality dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Accuracy,
    Completeness,
    Consistency,
    Relevance,
    Novelty,
}

impl Dimension {
    /// Canonical ordering, used everywhere a stable iteration or
    /// tie-break over dimensions is needed.
    pub const ALL: [Dimension; 5] = [
        Dimension::Accuracy,
        Dimension::Completeness,
        Dimension::Consistency,
        Dimension::Relevance,
        Dimension::Novelty,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Accuracy => "accuracy",
            Dimension::Completeness => "completeness",
            Dimension::Consistency => "consistency",
            Dimension::Relevance => "relevance",
            Dimension::Novelty => "novelty",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One scalar per quality dimension.
///
/// The same struct serves as scores, weights, thresholds, and variance
/// priors, so every record over dimensions has the identical key set by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub accuracy: f64,
    pub completeness: f64,
    pub consistency: f64,
    pub relevance: f64,
    pub novelty: f64,
}

impl DimensionScores {
    pub fn uniform(value: f64) -> Self {
        Self {
            accuracy: value,
            completeness: value,
            consistency: value,
            relevance: value,
            novelty: value,
        }
    }

    pub fn zero() -> Self {
        Self::uniform(0.0)
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Accuracy => self.accuracy,
            Dimension::Completeness => self.completeness,
            Dimension::Consistency => self.consistency,
            Dimension::Relevance => self.relevance,
            Dimension::Novelty => self.novelty,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        match dimension {
            Dimension::Accuracy => self.accuracy = value,
            Dimension::Completeness => self.completeness = value,
            Dimension::Consistency => self.consistency = value,
            Dimension::Relevance => self.relevance = value,
            Dimension::Novelty => self.novelty = value,
        }
    }

    /// (dimension, value) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.iter().map(move |&d| (d, self.get(d)))
    }

    pub fn sum(&self) -> f64 {
        self.accuracy + self.completeness + self.consistency + self.relevance + self.novelty
    }

    pub fn average(&self) -> f64 {
        self.sum() / Dimension::ALL.len() as f64
    }

    /// Weighted sum against another record treated as weights.
    pub fn weighted_sum(&self, weights: &DimensionScores) -> f64 {
        self.iter().map(|(d, v)| v * weights.get(d)).sum()
    }

    /// Every value clamped to [0, 1].
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for d in Dimension::ALL {
            out.set(d, out.get(d).clamp(0.0, 1.0));
        }
        out
    }

    pub fn all_finite(&self) -> bool {
        self.iter().all(|(_, v)| v.is_finite())
    }
}

impl Default for DimensionScores {
    fn default() -> Self {
        Self::zero()
    }
}
