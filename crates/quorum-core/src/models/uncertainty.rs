//! Uncertainty records attached to every quality score.

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;

/// Uncertainty for one dimension's quality score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionUncertainty {
    pub variance: f64,
    /// Confidence-interval half-width around the score.
    pub half_width: f64,
    /// Trust in the estimate, in [0, 1].
    pub confidence: f64,
}

impl Default for DimensionUncertainty {
    fn default() -> Self {
        Self {
            variance: 0.05,
            half_width: 0.1,
            confidence: 0.8,
        }
    }
}

/// Per-dimension uncertainty, always paired with a `DimensionScores`.
/// Both records cover exactly the five dimensions by construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UncertaintyRecord {
    pub accuracy: DimensionUncertainty,
    pub completeness: DimensionUncertainty,
    pub consistency: DimensionUncertainty,
    pub relevance: DimensionUncertainty,
    pub novelty: DimensionUncertainty,
    /// Monotone transform of the Bayesian posterior.
    pub overall_confidence: f64,
    /// Confidence level the intervals were computed for.
    pub confidence_level: f64,
}

impl UncertaintyRecord {
    pub fn get(&self, dimension: Dimension) -> DimensionUncertainty {
        match dimension {
            Dimension::Accuracy => self.accuracy,
            Dimension::Completeness => self.completeness,
            Dimension::Consistency => self.consistency,
            Dimension::Relevance => self.relevance,
            Dimension::Novelty => self.novelty,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: DimensionUncertainty) {
        match dimension {
            Dimension::Accuracy => self.accuracy = value,
            Dimension::Completeness => self.completeness = value,
            Dimension::Consistency => self.consistency = value,
            Dimension::Relevance => self.relevance = value,
            Dimension::Novelty => self.novelty = value,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, DimensionUncertainty)> + '_ {
        Dimension::ALL.iter().map(move |&d| (d, self.get(d)))
    }

    /// The dimension carrying the highest variance, the weakest link.
    /// Ties break in canonical dimension order.
    pub fn weakest(&self) -> Dimension {
        let mut weakest = Dimension::Accuracy;
        let mut highest = f64::MIN;
        for (dimension, u) in self.iter() {
            if u.variance > highest {
                highest = u.variance;
                weakest = dimension;
            }
        }
        weakest
    }

    /// Mean confidence-interval width across dimensions.
    pub fn average_interval_width(&self) -> f64 {
        let total: f64 = self.iter().map(|(_, u)| 2.0 * u.half_width).sum();
        total / Dimension::ALL.len() as f64
    }
}
