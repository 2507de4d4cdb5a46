//! Bayesian evaluation metrics for one candidate.

use serde::{Deserialize, Serialize};

use crate::constants::{EVIDENCE_EPSILON, FLOAT_TOLERANCE};

/// Output of the Bayesian evaluator.
///
/// `posterior == likelihood * prior / evidence_factor` holds within
/// floating tolerance whenever the evidence factor is non-degenerate;
/// otherwise the posterior equals the prior by definition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BayesianMetrics {
    /// P(R|D,Q): probability the candidate is good given evidence and intent.
    pub posterior: f64,
    /// P(D|R,Q): how well the evidence is represented in the candidate.
    pub likelihood: f64,
    /// P(R|Q): candidate plausibility from intent alone.
    pub prior: f64,
    /// P(D|Q): marginal over the candidate and background hypotheses.
    pub evidence_factor: f64,
    pub information_gain: f64,
    pub mutual_information: f64,
}

impl BayesianMetrics {
    /// Neutral metrics used when no evaluation has run.
    pub fn neutral() -> Self {
        Self {
            posterior: 0.5,
            likelihood: 0.5,
            prior: 0.5,
            evidence_factor: 0.5,
            information_gain: 0.0,
            mutual_information: 0.0,
        }
    }

    /// Verify the Bayes identity and range invariants.
    pub fn self_check(&self) -> bool {
        if !(0.0..=1.0).contains(&self.posterior) {
            return false;
        }
        if self.evidence_factor < EVIDENCE_EPSILON {
            // Degenerate: posterior is defined to equal the prior.
            return (self.posterior - self.prior).abs() < FLOAT_TOLERANCE;
        }
        let expected = self.likelihood * self.prior / self.evidence_factor;
        (self.posterior - expected).abs() < FLOAT_TOLERANCE
    }
}

impl Default for BayesianMetrics {
    fn default() -> Self {
        Self::neutral()
    }
}
