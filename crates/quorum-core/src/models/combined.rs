//! The finalized combined response and its verification report.

use serde::{Deserialize, Serialize};

use super::dimension::{Dimension, DimensionScores};
use super::ensemble::ScoredElement;

/// One section of the combined response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedSection {
    pub title: String,
    pub elements: Vec<ScoredElement>,
}

/// Count of elements contributed by one source candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceContribution {
    pub candidate: usize,
    pub elements: usize,
}

/// Final structured document merged from the Pareto-optimal elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedResponse {
    pub sections: Vec<CombinedSection>,
    /// Index of the primary candidate the skeleton came from.
    pub primary_candidate: usize,
    /// Fraction of elements contributed by the primary candidate.
    pub primary_contribution_ratio: f64,
    /// Per-source element counts, ascending by candidate index.
    pub ensemble_composition: Vec<SourceContribution>,
}

impl CombinedResponse {
    pub fn element_count(&self) -> usize {
        self.sections.iter().map(|s| s.elements.len()).sum()
    }

    pub fn elements(&self) -> impl Iterator<Item = &ScoredElement> {
        self.sections.iter().flat_map(|s| s.elements.iter())
    }
}

/// Severity of a refinement suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A templated, deterministic improvement suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub dimension: Dimension,
    pub severity: Severity,
    pub text: String,
    /// Estimated score improvement if the suggestion is applied.
    pub expected_improvement: f64,
}

/// A dimension that fell below its threshold, with its refinement priority.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FailingDimension {
    pub dimension: Dimension,
    pub score: f64,
    pub threshold: f64,
    pub gap: f64,
    /// `(gap * weight) / (1 - confidence)`; higher fixes first.
    pub priority: f64,
}

/// Structured guidance for an external regeneration collaborator.
/// The engine only reports this; it never regenerates content itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinementDirective {
    /// Failing dimensions, highest priority first.
    pub ranked: Vec<FailingDimension>,
    pub suggestions: Vec<Suggestion>,
}

/// Final quality gate outcome for the combined response.
///
/// `passed == false` is a normal business outcome, not an error; the
/// residual shortfall is always documented rather than silently absorbed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub passed: bool,
    pub dimension_scores: DimensionScores,
    pub overall_score: f64,
    pub pruned_element_count: usize,
    pub retries_used: usize,
    /// Dimensions still below threshold after pruning, canonical order.
    pub shortfall: Vec<FailingDimension>,
    /// Present iff `passed == false`.
    pub directive: Option<RefinementDirective>,
}

impl VerificationReport {
    /// Human-readable one-line summary.
    pub fn summary(&self) -> String {
        if self.passed {
            format!(
                "verification passed with overall score {:.2}",
                self.overall_score
            )
        } else {
            let dims: Vec<&str> = self
                .shortfall
                .iter()
                .map(|f| f.dimension.name())
                .collect();
            format!(
                "verification failed on [{}] with overall score {:.2}",
                dims.join(", "),
                self.overall_score
            )
        }
    }
}
