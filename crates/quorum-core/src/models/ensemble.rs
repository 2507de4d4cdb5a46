//! Ensemble selection and element-level Pareto structures.

use serde::{Deserialize, Serialize};

use crate::candidate::Element;

/// Ordered candidate indices chosen for combination.
/// The primary (highest-quality) candidate is always element 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnsembleSelection {
    pub selected: Vec<usize>,
}

impl EnsembleSelection {
    pub fn primary(&self) -> usize {
        self.selected[0]
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }
}

/// An element annotated with its position in (quality, diversity) space
/// and the weight it carries in the combined response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredElement {
    pub element: Element,
    /// Overall quality score of the source candidate.
    pub quality: f64,
    /// Mean diversity of the source candidate to the rest of the ensemble.
    pub diversity_contribution: f64,
    /// Combination weight in [0, 1], renormalized within each section.
    pub combination_weight: f64,
}

impl ScoredElement {
    pub fn is_from(&self, candidate: usize) -> bool {
        self.element.source == candidate
    }
}

/// Non-dominated elements surviving Pareto optimization.
/// All elements of the primary candidate are retained regardless of
/// dominance so the finalized response can never lose all primary content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoSet {
    pub primary: usize,
    pub elements: Vec<ScoredElement>,
}

impl ParetoSet {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn primary_elements(&self) -> impl Iterator<Item = &ScoredElement> {
        let primary = self.primary;
        self.elements.iter().filter(move |e| e.is_from(primary))
    }
}
