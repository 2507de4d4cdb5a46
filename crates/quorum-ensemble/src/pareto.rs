//! Element-level Pareto optimization over the selected ensemble.
//!
//! Every element inherits its candidate's coordinates in
//! (quality, diversity contribution) space. Dominated elements are
//! dropped; the primary candidate's elements are always retained so the
//! combined response can never lose its backbone.

use std::collections::BTreeSet;

use tracing::debug;

use quorum_core::candidate::Candidate;
use quorum_core::models::{
    CandidateAssessment, DiversityMatrix, EnsembleSelection, ParetoSet, ScoredElement,
};
use quorum_core::text;

/// Build the Pareto-optimal element set for the ensemble.
pub fn optimize(
    candidates: &[Candidate],
    assessments: &[CandidateAssessment],
    selection: &EnsembleSelection,
    matrix: &DiversityMatrix,
) -> ParetoSet {
    let primary = selection.primary();

    // Candidate-level coordinates, shared by all of a candidate's elements.
    let coordinates: Vec<(usize, f64, f64)> = selection
        .selected
        .iter()
        .map(|&i| {
            let others: Vec<usize> = selection
                .selected
                .iter()
                .copied()
                .filter(|&j| j != i)
                .collect();
            let quality = assessments[i].overall_score();
            let diversity = matrix.mean_to(i, &others);
            (i, quality, diversity)
        })
        .collect();

    let mut elements: Vec<ScoredElement> = Vec::new();
    let mut seen_texts: BTreeSet<String> = BTreeSet::new();

    // Primary first, then the rest in selection order, so duplicate text
    // from later candidates is the side that gets dropped. Primary
    // elements are retained unconditionally; they only seed the dedup.
    for &(candidate, quality, diversity) in &coordinates {
        let dominated = candidate != primary
            && coordinates.iter().any(|&(other, q, d)| {
                other != candidate && q >= quality && d >= diversity && (q > quality || d > diversity)
            });
        if dominated {
            debug!(candidate, "candidate elements dominated, dropped");
            continue;
        }

        for element in candidates[candidate].content_elements() {
            let normalized = text::tokenize(&element.text).join(" ");
            let fresh = seen_texts.insert(normalized);
            if !fresh && candidate != primary {
                continue;
            }
            elements.push(ScoredElement {
                element: element.clone(),
                quality,
                diversity_contribution: diversity,
                combination_weight: quality,
            });
        }
    }

    ParetoSet { primary, elements }
}
