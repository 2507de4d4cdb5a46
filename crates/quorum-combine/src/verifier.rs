//! Threshold verification of the combined response.
//!
//! The combined response is flattened back into a candidate and pushed
//! through the same scoring pipeline as the originals, so the final
//! gate measures exactly what the per-candidate gates measured.

use quorum_core::candidate::{Candidate, Element, ElementCategory};
use quorum_core::evidence::DomainEvidence;
use quorum_core::intent::QueryIntent;
use quorum_core::models::{CandidateAssessment, CombinedResponse};
use quorum_scoring::ScoringEngine;

/// Flatten the combined response into a candidate: one header element
/// per section followed by the section's elements, in order.
pub fn flatten(response: &CombinedResponse) -> Candidate {
    let mut elements: Vec<Element> = Vec::new();
    for (i, section) in response.sections.iter().enumerate() {
        elements.push(Element::new(
            format!("combined-h{i}"),
            response.primary_candidate,
            ElementCategory::SectionHeader,
            &section.title,
        ));
        for scored in &section.elements {
            elements.push(scored.element.clone());
        }
    }
    Candidate::new("combined", elements)
}

/// Score the combined response against the original evidence and intent.
pub fn verify(
    engine: &ScoringEngine,
    response: &CombinedResponse,
    evidence: &DomainEvidence,
    intent: &QueryIntent,
) -> CandidateAssessment {
    engine.assess(response.primary_candidate, &flatten(response), evidence, intent)
}
