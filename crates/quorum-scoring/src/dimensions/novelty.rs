//! Novelty: content beyond a restatement of the supplied evidence.

use quorum_core::candidate::Candidate;
use quorum_core::constants::REPETITION_SIMILARITY;
use quorum_core::evidence::DomainEvidence;
use quorum_core::text;

/// Fraction of content elements that are not a near-verbatim repetition
/// of an evidence fact. A token overlap of `REPETITION_SIMILARITY` or
/// more against any fact counts as repetition.
pub fn score(candidate: &Candidate, evidence: &DomainEvidence) -> f64 {
    let fact_tokens: Vec<_> = evidence
        .facts
        .iter()
        .map(|f| text::token_set(&f.statement))
        .collect();

    let mut total = 0usize;
    let mut novel = 0usize;
    for element in candidate.content_elements() {
        total += 1;
        let tokens = text::token_set(&element.text);
        let repeated = fact_tokens
            .iter()
            .any(|f| text::jaccard(&tokens, f) >= REPETITION_SIMILARITY);
        if !repeated {
            novel += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    novel as f64 / total as f64
}
