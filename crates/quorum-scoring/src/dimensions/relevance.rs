//! Relevance: how squarely the candidate addresses the declared intent.

use quorum_core::candidate::Candidate;
use quorum_core::intent::QueryIntent;
use quorum_core::models::BayesianMetrics;
use quorum_core::text;

/// Blend of direct key-term coverage, focus, and (when Bayesian metrics
/// are available) mutual information with the intent:
/// `0.3·direct + 0.3·focused + 0.4·mutual_information`, falling back to
/// an even lexical split without metrics.
pub fn score(
    candidate: &Candidate,
    intent: &QueryIntent,
    bayesian: Option<&BayesianMetrics>,
) -> f64 {
    let terms = intent.all_key_terms();
    if terms.is_empty() {
        // Nothing declared to be relevant to.
        return 0.5;
    }

    let direct = direct_coverage(candidate, &terms);
    let focused = focus(candidate, &terms);

    match bayesian {
        Some(metrics) => {
            (0.3 * direct + 0.3 * focused + 0.4 * metrics.mutual_information).clamp(0.0, 1.0)
        }
        None => (0.5 * direct + 0.5 * focused).clamp(0.0, 1.0),
    }
}

/// Fraction of content elements mentioning at least one key term.
fn direct_coverage(candidate: &Candidate, terms: &[&str]) -> f64 {
    let mut total = 0usize;
    let mut hits = 0usize;
    for element in candidate.content_elements() {
        total += 1;
        if terms.iter().any(|t| text::contains_term(&element.text, t)) {
            hits += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    hits as f64 / total as f64
}

/// How many of the key terms the candidate covers overall, capped at 1.
fn focus(candidate: &Candidate, terms: &[&str]) -> f64 {
    let body = candidate.body_text();
    let hits = terms
        .iter()
        .filter(|t| text::contains_term(&body, t))
        .count();
    (hits as f64 / terms.len() as f64).min(1.0)
}
