//! Completeness: coverage of the topics a full answer must address.

use quorum_core::candidate::Candidate;
use quorum_core::evidence::DomainEvidence;
use quorum_core::intent::QueryIntent;
use quorum_core::text;

/// Fraction of the intent's required topics present in the candidate,
/// by case-insensitive containment. With no declared topics, coverage
/// of the high-importance evidence concepts stands in; with neither,
/// completeness cannot be judged and scores 0.5.
pub fn score(candidate: &Candidate, evidence: &DomainEvidence, intent: &QueryIntent) -> f64 {
    let body = candidate.body_text();

    if !intent.required_topics.is_empty() {
        return coverage(&body, intent.required_topics.iter().map(String::as_str));
    }

    let concepts: Vec<&str> = evidence
        .important_concepts()
        .map(|c| c.name.as_str())
        .collect();
    if concepts.is_empty() {
        return 0.5;
    }
    coverage(&body, concepts.into_iter())
}

fn coverage<'a>(body: &str, topics: impl Iterator<Item = &'a str>) -> f64 {
    let mut total = 0usize;
    let mut covered = 0usize;
    for topic in topics {
        total += 1;
        if text::contains_term(body, topic) {
            covered += 1;
        }
    }
    if total == 0 {
        return 0.5;
    }
    covered as f64 / total as f64
}
