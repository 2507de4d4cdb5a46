//! Bayesian evidence model: P(response good | evidence, intent).
//!
//! Every factor is a plain proportion over declared inputs, so two runs
//! over identical inputs produce identical metrics. Degenerate inputs
//! (no evidence, no intent, empty candidate) fall back to neutral 0.5
//! factors rather than erroring.

use std::collections::BTreeMap;

use quorum_core::candidate::Candidate;
use quorum_core::config::BayesianConfig;
use quorum_core::constants::EVIDENCE_EPSILON;
use quorum_core::evidence::DomainEvidence;
use quorum_core::intent::QueryIntent;
use quorum_core::models::BayesianMetrics;
use quorum_core::text;

/// Evaluate one candidate against the evidence and intent.
pub fn evaluate(
    candidate: &Candidate,
    evidence: &DomainEvidence,
    intent: &QueryIntent,
    config: &BayesianConfig,
) -> BayesianMetrics {
    let body = candidate.body_text();

    let prior = prior(&body, intent, config.base_prior);
    let likelihood = likelihood(&body, evidence);
    let background = background(evidence, intent);

    // Two-hypothesis marginal: either the candidate explains the
    // evidence, or the background hypothesis does.
    let evidence_factor = likelihood * prior + background * (1.0 - prior);

    let posterior = if evidence_factor < EVIDENCE_EPSILON {
        prior
    } else {
        likelihood * prior / evidence_factor
    };

    let mut mutual_information = mutual_information(&body, intent);
    if mutual_information < config.mutual_information_floor {
        mutual_information = 0.0;
    }

    BayesianMetrics {
        posterior,
        likelihood,
        prior,
        evidence_factor,
        information_gain: information_gain(&body, evidence),
        mutual_information,
    }
}

/// P(R|Q): base prior lifted by weighted intent-component coverage.
fn prior(body: &str, intent: &QueryIntent, base_prior: f64) -> f64 {
    if body.is_empty() || intent.components.is_empty() {
        return 0.5;
    }
    let total_weight: f64 = intent.components.iter().map(|c| c.weight.max(0.0)).sum();
    if total_weight <= 0.0 {
        return 0.5;
    }
    let covered: f64 = intent
        .components
        .iter()
        .filter(|c| {
            c.key_terms
                .iter()
                .any(|t| text::contains_term(body, t))
        })
        .map(|c| c.weight.max(0.0))
        .sum();
    let coverage = covered / total_weight;
    (base_prior + (1.0 - base_prior) * coverage).clamp(0.0, 1.0)
}

/// P(D|R,Q): how much of the important evidence the candidate carries.
/// Counted over high-importance concepts and formula names.
fn likelihood(body: &str, evidence: &DomainEvidence) -> f64 {
    if body.is_empty() {
        return 0.5;
    }
    let mut total = 0usize;
    let mut represented = 0usize;
    for concept in evidence.important_concepts() {
        total += 1;
        if text::contains_term(body, &concept.name) {
            represented += 1;
        }
    }
    for formula in &evidence.formulas {
        total += 1;
        if text::contains_term(body, &formula.name) {
            represented += 1;
        }
    }
    if total == 0 {
        return 0.5;
    }
    represented as f64 / total as f64
}

/// Background hypothesis strength: how much of the evidence the intent
/// terms already account for on their own.
fn background(evidence: &DomainEvidence, intent: &QueryIntent) -> f64 {
    let terms = intent.all_key_terms();
    if terms.is_empty() {
        return 0.5;
    }
    let mut total = 0usize;
    let mut hit = 0usize;
    let items = evidence
        .facts
        .iter()
        .map(|f| f.statement.as_str())
        .chain(evidence.formulas.iter().map(|f| f.name.as_str()))
        .chain(evidence.key_concepts.iter().map(|c| c.name.as_str()));
    for item in items {
        total += 1;
        if terms.iter().any(|t| text::contains_term(item, t)) {
            hit += 1;
        }
    }
    if total == 0 {
        return 0.5;
    }
    hit as f64 / total as f64
}

/// 1 − normalized Jensen-Shannon divergence between the candidate's
/// per-component term-hit distribution and the intent's declared
/// component weights.
fn mutual_information(body: &str, intent: &QueryIntent) -> f64 {
    if body.is_empty() || intent.components.is_empty() {
        return 0.0;
    }

    let mut hits: BTreeMap<&str, f64> = BTreeMap::new();
    let mut weights: BTreeMap<&str, f64> = BTreeMap::new();
    for component in &intent.components {
        let hit_count = component
            .key_terms
            .iter()
            .filter(|t| text::contains_term(body, t))
            .count();
        hits.insert(component.name.as_str(), hit_count as f64);
        weights.insert(component.name.as_str(), component.weight.max(0.0));
    }

    if hits.values().sum::<f64>() <= 0.0 || weights.values().sum::<f64>() <= 0.0 {
        return 0.0;
    }
    1.0 - crate::entropy::jensen_shannon(&hits, &weights)
}

/// Normalized entropy increase of the evidence token distribution when
/// the candidate's content is merged in, clamped to [0, 1].
fn information_gain(body: &str, evidence: &DomainEvidence) -> f64 {
    let mut base: BTreeMap<String, f64> = BTreeMap::new();
    let evidence_texts = evidence
        .facts
        .iter()
        .map(|f| f.statement.as_str())
        .chain(evidence.formulas.iter().map(|f| f.name.as_str()))
        .chain(evidence.key_concepts.iter().map(|c| c.name.as_str()));
    for item in evidence_texts {
        for token in text::tokenize(item) {
            if !text::STOPWORDS.contains(&token.as_str()) {
                *base.entry(token).or_insert(0.0) += 1.0;
            }
        }
    }

    let mut merged = base.clone();
    for token in text::tokenize(body) {
        if !text::STOPWORDS.contains(&token.as_str()) {
            *merged.entry(token).or_insert(0.0) += 1.0;
        }
    }

    let gain = crate::entropy::normalized_entropy(&merged) - crate::entropy::normalized_entropy(&base);
    gain.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quorum_core::candidate::{Element, ElementCategory};
    use quorum_core::evidence::Concept;
    use quorum_core::intent::IntentComponent;

    fn candidate(texts: &[&str]) -> Candidate {
        Candidate::new(
            "c0",
            texts
                .iter()
                .enumerate()
                .map(|(i, t)| Element::new(format!("e{i}"), 0, ElementCategory::Claim, *t))
                .collect(),
        )
    }

    fn intent() -> QueryIntent {
        QueryIntent {
            components: vec![
                IntentComponent::new("force", &["force", "newton"]),
                IntentComponent::new("energy", &["energy", "joule"]),
            ],
            required_topics: vec![],
        }
    }

    #[test]
    fn posterior_identity_holds() {
        let evidence = DomainEvidence {
            facts: vec![],
            formulas: vec![],
            key_concepts: vec![Concept {
                name: "force".into(),
                importance: 0.9,
            }],
        };
        let metrics = evaluate(
            &candidate(&["the net force follows newton's laws"]),
            &evidence,
            &intent(),
            &BayesianConfig::default(),
        );
        assert!(metrics.self_check());
    }

    #[test]
    fn full_intent_coverage_maximizes_the_prior() {
        let metrics = evaluate(
            &candidate(&["force and energy are related through work"]),
            &DomainEvidence::default(),
            &intent(),
            &BayesianConfig::default(),
        );
        assert!((metrics.prior - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_intent_yields_neutral_prior() {
        let metrics = evaluate(
            &candidate(&["anything"]),
            &DomainEvidence::default(),
            &QueryIntent::default(),
            &BayesianConfig::default(),
        );
        assert_eq!(metrics.prior, 0.5);
        assert_eq!(metrics.likelihood, 0.5);
    }

    #[test]
    fn mutual_information_below_floor_collapses_to_zero() {
        // Hits land entirely on one component while weights are even, so
        // the divergence is large and the floor kicks in.
        let metrics = evaluate(
            &candidate(&["force"]),
            &DomainEvidence::default(),
            &intent(),
            &BayesianConfig {
                mutual_information_floor: 0.9,
                ..BayesianConfig::default()
            },
        );
        assert_eq!(metrics.mutual_information, 0.0);
    }

    #[test]
    fn identical_hit_and_weight_distributions_give_full_mutual_information() {
        let metrics = evaluate(
            &candidate(&["force and energy"]),
            &DomainEvidence::default(),
            &intent(),
            &BayesianConfig::default(),
        );
        assert!((metrics.mutual_information - 1.0).abs() < 1e-9);
    }
}
