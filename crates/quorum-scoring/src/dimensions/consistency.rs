//! Consistency: absence of internal contradictions between claims.

use std::collections::BTreeSet;

use quorum_core::candidate::{Candidate, ElementCategory};
use quorum_core::constants::SUBJECT_OVERLAP;
use quorum_core::text;

/// Markers whose presence flips a claim's polarity.
const NEGATION_MARKERS: &[&str] = &["not", "no", "never", "n't", "cannot", "without"];

/// Word pairs that contradict each other when applied to the same subject.
const ANTONYM_PAIRS: &[(&str, &str)] = &[
    ("increase", "decrease"),
    ("increases", "decreases"),
    ("higher", "lower"),
    ("always", "never"),
    ("more", "less"),
    ("positive", "negative"),
];

/// `1 − contradictory pairs / total claim pairs`. Fewer than two claims
/// cannot contradict, so they score 1.0.
pub fn score(candidate: &Candidate) -> f64 {
    let claims: Vec<&str> = candidate
        .elements
        .iter()
        .filter(|e| e.category == ElementCategory::Claim)
        .map(|e| e.text.as_str())
        .collect();

    if claims.len() < 2 {
        return 1.0;
    }

    let mut contradictory = 0usize;
    let mut total = 0usize;
    for i in 0..claims.len() {
        for j in (i + 1)..claims.len() {
            total += 1;
            if contradicts(claims[i], claims[j]) {
                contradictory += 1;
            }
        }
    }
    1.0 - contradictory as f64 / total as f64
}

/// Two claims contradict when they share a subject but differ in
/// polarity, or pair antonyms on that shared subject.
pub fn contradicts(a: &str, b: &str) -> bool {
    let subject_a = subject_tokens(a);
    let subject_b = subject_tokens(b);
    if text::jaccard(&subject_a, &subject_b) < SUBJECT_OVERLAP {
        return false;
    }

    if polarity(a) != polarity(b) {
        return true;
    }

    let tokens_a = text::token_set(a);
    let tokens_b = text::token_set(b);
    ANTONYM_PAIRS.iter().any(|(x, y)| {
        (tokens_a.contains(*x) && tokens_b.contains(*y))
            || (tokens_a.contains(*y) && tokens_b.contains(*x))
    })
}

/// Tokens describing what the claim is about: everything except the
/// negation markers and the antonym vocabulary.
fn subject_tokens(claim: &str) -> BTreeSet<String> {
    text::token_set(claim)
        .into_iter()
        .filter(|t| {
            !NEGATION_MARKERS.contains(&t.as_str())
                && !ANTONYM_PAIRS
                    .iter()
                    .any(|(x, y)| t == x || t == y)
        })
        .collect()
}

/// False when the claim carries an odd negation, true otherwise.
fn polarity(claim: &str) -> bool {
    let lowered = claim.to_lowercase();
    let mut negations = text::tokenize(claim)
        .iter()
        .filter(|t| NEGATION_MARKERS.contains(&t.as_str()))
        .count();
    // Contractions like "isn't" survive tokenization as one token and
    // never match a marker; catch them on the raw text.
    if lowered.contains("n't") {
        negations += 1;
    }
    negations % 2 == 0
}
