//! Accuracy: agreement of factual elements with the domain evidence.

use quorum_core::candidate::{Candidate, Element, ElementCategory};
use quorum_core::evidence::DomainEvidence;
use quorum_core::models::BayesianMetrics;
use quorum_core::text;

/// Score the candidate's factual elements against the evidence.
///
/// Statements are matched to the best fact by token overlap and scaled
/// by that fact's extraction confidence. Formula elements are compared
/// structurally against the same-named domain formula. Candidates with
/// no factual elements fall back to the Bayesian likelihood.
pub fn score(
    candidate: &Candidate,
    evidence: &DomainEvidence,
    bayesian: Option<&BayesianMetrics>,
) -> f64 {
    let factual: Vec<&Element> = candidate
        .elements
        .iter()
        .filter(|e| e.category.is_factual())
        .collect();

    if factual.is_empty() {
        return bayesian.map(|b| b.likelihood).unwrap_or(0.5).clamp(0.0, 1.0);
    }

    let total: f64 = factual
        .iter()
        .map(|element| match element.category {
            ElementCategory::Formula => formula_accuracy(element, evidence),
            _ => statement_accuracy(&element.text, evidence),
        })
        .sum();
    (total / factual.len() as f64).clamp(0.0, 1.0)
}

/// Best fact match by token Jaccard, scaled by that fact's confidence.
/// With no facts at all the statement is neither supported nor refuted.
fn statement_accuracy(statement: &str, evidence: &DomainEvidence) -> f64 {
    if evidence.facts.is_empty() {
        return 0.5;
    }
    let tokens = text::token_set(statement);
    evidence
        .facts
        .iter()
        .map(|fact| text::jaccard(&tokens, &text::token_set(&fact.statement)) * fact.confidence)
        .fold(0.0, f64::max)
}

/// Structural comparison of a Formula element against the domain
/// formula sharing its id. Without a named match, the best structural
/// similarity across all domain formulas stands in.
fn formula_accuracy(element: &Element, evidence: &DomainEvidence) -> f64 {
    if evidence.formulas.is_empty() {
        return 0.5;
    }
    if let Some(formula) = evidence.formula_named(&element.id) {
        return structural_similarity(&element.text, &formula.expression);
    }
    evidence
        .formulas
        .iter()
        .map(|f| structural_similarity(&element.text, &f.expression))
        .fold(0.0, f64::max)
}

/// Similarity of two formula expressions after normalization. Equal
/// normal forms score 1.0; otherwise character-bigram overlap of the
/// normal forms grades near-misses.
pub fn structural_similarity(a: &str, b: &str) -> f64 {
    let na = normalize_formula(a);
    let nb = normalize_formula(b);
    if na.is_empty() || nb.is_empty() {
        return 0.0;
    }
    if na == nb {
        return 1.0;
    }
    text::jaccard(&char_bigrams(&na), &char_bigrams(&nb))
}

/// Normal form of a formula expression:
/// lowercase, whitespace stripped, top-level `+` terms sorted on each
/// side of `=`, then variables renamed by order of first appearance.
/// "F = m*a" and "f=a * m" normalize identically.
pub fn normalize_formula(expression: &str) -> String {
    let compact: String = expression
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let sorted = compact
        .split('=')
        .map(sort_terms)
        .collect::<Vec<_>>()
        .join("=");

    rename_variables(&sorted)
}

/// Sort the top-level `+`-separated terms of one side lexicographically.
/// `+` inside parentheses does not split a term.
fn sort_terms(side: &str) -> String {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for c in side.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            '+' if depth == 0 => {
                terms.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    terms.push(current);
    terms.sort();
    terms.join("+")
}

/// Replace each distinct variable with v0, v1, ... in order of first
/// appearance, so naming conventions stop mattering.
fn rename_variables(expression: &str) -> String {
    let mut names: Vec<String> = Vec::new();
    let mut out = String::new();
    let mut var = String::new();

    let flush = |var: &mut String, out: &mut String, names: &mut Vec<String>| {
        if var.is_empty() {
            return;
        }
        let index = names
            .iter()
            .position(|n| n == var)
            .unwrap_or_else(|| {
                names.push(var.clone());
                names.len() - 1
            });
        out.push_str(&format!("v{index}"));
        var.clear();
    };

    for c in expression.chars() {
        if c.is_ascii_alphabetic() || c == '_' {
            var.push(c);
        } else {
            flush(&mut var, &mut out, &mut names);
            out.push(c);
        }
    }
    flush(&mut var, &mut out, &mut names);
    out
}

fn char_bigrams(s: &str) -> std::collections::BTreeSet<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 {
        return std::iter::once(s.to_string()).collect();
    }
    chars.windows(2).map(|w| w.iter().collect()).collect()
}
