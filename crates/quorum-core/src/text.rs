//! Shared lexical utilities: tokenization, n-grams, set similarity.
//!
//! Every similarity measure in the engine goes through this tokenizer so
//! scores stay comparable across stages.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9']+").unwrap());

/// Words ignored when deriving a dominant topic keyword for a section
/// title.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "if",
    "in", "into", "is", "it", "its", "no", "not", "of", "on", "or", "that", "the", "their",
    "there", "these", "this", "to", "was", "were", "which", "will", "with",
];

/// Lowercase word tokens, punctuation stripped, in document order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Unique token set of a text.
pub fn token_set(text: &str) -> BTreeSet<String> {
    tokenize(text).into_iter().collect()
}

/// Jaccard similarity between two token sets. Empty/empty pairs score 0.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Token-overlap similarity between two texts.
pub fn text_similarity(a: &str, b: &str) -> f64 {
    jaccard(&token_set(a), &token_set(b))
}

/// Word n-grams of a token sequence. Sequences shorter than `n` yield the
/// whole sequence as one gram so short texts still compare.
pub fn ngrams(tokens: &[String], n: usize) -> BTreeSet<String> {
    let mut grams = BTreeSet::new();
    if tokens.is_empty() {
        return grams;
    }
    if tokens.len() < n {
        grams.insert(tokens.join(" "));
        return grams;
    }
    for window in tokens.windows(n) {
        grams.insert(window.join(" "));
    }
    grams
}

/// Case-insensitive substring check used for key-term coverage.
pub fn contains_term(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Most frequent non-stopword token. Ties break by first occurrence in
/// the text, so the result is stable for identical input.
pub fn dominant_keyword(text: &str) -> Option<String> {
    let tokens = tokenize(text);
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for token in &tokens {
        if token.len() > 2 && !STOPWORDS.contains(&token.as_str()) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    let best_count = counts.values().copied().max()?;
    tokens
        .iter()
        .find(|t| counts.get(t.as_str()) == Some(&best_count))
        .cloned()
}

/// Uppercase the first letter of a keyword for use as a section title.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Total-variation distance between two categorical distributions given as
/// (key, mass) maps. Result is in [0, 1]; identical distributions score 0.
pub fn total_variation<K: Ord>(a: &BTreeMap<K, f64>, b: &BTreeMap<K, f64>) -> f64 {
    let mut keys: BTreeSet<&K> = a.keys().collect();
    keys.extend(b.keys());
    let sum: f64 = keys
        .into_iter()
        .map(|k| {
            let va = a.get(k).copied().unwrap_or(0.0);
            let vb = b.get(k).copied().unwrap_or(0.0);
            (va - vb).abs()
        })
        .sum();
    sum / 2.0
}
