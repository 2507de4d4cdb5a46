//! Pairwise candidate diversity: content, structure, and emphasis.

use std::collections::BTreeMap;

use rayon::prelude::*;

use quorum_core::candidate::Candidate;
use quorum_core::config::DiversityConfig;
use quorum_core::models::DiversityMatrix;
use quorum_core::text;

/// Computes the symmetric diversity matrix for a candidate set.
pub struct DiversityCalculator {
    config: DiversityConfig,
}

impl DiversityCalculator {
    pub fn new(config: DiversityConfig) -> Self {
        Self { config }
    }

    /// Build the full matrix. Pairs are independent, so they fan out
    /// across rayon workers; the ordered collect keeps the result
    /// deterministic.
    pub fn matrix(&self, candidates: &[Candidate]) -> DiversityMatrix {
        let n = candidates.len();
        let mut matrix = DiversityMatrix::new(n);

        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect();

        let values: Vec<(usize, usize, f64)> = pairs
            .par_iter()
            .map(|&(i, j)| (i, j, self.pair(&candidates[i], &candidates[j])))
            .collect();

        for (i, j, value) in values {
            matrix.set_pair(i, j, value);
        }
        matrix
    }

    /// Weighted blend of the three diversity components for one pair.
    pub fn pair(&self, a: &Candidate, b: &Candidate) -> f64 {
        let content = self.content_diversity(a, b);
        let structure = structure_diversity(a, b);
        let emphasis = emphasis_diversity(a, b);

        (self.config.content_weight * content
            + self.config.structure_weight * structure
            + self.config.emphasis_weight * emphasis)
            .clamp(0.0, 1.0)
    }

    /// 1 − n-gram overlap of the two bodies. Two empty bodies are
    /// identical (0.0); one empty body is maximally different (1.0).
    fn content_diversity(&self, a: &Candidate, b: &Candidate) -> f64 {
        let tokens_a = text::tokenize(&a.body_text());
        let tokens_b = text::tokenize(&b.body_text());
        match (tokens_a.is_empty(), tokens_b.is_empty()) {
            (true, true) => 0.0,
            (true, false) | (false, true) => 1.0,
            (false, false) => {
                let grams_a = text::ngrams(&tokens_a, self.config.ngram_size);
                let grams_b = text::ngrams(&tokens_b, self.config.ngram_size);
                1.0 - text::jaccard(&grams_a, &grams_b)
            }
        }
    }
}

/// Total-variation distance between category-frequency distributions.
fn structure_diversity(a: &Candidate, b: &Candidate) -> f64 {
    text::total_variation(&category_distribution(a), &category_distribution(b))
}

/// Total-variation distance between the relevance mass each candidate
/// puts on each category.
fn emphasis_diversity(a: &Candidate, b: &Candidate) -> f64 {
    text::total_variation(&emphasis_distribution(a), &emphasis_distribution(b))
}

fn category_distribution(candidate: &Candidate) -> BTreeMap<&'static str, f64> {
    let mut counts: BTreeMap<&'static str, f64> = BTreeMap::new();
    for element in &candidate.elements {
        *counts.entry(element.category.name()).or_insert(0.0) += 1.0;
    }
    normalize(counts)
}

fn emphasis_distribution(candidate: &Candidate) -> BTreeMap<&'static str, f64> {
    let mut masses: BTreeMap<&'static str, f64> = BTreeMap::new();
    for element in &candidate.elements {
        *masses.entry(element.category.name()).or_insert(0.0) += element.relevance.max(0.0);
    }
    normalize(masses)
}

fn normalize(mut masses: BTreeMap<&'static str, f64>) -> BTreeMap<&'static str, f64> {
    let total: f64 = masses.values().sum();
    if total > 0.0 {
        for value in masses.values_mut() {
            *value /= total;
        }
    }
    masses
}
