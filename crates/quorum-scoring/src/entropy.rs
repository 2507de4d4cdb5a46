//! Plug-in entropy estimators over discrete distributions.
//!
//! Distributions are `BTreeMap`s so every fold over them is
//! order-stable.

use std::collections::BTreeMap;

/// Shannon entropy (nats) of a mass map. Masses are normalized
/// internally; zero-total maps have zero entropy.
pub fn entropy<K: Ord>(masses: &BTreeMap<K, f64>) -> f64 {
    let total: f64 = masses.values().sum();
    if total <= 0.0 {
        return 0.0;
    }
    masses
        .values()
        .filter(|&&m| m > 0.0)
        .map(|&m| {
            let p = m / total;
            -p * p.ln()
        })
        .sum()
}

/// Entropy normalized by the maximum for the map's support size, in
/// [0, 1]. Single-outcome and empty maps score 0.
pub fn normalized_entropy<K: Ord>(masses: &BTreeMap<K, f64>) -> f64 {
    let support = masses.values().filter(|&&m| m > 0.0).count();
    if support < 2 {
        return 0.0;
    }
    entropy(masses) / (support as f64).ln()
}

/// Jensen-Shannon divergence between two mass maps, normalized to
/// [0, 1] (division by ln 2). Identical distributions score 0, disjoint
/// ones score 1.
pub fn jensen_shannon<K: Ord + Clone>(a: &BTreeMap<K, f64>, b: &BTreeMap<K, f64>) -> f64 {
    let pa = normalize(a);
    let pb = normalize(b);
    if pa.is_empty() || pb.is_empty() {
        return 1.0;
    }

    let mut mixture: BTreeMap<K, f64> = BTreeMap::new();
    for (k, &p) in pa.iter().chain(pb.iter()) {
        *mixture.entry(k.clone()).or_insert(0.0) += 0.5 * p;
    }

    let divergence = 0.5 * kl(&pa, &mixture) + 0.5 * kl(&pb, &mixture);
    (divergence / std::f64::consts::LN_2).clamp(0.0, 1.0)
}

fn normalize<K: Ord + Clone>(masses: &BTreeMap<K, f64>) -> BTreeMap<K, f64> {
    let total: f64 = masses.values().filter(|&&m| m > 0.0).sum();
    if total <= 0.0 {
        return BTreeMap::new();
    }
    masses
        .iter()
        .filter(|(_, &m)| m > 0.0)
        .map(|(k, &m)| (k.clone(), m / total))
        .collect()
}

fn kl<K: Ord>(p: &BTreeMap<K, f64>, q: &BTreeMap<K, f64>) -> f64 {
    p.iter()
        .filter_map(|(k, &pk)| {
            let qk = q.get(k).copied().unwrap_or(0.0);
            (pk > 0.0 && qk > 0.0).then(|| pk * (pk / qk).ln())
        })
        .sum()
}
