//! Bounded pruning of weak non-primary contributions.

use tracing::debug;

use quorum_core::config::VerificationConfig;
use quorum_core::models::CombinedResponse;
use quorum_core::text;

/// Remove the single weakest non-primary element, judged by
/// `quality x combination_weight`. Primary elements, elements carrying
/// an important keyword, and anything beyond the pruning-fraction cap
/// are off limits. Returns false when nothing could be pruned.
pub fn prune_one(
    response: &mut CombinedResponse,
    already_pruned: usize,
    original_count: usize,
    config: &VerificationConfig,
) -> bool {
    let cap = (original_count as f64 * config.max_pruning_fraction).floor() as usize;
    if already_pruned >= cap {
        debug!(already_pruned, cap, "pruning cap reached");
        return false;
    }

    let primary = response.primary_candidate;
    let mut weakest: Option<(usize, usize, f64)> = None;
    for (si, section) in response.sections.iter().enumerate() {
        for (ei, scored) in section.elements.iter().enumerate() {
            if scored.is_from(primary) {
                continue;
            }
            if is_protected(&scored.element.text, &config.important_keywords) {
                continue;
            }
            let cost = scored.quality * scored.combination_weight;
            // Strict comparison keeps the earliest position on ties.
            if weakest.map_or(true, |(_, _, w)| cost < w) {
                weakest = Some((si, ei, cost));
            }
        }
    }

    let Some((si, ei, cost)) = weakest else {
        return false;
    };
    let removed = response.sections[si].elements.remove(ei);
    debug!(element = %removed.element.id, cost, "pruned weakest element");

    response.sections.retain(|s| !s.elements.is_empty());
    recompute_contribution(response);
    true
}

fn is_protected(element_text: &str, important_keywords: &[String]) -> bool {
    important_keywords
        .iter()
        .any(|k| text::contains_term(element_text, k))
}

fn recompute_contribution(response: &mut CombinedResponse) {
    let total = response.element_count();
    let primary = response.primary_candidate;
    let primary_count = response.elements().filter(|e| e.is_from(primary)).count();
    response.primary_contribution_ratio = if total == 0 {
        0.0
    } else {
        primary_count as f64 / total as f64
    };

    let mut counts: std::collections::BTreeMap<usize, usize> = std::collections::BTreeMap::new();
    for element in response.sections.iter().flat_map(|s| s.elements.iter()) {
        *counts.entry(element.element.source).or_insert(0) += 1;
    }
    response.ensemble_composition = counts
        .into_iter()
        .map(|(candidate, elements)| quorum_core::models::SourceContribution {
            candidate,
            elements,
        })
        .collect();
}
