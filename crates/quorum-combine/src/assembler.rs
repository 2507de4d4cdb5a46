//! Response assembly: primary skeleton plus weighted insertion of the
//! remaining Pareto-optimal elements.

use std::cmp::Ordering;

use tracing::debug;

use quorum_core::candidate::Candidate;
use quorum_core::models::{
    CombinedResponse, CombinedSection, ParetoSet, ScoredElement, SourceContribution,
};
use quorum_core::text;

/// Assemble the combined response. The primary candidate's derived
/// sections form the skeleton; every non-primary element is routed to
/// its best-matching section in descending combination-weight order, or
/// opens a new section when nothing matches well enough.
pub fn assemble(
    primary: &Candidate,
    pareto: &ParetoSet,
    section_match_threshold: f64,
) -> CombinedResponse {
    let mut sections: Vec<CombinedSection> = primary
        .derived_sections()
        .into_iter()
        .map(|s| CombinedSection {
            title: s.title,
            elements: Vec::new(),
        })
        .collect();

    // Primary elements go back to the section they came from.
    let skeleton = primary.derived_sections();
    for scored in pareto.primary_elements() {
        let section = skeleton
            .iter()
            .position(|s| {
                s.element_indices
                    .iter()
                    .any(|&i| primary.elements[i].id == scored.element.id)
            })
            .unwrap_or(0);
        sections[section].elements.push(scored.clone());
    }

    // Remaining elements, heaviest first; ties by source then by the
    // order they entered the Pareto set.
    let mut rest: Vec<&ScoredElement> = pareto
        .elements
        .iter()
        .filter(|e| !e.is_from(pareto.primary))
        .collect();
    rest.sort_by(|a, b| {
        b.combination_weight
            .partial_cmp(&a.combination_weight)
            .unwrap_or(Ordering::Equal)
            .then(a.element.source.cmp(&b.element.source))
    });

    for scored in rest {
        insert(&mut sections, scored, section_match_threshold);
    }

    sections.retain(|s| !s.elements.is_empty());
    renormalize(&mut sections);

    let total: usize = sections.iter().map(|s| s.elements.len()).sum();
    let primary_count = sections
        .iter()
        .flat_map(|s| s.elements.iter())
        .filter(|e| e.is_from(pareto.primary))
        .count();

    CombinedResponse {
        ensemble_composition: composition(&sections),
        primary_candidate: pareto.primary,
        primary_contribution_ratio: if total == 0 {
            0.0
        } else {
            primary_count as f64 / total as f64
        },
        sections,
    }
}

/// Route one element into the best-matching section, or open a new one.
fn insert(sections: &mut Vec<CombinedSection>, scored: &ScoredElement, threshold: f64) {
    let tokens = text::token_set(&scored.element.text);

    let best = sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let mut section_text = section.title.clone();
            for e in &section.elements {
                section_text.push(' ');
                section_text.push_str(&e.element.text);
            }
            (i, text::jaccard(&tokens, &text::token_set(&section_text)))
        })
        .fold(None::<(usize, f64)>, |best, (i, score)| match best {
            Some((_, s)) if score <= s => best,
            _ => Some((i, score)),
        });

    match best {
        Some((i, score)) if score >= threshold => sections[i].elements.push(scored.clone()),
        _ => {
            let title = new_section_title(sections, &scored.element.text);
            debug!(title = %title, element = %scored.element.id, "opened new section");
            sections.push(CombinedSection {
                title,
                elements: vec![scored.clone()],
            });
        }
    }
}

/// Title a new section after the element's dominant keyword, suffixing
/// " (2)", " (3)"... until unique.
fn new_section_title(sections: &[CombinedSection], element_text: &str) -> String {
    let base = text::dominant_keyword(element_text)
        .map(|k| text::title_case(&k))
        .unwrap_or_else(|| "Additional".to_string());

    if !sections.iter().any(|s| s.title == base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base} ({n})");
        if !sections.iter().any(|s| s.title == candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Scale combination weights so each section's weights sum to 1.
fn renormalize(sections: &mut [CombinedSection]) {
    for section in sections {
        let sum: f64 = section.elements.iter().map(|e| e.combination_weight).sum();
        if sum > 0.0 {
            for element in &mut section.elements {
                element.combination_weight /= sum;
            }
        }
    }
}

fn composition(sections: &[CombinedSection]) -> Vec<SourceContribution> {
    let mut counts: std::collections::BTreeMap<usize, usize> = std::collections::BTreeMap::new();
    for element in sections.iter().flat_map(|s| s.elements.iter()) {
        *counts.entry(element.element.source).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(candidate, elements)| SourceContribution {
            candidate,
            elements,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quorum_core::candidate::{Element, ElementCategory};

    fn scored(element: Element, quality: f64) -> ScoredElement {
        ScoredElement {
            element,
            quality,
            diversity_contribution: 0.5,
            combination_weight: quality,
        }
    }

    fn primary() -> Candidate {
        Candidate::new(
            "c0",
            vec![
                Element::new("h0", 0, ElementCategory::SectionHeader, "Forces"),
                Element::new("e0", 0, ElementCategory::Claim, "force equals mass times acceleration"),
            ],
        )
    }

    fn pareto_with(extra: Vec<ScoredElement>) -> ParetoSet {
        let mut elements = vec![scored(
            Element::new("e0", 0, ElementCategory::Claim, "force equals mass times acceleration"),
            0.9,
        )];
        elements.extend(extra);
        ParetoSet {
            primary: 0,
            elements,
        }
    }

    #[test]
    fn matching_element_joins_the_primary_section() {
        let extra = scored(
            Element::new("x0", 1, ElementCategory::Claim, "net force determines acceleration"),
            0.7,
        );
        let response = assemble(&primary(), &pareto_with(vec![extra]), 0.1);
        assert_eq!(response.sections.len(), 1);
        assert_eq!(response.sections[0].title, "Forces");
        assert_eq!(response.sections[0].elements.len(), 2);
    }

    #[test]
    fn unrelated_element_opens_a_keyword_titled_section() {
        let extra = scored(
            Element::new("x0", 1, ElementCategory::Claim, "photosynthesis converts sunlight"),
            0.7,
        );
        let response = assemble(&primary(), &pareto_with(vec![extra]), 0.1);
        assert_eq!(response.sections.len(), 2);
        assert_eq!(response.sections[1].title, "Photosynthesis");
    }

    #[test]
    fn duplicate_titles_get_numeric_suffixes() {
        let sections = vec![
            CombinedSection {
                title: "Momentum".into(),
                elements: vec![],
            },
            CombinedSection {
                title: "Momentum (2)".into(),
                elements: vec![],
            },
        ];
        let title = new_section_title(&sections, "momentum builds momentum");
        assert_eq!(title, "Momentum (3)");
    }

    #[test]
    fn section_weights_renormalize_to_one() {
        let extra = scored(
            Element::new("x0", 1, ElementCategory::Claim, "net force determines acceleration"),
            0.6,
        );
        let response = assemble(&primary(), &pareto_with(vec![extra]), 0.1);
        let sum: f64 = response.sections[0]
            .elements
            .iter()
            .map(|e| e.combination_weight)
            .sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn contribution_ratio_counts_primary_elements() {
        let extra = scored(
            Element::new("x0", 1, ElementCategory::Claim, "net force determines acceleration"),
            0.7,
        );
        let response = assemble(&primary(), &pareto_with(vec![extra]), 0.1);
        assert!((response.primary_contribution_ratio - 0.5).abs() < 1e-12);
        assert_eq!(response.ensemble_composition.len(), 2);
        assert_eq!(response.ensemble_composition[0].candidate, 0);
        assert_eq!(response.ensemble_composition[0].elements, 1);
    }
}
