//! Ensemble selection: greedy and MMR strategies over the quality
//! scores and the diversity matrix.

use tracing::{debug, warn};

use quorum_core::candidate::Candidate;
use quorum_core::config::{SelectionAlgorithm, SelectionConfig};
use quorum_core::models::{CandidateAssessment, DiversityMatrix, EnsembleSelection};

/// Select the ensemble. The primary (highest overall quality, ties to
/// the lowest input index) is always selected first; every further
/// addition must be non-empty and keep at least
/// `min_diversity_threshold` diversity to each already-selected member.
/// The gate also binds below `min_ensemble_size`: an undersized
/// ensemble is preferred over a padded one that violates the gate.
pub fn select(
    candidates: &[Candidate],
    assessments: &[CandidateAssessment],
    matrix: &DiversityMatrix,
    config: &SelectionConfig,
) -> EnsembleSelection {
    let primary = primary_index(assessments);
    let mut selected = vec![primary];

    while selected.len() < config.max_ensemble_size {
        let next = assessments
            .iter()
            .enumerate()
            .filter(|(i, _)| !selected.contains(i) && !candidates[*i].is_empty())
            .filter(|(i, _)| eligible(*i, &selected, matrix, config.min_diversity_threshold))
            .map(|(i, a)| (i, objective(a.overall_score(), i, &selected, matrix, config)))
            // Strict comparison keeps the earliest index on ties.
            .fold(None::<(usize, f64)>, |best, (i, score)| match best {
                Some((_, best_score)) if score <= best_score => best,
                _ => Some((i, score)),
            });

        match next {
            Some((i, score)) => {
                debug!(candidate = i, objective = score, "selected ensemble member");
                selected.push(i);
            }
            None => break,
        }
    }

    // min_ensemble_size is a target, not a guarantee: an undersized
    // ensemble is returned as-is rather than padded past the gate.
    if selected.len() < config.min_ensemble_size {
        warn!(
            selected = selected.len(),
            target = config.min_ensemble_size,
            "ensemble below target size, no eligible candidates left"
        );
    }

    EnsembleSelection { selected }
}

/// Highest overall quality; ties resolve to the lowest input index.
pub fn primary_index(assessments: &[CandidateAssessment]) -> usize {
    let mut best = 0;
    for (i, assessment) in assessments.iter().enumerate().skip(1) {
        if assessment.overall_score() > assessments[best].overall_score() {
            best = i;
        }
    }
    best
}

fn eligible(i: usize, selected: &[usize], matrix: &DiversityMatrix, threshold: f64) -> bool {
    matrix.min_to(i, selected) >= threshold
}

fn objective(
    quality: f64,
    i: usize,
    selected: &[usize],
    matrix: &DiversityMatrix,
    config: &SelectionConfig,
) -> f64 {
    let alpha = config.alpha;
    match config.algorithm {
        SelectionAlgorithm::Greedy => {
            alpha * quality + (1.0 - alpha) * matrix.mean_to(i, selected)
        }
        SelectionAlgorithm::Mmr => {
            alpha * quality - (1.0 - alpha) * matrix.max_similarity_to(i, selected)
        }
    }
}
