//! Refinement decision: pass/fail verdict and ranked guidance for the
//! upstream regeneration collaborator.

use quorum_core::models::{
    Dimension, DimensionScores, FailingDimension, RefinementAnalysis, RefinementDirective,
    Severity, Suggestion, UncertaintyRecord,
};

/// Decide pass/fail and rank the failing dimensions by refinement
/// priority: `(gap x weight) / (1 - confidence)`, so a large weighted
/// gap we are confident about is fixed first.
pub fn analyze(
    scores: &DimensionScores,
    uncertainty: &UncertaintyRecord,
    weights: &DimensionScores,
    thresholds: &DimensionScores,
    global_threshold: f64,
) -> RefinementAnalysis {
    let overall_score = scores.weighted_sum(weights);

    let mut failing: Vec<FailingDimension> = Vec::new();
    for dimension in Dimension::ALL {
        let score = scores.get(dimension);
        let threshold = thresholds.get(dimension);
        if score < threshold {
            let gap = threshold - score;
            let confidence = uncertainty.get(dimension).confidence;
            let priority = (gap * weights.get(dimension)) / (1.0 - confidence).max(1e-9);
            failing.push(FailingDimension {
                dimension,
                score,
                threshold,
                gap,
                priority,
            });
        }
    }
    // Stable sort: equal priorities keep canonical dimension order.
    failing.sort_by(|a, b| b.priority.partial_cmp(&a.priority).unwrap_or(std::cmp::Ordering::Equal));

    let passed = overall_score >= global_threshold && failing.is_empty();
    let suggestions = failing.iter().map(suggestion_for).collect();

    RefinementAnalysis {
        overall_score,
        passed,
        failing,
        suggestions,
    }
}

/// Package a failed analysis as a directive for the caller. The engine
/// itself never regenerates content.
pub fn directive(analysis: &RefinementAnalysis) -> RefinementDirective {
    RefinementDirective {
        ranked: analysis.failing.clone(),
        suggestions: analysis.suggestions.clone(),
    }
}

/// Deterministic templated suggestion for one failing dimension.
fn suggestion_for(failing: &FailingDimension) -> Suggestion {
    let severity = if failing.gap >= 0.2 {
        Severity::High
    } else if failing.gap >= 0.1 {
        Severity::Medium
    } else {
        Severity::Low
    };

    let text = match failing.dimension {
        Dimension::Accuracy => {
            "Align factual claims and formulas with the domain evidence; \
             remove or correct statements the evidence does not support"
        }
        Dimension::Completeness => {
            "Cover the remaining required topics; each declared topic \
             needs at least one dedicated element"
        }
        Dimension::Consistency => {
            "Resolve contradictory claim pairs; keep one polarity per \
             subject across the response"
        }
        Dimension::Relevance => {
            "Tie more elements to the query's key terms and drop content \
             that addresses none of the intent components"
        }
        Dimension::Novelty => {
            "Add synthesis beyond restating the evidence; derive \
             implications instead of repeating facts"
        }
    };

    Suggestion {
        dimension: failing.dimension,
        severity,
        text: text.to_string(),
        expected_improvement: (failing.gap * 0.6).min(0.25),
    }
}
