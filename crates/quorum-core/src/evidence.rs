//! Domain-knowledge evidence supplied by upstream extraction stages.

use serde::{Deserialize, Serialize};

use crate::errors::{QuorumError, QuorumResult};

/// A factual statement with an extraction confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub statement: String,
    /// Extraction confidence in [0, 1].
    pub confidence: f64,
}

/// A named formula from the domain knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formula {
    pub name: String,
    pub expression: String,
}

/// A key domain concept with an importance weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    /// Importance in [0, 1]; concepts above 0.7 drive completeness and
    /// likelihood fallbacks.
    pub importance: f64,
}

/// All domain evidence available for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainEvidence {
    pub facts: Vec<Fact>,
    pub formulas: Vec<Formula>,
    pub key_concepts: Vec<Concept>,
}

impl DomainEvidence {
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty() && self.formulas.is_empty() && self.key_concepts.is_empty()
    }

    /// Concepts important enough to drive coverage checks.
    pub fn important_concepts(&self) -> impl Iterator<Item = &Concept> {
        self.key_concepts.iter().filter(|c| c.importance > 0.7)
    }

    /// Look up a formula by name (case-insensitive).
    pub fn formula_named(&self, name: &str) -> Option<&Formula> {
        self.formulas
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Reject non-finite or out-of-range confidence/importance values
    /// before any computation begins.
    pub fn validate(&self) -> QuorumResult<()> {
        for fact in &self.facts {
            if !fact.confidence.is_finite() || !(0.0..=1.0).contains(&fact.confidence) {
                return Err(QuorumError::MalformedEvidence {
                    reason: format!("fact confidence {} outside [0, 1]", fact.confidence),
                });
            }
        }
        for concept in &self.key_concepts {
            if !concept.importance.is_finite() || !(0.0..=1.0).contains(&concept.importance) {
                return Err(QuorumError::MalformedEvidence {
                    reason: format!("concept importance {} outside [0, 1]", concept.importance),
                });
            }
        }
        Ok(())
    }
}
