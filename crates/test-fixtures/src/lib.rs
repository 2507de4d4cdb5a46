//! Shared builders for integration and property tests.
//!
//! Everything here is deterministic: fixture ids are derived from
//! positions, never generated.

use quorum_core::candidate::{Candidate, Element, ElementCategory};
use quorum_core::evidence::{Concept, DomainEvidence, Fact, Formula};
use quorum_core::intent::{IntentComponent, QueryIntent};

/// Fluent candidate builder assigning sequential element ids.
pub struct CandidateBuilder {
    id: String,
    source: usize,
    elements: Vec<Element>,
}

impl CandidateBuilder {
    pub fn new(source: usize) -> Self {
        Self {
            id: format!("candidate-{source}"),
            source,
            elements: Vec::new(),
        }
    }

    fn push(mut self, category: ElementCategory, text: &str, relevance: f64) -> Self {
        let id = format!("{}-e{}", self.id, self.elements.len());
        self.elements
            .push(Element::new(id, self.source, category, text).with_relevance(relevance));
        self
    }

    pub fn header(self, title: &str) -> Self {
        self.push(ElementCategory::SectionHeader, title, 0.5)
    }

    pub fn claim(self, text: &str) -> Self {
        self.push(ElementCategory::Claim, text, 0.5)
    }

    pub fn weighted_claim(self, text: &str, relevance: f64) -> Self {
        self.push(ElementCategory::Claim, text, relevance)
    }

    pub fn evidence(self, text: &str) -> Self {
        self.push(ElementCategory::Evidence, text, 0.5)
    }

    pub fn formula(self, name: &str, expression: &str) -> Self {
        let mut s = self.push(ElementCategory::Formula, expression, 0.5);
        // Formula elements are matched to domain formulas by id.
        if let Some(last) = s.elements.last_mut() {
            last.id = name.to_string();
        }
        s
    }

    pub fn calculation(self, text: &str) -> Self {
        self.push(ElementCategory::Calculation, text, 0.5)
    }

    pub fn build(self) -> Candidate {
        Candidate::new(self.id, self.elements)
    }
}

/// A physics-flavored evidence set used by most scenario tests.
pub fn physics_evidence() -> DomainEvidence {
    DomainEvidence {
        facts: vec![
            Fact {
                statement: "force equals mass times acceleration".into(),
                confidence: 0.95,
            },
            Fact {
                statement: "kinetic energy grows with the square of velocity".into(),
                confidence: 0.9,
            },
        ],
        formulas: vec![
            Formula {
                name: "newton_second".into(),
                expression: "F = m * a".into(),
            },
            Formula {
                name: "kinetic_energy".into(),
                expression: "E = 0.5 * m * v * v".into(),
            },
        ],
        key_concepts: vec![
            Concept {
                name: "force".into(),
                importance: 0.9,
            },
            Concept {
                name: "acceleration".into(),
                importance: 0.8,
            },
            Concept {
                name: "friction".into(),
                importance: 0.4,
            },
        ],
    }
}

/// Intent matching [`physics_evidence`].
pub fn physics_intent() -> QueryIntent {
    QueryIntent {
        components: vec![
            IntentComponent::new("dynamics", &["force", "acceleration"]),
            IntentComponent::new("energy", &["energy", "velocity"]),
        ],
        required_topics: vec!["force".into(), "energy".into()],
    }
}

/// A well-formed candidate that addresses the physics intent.
pub fn strong_candidate(source: usize) -> Candidate {
    CandidateBuilder::new(source)
        .header("Overview")
        .claim("force equals mass times acceleration")
        .formula("newton_second", "F = m * a")
        .header("Energy")
        .claim("kinetic energy grows with the square of velocity")
        .claim("doubling velocity quadruples the kinetic energy of the body")
        .build()
}

/// A weaker candidate covering only part of the intent.
pub fn partial_candidate(source: usize) -> Candidate {
    CandidateBuilder::new(source)
        .claim("force depends on acceleration")
        .claim("objects resist changes to their motion")
        .build()
}

/// A candidate about a different domain entirely.
pub fn off_topic_candidate(source: usize) -> Candidate {
    CandidateBuilder::new(source)
        .claim("the cell membrane regulates what enters the cell")
        .claim("mitochondria produce most of the cell's energy supply")
        .build()
}
