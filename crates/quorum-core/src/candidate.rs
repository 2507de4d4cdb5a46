//! Candidate and element types.
//!
//! A candidate is an opaque structured document produced upstream: an
//! ordered sequence of atomic elements. Candidates are immutable once
//! received; every pipeline stage only reads them and produces new
//! derived structures.

use serde::{Deserialize, Serialize};

use crate::constants::IMPLICIT_SECTION_TITLE;

/// Category of an atomic content unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    Claim,
    Evidence,
    Formula,
    Calculation,
    SectionHeader,
}

impl ElementCategory {
    /// Categories checked against domain knowledge during accuracy scoring.
    pub fn is_factual(self) -> bool {
        matches!(
            self,
            ElementCategory::Claim | ElementCategory::Formula | ElementCategory::Calculation
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementCategory::Claim => "claim",
            ElementCategory::Evidence => "evidence",
            ElementCategory::Formula => "formula",
            ElementCategory::Calculation => "calculation",
            ElementCategory::SectionHeader => "section_header",
        }
    }
}

/// An atomic content unit within a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Upstream-assigned identifier, unique within a request.
    pub id: String,
    /// Index of the candidate this element came from.
    pub source: usize,
    pub category: ElementCategory,
    /// Free-form payload text. For `Formula` elements this is the
    /// expression; the formula name goes in `id` conventions upstream.
    pub text: String,
    /// Upstream emphasis weight in [0, 1].
    pub relevance: f64,
}

impl Element {
    pub fn new(
        id: impl Into<String>,
        source: usize,
        category: ElementCategory,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source,
            category,
            text: text.into(),
            relevance: 0.5,
        }
    }

    pub fn with_relevance(mut self, relevance: f64) -> Self {
        self.relevance = relevance;
        self
    }
}

/// A section derived from a candidate's element sequence: the title of a
/// `SectionHeader` element plus the indices of the elements that follow it
/// up to the next header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedSection {
    pub title: String,
    pub element_indices: Vec<usize>,
}

/// One full proposed solution to optimize among.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub elements: Vec<Element>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            id: id.into(),
            elements,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Non-header elements, in document order.
    pub fn content_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(|e| e.category != ElementCategory::SectionHeader)
    }

    /// Derive the section skeleton. A `SectionHeader` element opens a
    /// section containing the elements up to the next header; leading
    /// headerless elements form an implicit "Overview" section.
    pub fn derived_sections(&self) -> Vec<DerivedSection> {
        let mut sections: Vec<DerivedSection> = Vec::new();
        let mut current: Option<DerivedSection> = None;

        for (i, element) in self.elements.iter().enumerate() {
            if element.category == ElementCategory::SectionHeader {
                if let Some(section) = current.take() {
                    sections.push(section);
                }
                current = Some(DerivedSection {
                    title: element.text.clone(),
                    element_indices: Vec::new(),
                });
            } else {
                let section = current.get_or_insert_with(|| DerivedSection {
                    title: IMPLICIT_SECTION_TITLE.to_string(),
                    element_indices: Vec::new(),
                });
                section.element_indices.push(i);
            }
        }

        if let Some(section) = current {
            sections.push(section);
        }
        sections
    }

    /// Concatenated text of all non-header elements.
    pub fn body_text(&self) -> String {
        let mut out = String::new();
        for element in self.content_elements() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&element.text);
        }
        out
    }
}
