//! Declared query-intent descriptor.

use serde::{Deserialize, Serialize};

/// One aspect of what the query is asking for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentComponent {
    pub name: String,
    /// Terms whose presence in a candidate means this component is addressed.
    pub key_terms: Vec<String>,
    /// Relative weight of this component within the intent.
    pub weight: f64,
}

impl IntentComponent {
    pub fn new(name: impl Into<String>, key_terms: &[&str]) -> Self {
        Self {
            name: name.into(),
            key_terms: key_terms.iter().map(|t| (*t).to_string()).collect(),
            weight: 1.0,
        }
    }
}

/// The semantic intent of the user's query, as declared upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryIntent {
    pub components: Vec<IntentComponent>,
    /// Information categories a complete answer must cover.
    pub required_topics: Vec<String>,
}

impl QueryIntent {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.required_topics.is_empty()
    }

    /// All key terms across components, in declaration order.
    pub fn all_key_terms(&self) -> Vec<&str> {
        self.components
            .iter()
            .flat_map(|c| c.key_terms.iter().map(String::as_str))
            .collect()
    }
}
