//! # quorum-core
//!
//! Foundation crate for the quorum response-optimization engine.
//! Defines all types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod candidate;
pub mod config;
pub mod constants;
pub mod errors;
pub mod evidence;
pub mod intent;
pub mod models;
pub mod text;

// Re-export the most commonly used types at the crate root.
pub use candidate::{Candidate, Element, ElementCategory};
pub use config::EngineConfig;
pub use errors::{QuorumError, QuorumResult};
pub use evidence::DomainEvidence;
pub use intent::QueryIntent;
pub use models::{Dimension, DimensionScores};
