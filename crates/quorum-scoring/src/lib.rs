//! # quorum-scoring
//!
//! Per-candidate evaluation: the five quality dimensions, the Bayesian
//! evidence model, uncertainty quantification, and the refinement
//! decision. [`ScoringEngine::assess`] runs all four stages and returns
//! a [`quorum_core::models::CandidateAssessment`].

pub mod bayesian;
pub mod dimensions;
pub mod engine;
pub mod entropy;
pub mod refinement;
pub mod uncertainty;

pub use engine::ScoringEngine;
