//! # quorum-combine
//!
//! The back of the pipeline: assembles the Pareto-optimal elements into
//! one structured response, verifies it against the quality thresholds,
//! and prunes weak contributions when verification fails.

pub mod assembler;
pub mod engine;
pub mod pruning;
pub mod verifier;

pub use engine::Combiner;
