//! # quorum-engine
//!
//! The single entry point to the response-optimization pipeline:
//! validate inputs, score every candidate, build the diversity matrix,
//! select the ensemble, Pareto-optimize its elements, and combine them
//! into one verified response.

pub mod pipeline;

pub use pipeline::Pipeline;
