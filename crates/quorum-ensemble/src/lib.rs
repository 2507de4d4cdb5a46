//! # quorum-ensemble
//!
//! The middle of the pipeline: pairwise diversity between candidates,
//! quality/diversity ensemble selection, and element-level Pareto
//! optimization of the selected ensemble.

pub mod diversity;
pub mod pareto;
pub mod selection;

pub use diversity::DiversityCalculator;
pub use pareto::optimize;
pub use selection::select;
