//! Five-dimension quality assessment.
//!
//! Each dimension module exposes a `score` function returning a value in
//! [0, 1]. An empty candidate scores exactly 0.0 on every dimension; the
//! engine short-circuits before calling into the modules.

pub mod accuracy;
pub mod completeness;
pub mod consistency;
pub mod novelty;
pub mod relevance;
