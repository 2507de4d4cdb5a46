//! Symmetric pairwise diversity matrix.

use serde::{Deserialize, Serialize};

/// Dense symmetric N×N matrix of diversity scalars in [0, 1].
/// The diagonal is always 0: a candidate has zero diversity from itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiversityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DiversityMatrix {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            values: vec![0.0; n * n],
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Write both symmetric cells. Diagonal writes are ignored; the
    /// diagonal is fixed at 0.
    pub fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        if i == j {
            return;
        }
        self.values[i * self.n + j] = value;
        self.values[j * self.n + i] = value;
    }

    /// Mean diversity of candidate `i` to every other candidate.
    pub fn mean_for(&self, i: usize) -> f64 {
        if self.n < 2 {
            return 0.0;
        }
        let sum: f64 = (0..self.n).filter(|&j| j != i).map(|j| self.get(i, j)).sum();
        sum / (self.n - 1) as f64
    }

    /// Mean diversity of candidate `i` to a subset of candidates.
    pub fn mean_to(&self, i: usize, subset: &[usize]) -> f64 {
        if subset.is_empty() {
            return 0.0;
        }
        let sum: f64 = subset.iter().map(|&j| self.get(i, j)).sum();
        sum / subset.len() as f64
    }

    /// Minimum diversity of candidate `i` to a subset of candidates.
    pub fn min_to(&self, i: usize, subset: &[usize]) -> f64 {
        subset
            .iter()
            .map(|&j| self.get(i, j))
            .fold(f64::INFINITY, f64::min)
    }

    /// Maximum similarity (1 − diversity) of candidate `i` to a subset.
    pub fn max_similarity_to(&self, i: usize, subset: &[usize]) -> f64 {
        subset
            .iter()
            .map(|&j| 1.0 - self.get(i, j))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_with_zero_diagonal() {
        let mut m = DiversityMatrix::new(3);
        m.set_pair(0, 1, 0.4);
        m.set_pair(1, 2, 0.8);
        m.set_pair(2, 2, 0.9); // ignored
        assert_eq!(m.get(0, 1), 0.4);
        assert_eq!(m.get(1, 0), 0.4);
        assert_eq!(m.get(2, 2), 0.0);
        for i in 0..3 {
            assert_eq!(m.get(i, i), 0.0);
        }
    }

    #[test]
    fn subset_statistics() {
        let mut m = DiversityMatrix::new(3);
        m.set_pair(0, 1, 0.4);
        m.set_pair(0, 2, 0.6);
        assert!((m.mean_to(0, &[1, 2]) - 0.5).abs() < 1e-12);
        assert!((m.min_to(0, &[1, 2]) - 0.4).abs() < 1e-12);
        assert!((m.max_similarity_to(0, &[1, 2]) - 0.6).abs() < 1e-12);
    }
}
