// Pairwise cosine distance.
//
// distance(i, j) = 1 - cosine(row_i, row_j). Only the upper triangle is
// computed; the lower triangle is mirrored, so the result is symmetric by
// construction with a zero diagonal.

use serde::Serialize;
use tracing::debug;

use crate::model::TermDocumentMatrix;

/// Square, symmetric distance matrix in document row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.size + j] = value;
        self.values[j * self.size + i] = value;
    }

    /// One row of distances.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Ordered pairs (i, j), i != j, whose distance is at least `threshold`.
    pub fn pairs_at_least(&self, threshold: f64) -> Vec<(usize, usize, f64)> {
        let mut pairs = Vec::new();
        for i in 0..self.size {
            for j in 0..self.size {
                let d = self.get(i, j);
                if i != j && d >= threshold {
                    pairs.push((i, j, d));
                }
            }
        }
        pairs
    }
}

/// Cosine similarity of two matrix rows, clamped to [0, 1]. A zero-norm row
/// is similar to nothing.
pub fn cosine_similarity(matrix: &TermDocumentMatrix, i: usize, j: usize) -> f64 {
    let (Some(a), Some(b)) = (matrix.row(i), matrix.row(j)) else {
        return 0.0;
    };
    let (norm_a, norm_b) = (a.l2_norm(), b.l2_norm());
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(&b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Cosine distance between every pair of documents.
pub fn pairwise_distance(matrix: &TermDocumentMatrix) -> DistanceMatrix {
    let n = matrix.n_rows();
    let mut distances = DistanceMatrix::zeros(n);
    for i in 0..n {
        for j in (i + 1)..n {
            distances.set_pair(i, j, 1.0 - cosine_similarity(matrix, i, j));
        }
    }
    debug!(documents = n, "Computed pairwise cosine distances");
    distances
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_rows_have_zero_distance() {
        let m = TermDocumentMatrix::from_dense(&[vec![1.0, 2.0], vec![2.0, 4.0]])
            .expect("valid dense rows");
        let d = pairwise_distance(&m);
        assert!(d.get(0, 1).abs() < 1e-12);
    }

    #[test]
    fn test_orthogonal_rows_have_unit_distance() {
        let m = TermDocumentMatrix::from_dense(&[vec![1.0, 0.0], vec![0.0, 3.0]])
            .expect("valid dense rows");
        let d = pairwise_distance(&m);
        assert_eq!(d.get(0, 1), 1.0);
        assert_eq!(d.get(1, 0), 1.0);
        assert_eq!(d.get(0, 0), 0.0);
    }

    #[test]
    fn test_zero_row_is_distant_from_all_but_itself() {
        let m = TermDocumentMatrix::from_dense(&[vec![0.0, 0.0], vec![1.0, 1.0]])
            .expect("valid dense rows");
        let d = pairwise_distance(&m);
        assert_eq!(d.get(0, 0), 0.0);
        assert_eq!(d.get(0, 1), 1.0);
    }

    #[test]
    fn test_pairs_at_least_threshold() {
        let m = TermDocumentMatrix::from_dense(&[
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
        ])
        .expect("valid dense rows");
        let pairs = pairwise_distance(&m).pairs_at_least(0.5);
        let ids: Vec<(usize, usize)> = pairs.iter().map(|(i, j, _)| (*i, *j)).collect();
        assert_eq!(ids, vec![(0, 1), (1, 0), (1, 2), (2, 1)]);
    }
}
