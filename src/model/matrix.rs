// Sparse term-document matrix and the context that names its rows and columns.
//
// Rows are documents and columns are vocabulary terms. Weights live in a CSR
// matrix; explicit zeros are never stored.

use ndarray::Array2;
use serde::Serialize;
use sprs::{CsMat, CsVecView, TriMat};

use super::vocabulary::Vocabulary;
use crate::error::AnalysisError;

/// Row and column orderings shared by every artifact derived from one model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelContext {
    /// Document identifiers in row order.
    pub documents: Vec<String>,
    /// Terms in column order.
    pub vocabulary: Vocabulary,
}

impl ModelContext {
    pub fn document_index(&self, id: &str) -> Option<usize> {
        self.documents.iter().position(|doc| doc == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermDocumentMatrix {
    weights: CsMat<f64>,
}

impl TermDocumentMatrix {
    /// Build from (column, weight) rows. Zero weights are skipped; a column
    /// outside `n_cols` is a dimension mismatch.
    pub fn from_rows(rows: Vec<Vec<(usize, f64)>>, n_cols: usize) -> Result<Self, AnalysisError> {
        let mut triplets = TriMat::new((rows.len(), n_cols));
        for (row, entries) in rows.into_iter().enumerate() {
            for (col, weight) in entries {
                if col >= n_cols {
                    return Err(AnalysisError::DimensionMismatch {
                        expected: n_cols,
                        got: col + 1,
                    });
                }
                if weight != 0.0 {
                    triplets.add_triplet(row, col, weight);
                }
            }
        }
        Ok(Self {
            weights: triplets.to_csr(),
        })
    }

    /// Build from dense rows, all of the same width.
    pub fn from_dense(rows: &[Vec<f64>]) -> Result<Self, AnalysisError> {
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(ragged) = rows.iter().find(|row| row.len() != n_cols) {
            return Err(AnalysisError::DimensionMismatch {
                expected: n_cols,
                got: ragged.len(),
            });
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let dense = Array2::from_shape_vec((rows.len(), n_cols), flat).map_err(|_| {
            AnalysisError::DimensionMismatch {
                expected: rows.len() * n_cols,
                got: rows.iter().map(Vec::len).sum(),
            }
        })?;
        Ok(Self {
            weights: CsMat::csr_from_dense(dense.view(), 0.0),
        })
    }

    pub fn n_rows(&self) -> usize {
        self.weights.rows()
    }

    pub fn n_cols(&self) -> usize {
        self.weights.cols()
    }

    /// Sparse view of one document's weights.
    pub fn row(&self, row: usize) -> Option<CsVecView<'_, f64>> {
        self.weights.outer_view(row)
    }

    /// Weight at (row, col); absent entries are zero.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.weights.get(row, col).copied().unwrap_or(0.0)
    }

    /// Every row densified, for estimators that take an `Array2`.
    pub fn to_dense(&self) -> Array2<f64> {
        self.weights.to_dense()
    }

    pub fn norm(&self, row: usize) -> f64 {
        self.row(row).map(|view| view.l2_norm()).unwrap_or(0.0)
    }

    /// Every stored (row, col, weight) triple in row-major order.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.weights.iter().map(|(&weight, (row, col))| (row, col, weight))
    }

    /// Count of stored entries.
    pub fn nnz(&self) -> usize {
        self.weights.nnz()
    }

    /// Fail unless the matrix shape matches the context.
    pub fn check_context(&self, context: &ModelContext) -> Result<(), AnalysisError> {
        if self.n_rows() != context.documents.len() {
            return Err(AnalysisError::DimensionMismatch {
                expected: context.documents.len(),
                got: self.n_rows(),
            });
        }
        if self.n_cols() != context.vocabulary.len() {
            return Err(AnalysisError::DimensionMismatch {
                expected: context.vocabulary.len(),
                got: self.n_cols(),
            });
        }
        Ok(())
    }
}
