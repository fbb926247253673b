use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Dense square similarity matrix, row-major.
///
/// Row `i` holds the similarity of item `i` against every item in the
/// catalog, aligned by dense identifier. The engine only ever reads full
/// rows; symmetry is not assumed. Built once by the loader and never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    data: Vec<f32>,
    n: usize,
}

impl SimilarityMatrix {
    /// Build from nested rows, validating that every row has exactly as
    /// many columns as there are rows.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(Error::InvalidMatrixRow {
                    row: i,
                    expected: n,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { data, n })
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Full similarity row for item `i`.
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}
