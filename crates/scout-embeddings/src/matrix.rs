//! Persisted dense index: one embedding row per catalog record.
//!
//! File layout (little-endian):
//!
//! ```text
//! count: u32 | dims: u32 | count * dims f32
//! ```
//!
//! Row `i` belongs to the `i`-th record of the catalog the matrix was built
//! from. Nothing in the file records which catalog that was.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use scout_core::errors::{EmbeddingError, RetrievalError, ScoutResult};

const HEADER_LEN: usize = 8;

/// Row-major embedding matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingMatrix {
    dims: usize,
    data: Vec<f32>,
}

impl EmbeddingMatrix {
    /// Build from rows, all of which must have `dims` entries.
    pub fn from_rows(rows: Vec<Vec<f32>>, dims: usize) -> ScoutResult<Self> {
        let mut data = Vec::with_capacity(rows.len() * dims);
        for row in rows {
            if row.len() != dims {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: dims,
                    actual: row.len(),
                }
                .into());
            }
            data.extend(row);
        }
        Ok(Self { dims, data })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        if self.dims == 0 {
            0
        } else {
            self.data.len() / self.dims
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        let start = index.checked_mul(self.dims)?;
        self.data.get(start..start + self.dims)
    }

    /// Write the matrix to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> ScoutResult<()> {
        let write_err = |e: std::io::Error| RetrievalError::IndexWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let mut out = BufWriter::new(File::create(path).map_err(write_err)?);
        out.write_all(&(self.len() as u32).to_le_bytes())
            .map_err(write_err)?;
        out.write_all(&(self.dims as u32).to_le_bytes())
            .map_err(write_err)?;
        for v in &self.data {
            out.write_all(&v.to_le_bytes()).map_err(write_err)?;
        }
        out.flush().map_err(write_err)?;
        Ok(())
    }

    /// Read a matrix written by [`save`](Self::save).
    pub fn load(path: &Path) -> ScoutResult<Self> {
        let corrupt = |reason: String| EmbeddingError::MatrixCorrupt {
            path: path.display().to_string(),
            reason,
        };
        let bytes = std::fs::read(path).map_err(|e| RetrievalError::IndexLoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        if bytes.len() < HEADER_LEN {
            return Err(corrupt(format!("{} bytes is shorter than the header", bytes.len())).into());
        }
        let count = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        let dims = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;

        let body = &bytes[HEADER_LEN..];
        let expected = count
            .checked_mul(dims)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| corrupt(format!("header {count}x{dims} overflows")))?;
        if body.len() != expected {
            return Err(corrupt(format!(
                "header declares {count}x{dims} ({expected} bytes), body has {} bytes",
                body.len()
            ))
            .into());
        }

        let data = body
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(Self { dims, data })
    }

    /// Dot product of `query` with every row, in row order.
    pub fn dot_scores(&self, query: &[f32]) -> ScoutResult<Vec<f32>> {
        if query.len() != self.dims {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dims,
                actual: query.len(),
            }
            .into());
        }
        if self.dims == 0 {
            return Ok(Vec::new());
        }
        Ok(self
            .data
            .chunks_exact(self.dims)
            .map(|row| row.iter().zip(query).map(|(a, b)| a * b).sum::<f32>())
            .collect())
    }

    /// The `k` highest-scoring `(row, score)` pairs, best first.
    /// Equal scores keep row order.
    pub fn top_k(&self, query: &[f32], k: usize) -> ScoutResult<Vec<(usize, f32)>> {
        let mut scored: Vec<(usize, f32)> =
            self.dot_scores(query)?.into_iter().enumerate().collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(k);
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> EmbeddingMatrix {
        EmbeddingMatrix::from_rows(
            vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.6, 0.8]],
            2,
        )
        .unwrap()
    }

    #[test]
    fn save_then_load_preserves_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/index.bin");
        let m = sample();
        m.save(&path).unwrap();

        let bytes = std::fs::metadata(&path).unwrap().len();
        assert_eq!(bytes, 8 + 3 * 2 * 4);
        assert_eq!(EmbeddingMatrix::load(&path).unwrap(), m);
    }

    #[test]
    fn truncated_body_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.bin");
        sample().save(&path).unwrap();
        let mut bytes = std::fs::read(&path).unwrap();
        bytes.truncate(bytes.len() - 3);
        std::fs::write(&path, bytes).unwrap();

        let err = EmbeddingMatrix::load(&path).unwrap_err();
        assert!(matches!(
            err,
            scout_core::ScoutError::Embedding(EmbeddingError::MatrixCorrupt { .. })
        ));
    }

    #[test]
    fn short_header_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.bin");
        std::fs::write(&path, [1u8, 0, 0]).unwrap();
        assert!(EmbeddingMatrix::load(&path).is_err());
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = EmbeddingMatrix::from_rows(vec![vec![1.0, 2.0], vec![1.0]], 2).unwrap_err();
        assert!(matches!(
            err,
            scout_core::ScoutError::Embedding(EmbeddingError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn top_k_orders_by_dot_product() {
        let m = sample();
        let top = m.top_k(&[1.0, 0.0], 2).unwrap();
        assert_eq!(top.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![0, 2]);
        assert!((top[1].1 - 0.6).abs() < 1e-6);
    }

    #[test]
    fn top_k_ties_keep_row_order() {
        let m = EmbeddingMatrix::from_rows(vec![vec![1.0], vec![1.0], vec![1.0]], 1).unwrap();
        let rows: Vec<usize> = m.top_k(&[2.0], 3).unwrap().into_iter().map(|(i, _)| i).collect();
        assert_eq!(rows, vec![0, 1, 2]);
    }

    #[test]
    fn query_dimension_checked() {
        assert!(sample().dot_scores(&[1.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn empty_matrix_scores_nothing() {
        let m = EmbeddingMatrix::from_rows(Vec::new(), 4).unwrap();
        assert!(m.is_empty());
        assert!(m.top_k(&[0.0; 4], 10).unwrap().is_empty());
    }
}
