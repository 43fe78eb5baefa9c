//! Dense first stage: dot product against a precomputed embedding matrix.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use scout_core::config::Backend;
use scout_core::errors::{RetrievalError, ScoutResult};
use scout_core::models::{Candidate, Catalog};
use scout_core::traits::IFirstStageRetriever;
use scout_embeddings::{EmbeddingMatrix, EncoderEngine};
use tracing::{debug, info};

/// Dual-encoder retriever.
///
/// Matrix rows are matched to catalog records by position. If the file at
/// `path` was built from a different catalog the results are wrong, or fail
/// with [`RetrievalError::CatalogDesync`] when a row has no record.
pub struct DenseRetriever {
    path: PathBuf,
    engine: EncoderEngine,
    matrix: Mutex<Option<Arc<EmbeddingMatrix>>>,
}

impl DenseRetriever {
    pub fn new(path: impl Into<PathBuf>, engine: EncoderEngine) -> Self {
        Self {
            path: path.into(),
            engine,
            matrix: Mutex::new(None),
        }
    }

    pub fn engine(&self) -> &EncoderEngine {
        &self.engine
    }

    fn loaded(&self, catalog: &Catalog) -> ScoutResult<Arc<EmbeddingMatrix>> {
        let mut slot = self.matrix.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(ref matrix) = *slot {
            return Ok(Arc::clone(matrix));
        }

        let _span = scout_core::index_span!(Backend::Dense, self.path.display()).entered();
        let matrix = if self.path.exists() {
            let matrix = EmbeddingMatrix::load(&self.path)?;
            debug!(rows = matrix.len(), dims = matrix.dims(), "loaded embedding matrix");
            matrix
        } else {
            let matrix = self.engine.encode_descriptions(catalog)?;
            matrix.save(&self.path)?;
            info!(
                rows = matrix.len(),
                encoder = self.engine.encoder_name(),
                path = %self.path.display(),
                "built embedding matrix"
            );
            matrix
        };

        let matrix = Arc::new(matrix);
        *slot = Some(Arc::clone(&matrix));
        Ok(matrix)
    }
}

impl IFirstStageRetriever for DenseRetriever {
    fn backend(&self) -> Backend {
        Backend::Dense
    }

    fn index_path(&self) -> &Path {
        &self.path
    }

    fn ensure_index(&self, catalog: &Catalog) -> ScoutResult<()> {
        self.loaded(catalog).map(|_| ())
    }

    fn retrieve_candidates(
        &self,
        query_text: &str,
        catalog: &Catalog,
        depth: usize,
    ) -> ScoutResult<Vec<Candidate>> {
        let matrix = self.loaded(catalog)?;
        let query = self.engine.encode_query(query_text)?;
        let top = matrix.top_k(&query, depth)?;
        debug!(hits = top.len(), depth, "dense first stage");

        top.into_iter()
            .map(|(row, score)| -> ScoutResult<Candidate> {
                let record = catalog.at(row).ok_or_else(|| RetrievalError::CatalogDesync {
                    name: format!("<embedding row {row}>"),
                })?;
                Ok(Candidate::new(record.name.clone(), score as f64))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::config::EmbeddingConfig;
    use scout_core::models::ModelRecord;
    use tempfile::TempDir;

    fn engine() -> EncoderEngine {
        EncoderEngine::new(&EmbeddingConfig {
            provider: "hashing".to_string(),
            dimensions: 512,
            ..Default::default()
        })
    }

    fn catalog(names: &[(&str, &str)]) -> Catalog {
        Catalog::new(
            names
                .iter()
                .map(|(n, d)| ModelRecord::new(*n, *d, 10, 1))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn builds_matrix_when_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("embeddings/model-index.bin");
        let catalog = catalog(&[("bart", "news summarization"), ("vit", "image classification")]);
        let retriever = DenseRetriever::new(&path, engine());

        retriever.ensure_index(&catalog).unwrap();
        assert!(path.is_file());

        let hits = retriever
            .retrieve_candidates("image classification", &catalog, 1)
            .unwrap();
        assert_eq!(hits[0].name, "vit");
    }

    #[test]
    fn returns_at_most_depth() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog(&[("a", "one"), ("b", "two"), ("c", "three")]);
        let retriever = DenseRetriever::new(dir.path().join("m.bin"), engine());
        assert_eq!(retriever.retrieve_candidates("one", &catalog, 2).unwrap().len(), 2);
    }

    #[test]
    fn row_beyond_catalog_is_desync() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("m.bin");
        let big = catalog(&[("a", "alpha"), ("b", "beta"), ("c", "gamma")]);
        DenseRetriever::new(&path, engine()).ensure_index(&big).unwrap();

        // Same file, smaller catalog: rows 1 and 2 have no record.
        let small = catalog(&[("a", "alpha")]);
        let err = DenseRetriever::new(&path, engine())
            .retrieve_candidates("gamma", &small, 3)
            .unwrap_err();
        assert!(matches!(
            err,
            scout_core::ScoutError::Retrieval(RetrievalError::CatalogDesync { .. })
        ));
    }
}
