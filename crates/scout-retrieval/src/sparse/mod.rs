//! Sparse first stage: BM25 over model descriptions, via SQLite FTS5.
//!
//! The index is persisted under `<index_root>/collections/<index_name>/`.
//! A non-empty directory there is trusted as-is; it is not compared with
//! the current catalog.

pub mod bm25;

pub use bm25::Bm25Index;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use scout_core::config::{Backend, RetrievalConfig};
use scout_core::errors::ScoutResult;
use scout_core::models::{Candidate, Catalog};
use scout_core::traits::IFirstStageRetriever;
use tracing::{debug, info};

/// BM25 retriever with a lazily built, persisted index.
pub struct SparseRetriever {
    dir: PathBuf,
    index: Mutex<Option<Arc<Bm25Index>>>,
}

impl SparseRetriever {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            index: Mutex::new(None),
        }
    }

    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self::new(config.sparse_index_dir())
    }

    /// Whether a persisted index is present: the directory exists and has entries.
    pub fn index_exists(&self) -> bool {
        std::fs::read_dir(&self.dir)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false)
    }

    fn loaded(&self, catalog: &Catalog) -> ScoutResult<Arc<Bm25Index>> {
        let mut slot = self.index.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(ref index) = *slot {
            return Ok(Arc::clone(index));
        }

        let _span = scout_core::index_span!(Backend::Sparse, self.dir.display()).entered();
        let index = if self.index_exists() {
            let index = Bm25Index::load(&self.dir)?;
            debug!(docs = index.len(), "loaded existing BM25 index");
            index
        } else {
            let index = Bm25Index::build(
                &self.dir,
                catalog.iter().map(|r| (r.name.as_str(), r.description.as_str())),
            )?;
            info!(docs = index.len(), dir = %self.dir.display(), "built BM25 index");
            index
        };

        let index = Arc::new(index);
        *slot = Some(Arc::clone(&index));
        Ok(index)
    }
}

impl IFirstStageRetriever for SparseRetriever {
    fn backend(&self) -> Backend {
        Backend::Sparse
    }

    fn index_path(&self) -> &Path {
        &self.dir
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
        let index = self.loaded(catalog)?;
        let hits = index.search(query_text, depth)?;
        debug!(hits = hits.len(), depth, "bm25 first stage");
        Ok(hits
            .into_iter()
            .map(|(name, score)| Candidate::new(name, score))
            .collect())
    }
}
