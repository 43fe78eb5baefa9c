use std::path::Path;

use crate::config::Backend;
use crate::errors::ScoutResult;
use crate::models::{Candidate, Catalog};

/// First-stage candidate generation over the whole catalog.
pub trait IFirstStageRetriever: Send + Sync {
    /// Which backend this retriever implements.
    fn backend(&self) -> Backend;

    /// Where the persisted index lives.
    fn index_path(&self) -> &Path;

    /// Load the persisted index, building and persisting it first if absent.
    fn ensure_index(&self, catalog: &Catalog) -> ScoutResult<()>;

    /// Return at most `depth` candidates in descending raw-score order.
    fn retrieve_candidates(
        &self,
        query_text: &str,
        catalog: &Catalog,
        depth: usize,
    ) -> ScoutResult<Vec<Candidate>>;
}
