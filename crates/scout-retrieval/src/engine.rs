//! ModelSelector: implements IModelRetriever, orchestrates the two-stage pipeline.
//!
//! Stage 1: first-stage retrieval by similarity alone (`first_stage_depth` hits).
//! Stage 2: rescoring by popularity and size, stable sort, truncate to `search_depth`.

use std::path::Path;

use scout_catalog::CatalogLoader;
use scout_core::config::{Backend, RetrievalConfig, ScoutConfig};
use scout_core::errors::{RetrievalError, ScoutResult};
use scout_core::models::{Catalog, PromptSpec, ScoredModel};
use scout_core::traits::{IFirstStageRetriever, IModelRetriever, IQueryRewriter};
use scout_embeddings::EncoderEngine;
use tracing::{debug, info};

use crate::dense::DenseRetriever;
use crate::expansion;
use crate::rescale::ScoreRescaler;
use crate::sparse::SparseRetriever;

/// Selects the most relevant models for a prompt.
///
/// The catalog is loaded once at construction and never changes. The
/// first-stage index is built or loaded on the first query.
pub struct ModelSelector {
    catalog: Catalog,
    retriever: Box<dyn IFirstStageRetriever>,
    rewriter: Option<Box<dyn IQueryRewriter>>,
    rescaler: ScoreRescaler,
    search_depth: usize,
    first_stage_depth: usize,
}

impl ModelSelector {
    /// Validate `config`, load the catalog and set up the configured backend.
    pub fn new(config: &ScoutConfig) -> ScoutResult<Self> {
        config.validate()?;
        let catalog = CatalogLoader::new(&config.catalog).load()?;

        let retriever: Box<dyn IFirstStageRetriever> = match config.retrieval.backend {
            Backend::Sparse => Box::new(SparseRetriever::from_config(&config.retrieval)),
            Backend::Dense => Box::new(DenseRetriever::new(
                config.retrieval.dense_index_path(),
                EncoderEngine::new(&config.embedding),
            )),
        };
        let rewriter = if config.query_rewrite.enabled {
            Some(expansion::create_rewriter(&config.query_rewrite)?)
        } else {
            None
        };

        info!(
            backend = %config.retrieval.backend,
            models = catalog.len(),
            index = %retriever.index_path().display(),
            rewriter = rewriter.as_ref().map(|r| r.name()).unwrap_or("none"),
            "model selector initialized"
        );

        Ok(Self::with_parts(catalog, retriever, rewriter, &config.retrieval))
    }

    /// Assemble a selector from an already-loaded catalog and retriever.
    pub fn with_parts(
        catalog: Catalog,
        retriever: Box<dyn IFirstStageRetriever>,
        rewriter: Option<Box<dyn IQueryRewriter>>,
        config: &RetrievalConfig,
    ) -> Self {
        Self {
            catalog,
            retriever,
            rewriter,
            rescaler: ScoreRescaler::from_config(config),
            search_depth: config.search_depth,
            first_stage_depth: config.first_stage_depth,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn backend(&self) -> Backend {
        self.retriever.backend()
    }

    /// Resolved location of the first-stage index.
    pub fn search_index_path(&self) -> &Path {
        self.retriever.index_path()
    }

    /// Names of the best models for `prompt`, best first.
    pub fn select(&self, prompt: &PromptSpec) -> ScoutResult<Vec<String>> {
        Ok(self
            .rank(prompt)?
            .into_iter()
            .map(|scored| scored.record.name)
            .collect())
    }

    /// Like [`select`](Self::select), with the scores behind the ordering.
    pub fn rank(&self, prompt: &PromptSpec) -> ScoutResult<Vec<ScoredModel>> {
        let _span = scout_core::selection_span!(self.backend(), self.search_depth).entered();

        if self.catalog.is_empty() {
            return Err(RetrievalError::NoResults.into());
        }
        self.retriever.ensure_index(&self.catalog)?;

        let query = match self.rewriter {
            Some(ref rewriter) => rewriter.rewrite(prompt)?,
            None => prompt.instruction.clone(),
        };

        let candidates =
            self.retriever
                .retrieve_candidates(&query, &self.catalog, self.first_stage_depth)?;
        debug!(candidates = candidates.len(), "first stage complete");

        let mut scored = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            let record = self.catalog.get(&candidate.name).ok_or_else(|| {
                RetrievalError::CatalogDesync {
                    name: candidate.name.clone(),
                }
            })?;
            scored.push(self.rescaler.score(record, candidate.raw_score));
        }

        // Oversized models score -inf. Non-finite scores are never selected.
        scored.retain(|s| s.score.is_finite());
        // Stable: equal scores keep first-stage order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.search_depth);

        if scored.is_empty() {
            return Err(RetrievalError::NoResults.into());
        }

        info!(
            candidates = candidates.len(),
            selected = scored.len(),
            top = %scored[0].record.name,
            "models selected"
        );
        Ok(scored)
    }
}

impl IModelRetriever for ModelSelector {
    fn retrieve(&self, prompt: &PromptSpec) -> ScoutResult<Vec<String>> {
        self.select(prompt)
    }
}
