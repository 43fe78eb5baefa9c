//! EncoderEngine: the dense backend's single entry point for encoding.
//!
//! Owns the encoder and the query cache. Descriptions are encoded in
//! batches straight into an [`EmbeddingMatrix`]; queries go through the
//! cache.

use scout_core::config::EmbeddingConfig;
use scout_core::errors::{EmbeddingError, ScoutResult};
use scout_core::models::Catalog;
use scout_core::traits::ITextEncoder;
use tracing::{debug, info};

use crate::cache::QueryCache;
use crate::matrix::EmbeddingMatrix;
use crate::providers;

pub struct EncoderEngine {
    encoder: Box<dyn ITextEncoder>,
    cache: QueryCache,
    batch_size: usize,
}

impl EncoderEngine {
    /// Create an engine with the encoder selected by `config`.
    pub fn new(config: &EmbeddingConfig) -> Self {
        let encoder = providers::create_encoder(config);
        Self::with_encoder(encoder, config)
    }

    /// Create an engine around an already-built encoder.
    pub fn with_encoder(encoder: Box<dyn ITextEncoder>, config: &EmbeddingConfig) -> Self {
        info!(
            encoder = encoder.name(),
            dims = encoder.dimensions(),
            "encoder engine initialized"
        );
        Self {
            encoder,
            cache: QueryCache::new(config.query_cache_size),
            batch_size: config.batch_size.max(1),
        }
    }

    pub fn encoder_name(&self) -> &str {
        self.encoder.name()
    }

    pub fn dimensions(&self) -> usize {
        self.encoder.dimensions()
    }

    /// Encode a query, serving repeats from the cache.
    pub fn encode_query(&self, text: &str) -> ScoutResult<Vec<f32>> {
        let key = QueryCache::key(text);
        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %key, "query embedding cache hit");
            return Ok(hit);
        }
        let embedding = self.encoder.embed(text)?;
        self.check_dims(&embedding)?;
        self.cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    /// Encode every catalog description, in catalog order.
    pub fn encode_descriptions(&self, catalog: &Catalog) -> ScoutResult<EmbeddingMatrix> {
        let descriptions: Vec<String> = catalog.descriptions().map(str::to_string).collect();
        let mut rows = Vec::with_capacity(descriptions.len());
        for chunk in descriptions.chunks(self.batch_size) {
            let batch = self.encoder.embed_batch(chunk)?;
            if batch.len() != chunk.len() {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!(
                        "encoder returned {} embeddings for {} texts",
                        batch.len(),
                        chunk.len()
                    ),
                }
                .into());
            }
            rows.extend(batch);
        }
        info!(
            rows = rows.len(),
            dims = self.dimensions(),
            encoder = self.encoder_name(),
            "catalog descriptions encoded"
        );
        EmbeddingMatrix::from_rows(rows, self.dimensions())
    }

    fn check_dims(&self, embedding: &[f32]) -> ScoutResult<()> {
        if embedding.len() != self.dimensions() {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions(),
                actual: embedding.len(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::models::ModelRecord;

    fn engine(dims: usize) -> EncoderEngine {
        EncoderEngine::new(&EmbeddingConfig {
            provider: "hashing".to_string(),
            dimensions: dims,
            batch_size: 2,
            ..Default::default()
        })
    }

    #[test]
    fn query_has_configured_dims() {
        assert_eq!(engine(64).encode_query("summarize").unwrap().len(), 64);
    }

    #[test]
    fn repeated_query_is_cached() {
        let e = engine(32);
        let a = e.encode_query("translate french").unwrap();
        let b = e.encode_query("translate french").unwrap();
        assert_eq!(a, b);
        assert!(e.cache.get(&QueryCache::key("translate french")).is_some());
    }

    #[test]
    fn descriptions_encoded_in_catalog_order_across_batches() {
        let catalog = Catalog::new(vec![
            ModelRecord::new("a", "news summarization", 1, 0),
            ModelRecord::new("b", "image classification", 1, 0),
            ModelRecord::new("c", "speech recognition", 1, 0),
        ])
        .unwrap();
        let e = engine(48);
        let matrix = e.encode_descriptions(&catalog).unwrap();
        assert_eq!(matrix.len(), 3);
        let expected = e.encoder.embed("image classification").unwrap();
        assert_eq!(matrix.row(1).unwrap(), expected.as_slice());
    }
}
