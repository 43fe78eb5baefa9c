//! In-memory query embedding cache using moka.
//!
//! Keys are blake3 hashes of the query text, so repeated prompts skip the
//! encoder entirely. Description encodings are never cached here; they are
//! persisted in the embedding matrix instead.

use std::time::Duration;

use moka::sync::Cache;

/// Bounded query embedding cache.
pub struct QueryCache {
    cache: Cache<String, Vec<f32>>,
}

impl QueryCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    /// Cache key for a query text.
    pub fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Vec<f32>) {
        self.cache.insert(key, embedding);
    }
}
