//! Popularity and size rescoring of first-stage candidates.

use scout_core::config::RetrievalConfig;
use scout_core::models::{ModelRecord, ScoredModel};

/// Rescales raw similarity by log popularity and excludes oversized models.
#[derive(Debug, Clone, Copy)]
pub struct ScoreRescaler {
    size_limit_bytes: u64,
}

impl ScoreRescaler {
    pub fn new(size_limit_bytes: u64) -> Self {
        Self { size_limit_bytes }
    }

    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self::new(config.size_limit_bytes)
    }

    pub fn size_limit_bytes(&self) -> u64 {
        self.size_limit_bytes
    }

    /// `log10(downloads + 2)`; at least `log10(2)`, so always positive.
    pub fn log_popularity(num_downloads: u64) -> f64 {
        (num_downloads as f64 + 2.0).log10()
    }

    /// Adjusted score for one candidate. Negative infinity marks a model
    /// over the size limit (strictly greater; equal is kept).
    pub fn rescale(&self, record: &ModelRecord, raw_score: f64) -> f64 {
        if record.size_bytes > self.size_limit_bytes {
            return f64::NEG_INFINITY;
        }
        raw_score * Self::log_popularity(record.num_downloads)
    }

    /// Pair a record with its adjusted score for this query.
    pub fn score(&self, record: &ModelRecord, raw_score: f64) -> ScoredModel {
        ScoredModel {
            record: record.clone(),
            score: self.rescale(record, raw_score),
            raw_score,
        }
    }
}
