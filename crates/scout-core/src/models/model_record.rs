use serde::{Deserialize, Serialize};

/// One retrievable model from the catalog.
///
/// Records are immutable once loaded. Per-query scores live on
/// [`ScoredModel`](super::ScoredModel), never on the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Unique catalog identifier, e.g. `"t5-small"` or `"org/model"`.
    pub name: String,
    /// Free-text description used as the retrieval document.
    pub description: String,
    /// Model artifact size on disk, in bytes.
    pub size_bytes: u64,
    /// Download count, the popularity signal.
    #[serde(default)]
    pub num_downloads: u64,
}

impl ModelRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        size_bytes: u64,
        num_downloads: u64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            size_bytes,
            num_downloads,
        }
    }
}
