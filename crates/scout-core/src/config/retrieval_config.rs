use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// First-stage retrieval backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// BM25 lexical index.
    #[default]
    #[serde(alias = "bm25")]
    Sparse,
    /// Dual-encoder embedding matrix.
    #[serde(alias = "dual-encoder")]
    Dense,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Sparse => write!(f, "sparse"),
            Backend::Dense => write!(f, "dense"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sparse" | "bm25" => Ok(Backend::Sparse),
            "dense" | "dual-encoder" => Ok(Backend::Dense),
            _ => Err(format!("unknown backend: '{s}'. Use: sparse, dense")),
        }
    }
}

/// Retrieval and ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// First-stage backend.
    pub backend: Backend,
    /// Explicit dense index file. Must be unset for the sparse backend.
    pub search_index_path: Option<String>,
    /// Number of models returned after rescoring.
    pub search_depth: usize,
    /// Number of candidates retrieved purely by similarity before rescoring.
    pub first_stage_depth: usize,
    /// Models larger than this are never selected.
    pub size_limit_bytes: u64,
    /// Name of the persisted index (sparse collection directory, default dense file stem).
    #[serde(alias = "bm25_index_name")]
    pub index_name: String,
    /// Root directory for persisted indexes. Falls back to `$SCOUT_HOME`, then `~/.scout`.
    pub index_root: Option<String>,
}

impl RetrievalConfig {
    /// Resolved root directory for persisted indexes.
    pub fn resolved_index_root(&self) -> PathBuf {
        if let Some(ref root) = self.index_root {
            return PathBuf::from(root);
        }
        if let Some(home) = std::env::var_os(constants::HOME_ENV_VAR) {
            return PathBuf::from(home);
        }
        home_dir()
            .map(|h| h.join(defaults::DEFAULT_INDEX_ROOT_DIR))
            .unwrap_or_else(|| PathBuf::from(defaults::DEFAULT_INDEX_ROOT_DIR))
    }

    /// Directory of the sparse index collection named `index_name`.
    pub fn sparse_index_dir(&self) -> PathBuf {
        self.resolved_index_root()
            .join(constants::COLLECTIONS_DIR)
            .join(&self.index_name)
    }

    /// Dense embedding matrix path: the explicit path, or `<root>/embeddings/<index_name>.bin`.
    pub fn dense_index_path(&self) -> PathBuf {
        match self.search_index_path {
            Some(ref p) => PathBuf::from(p),
            None => self
                .resolved_index_root()
                .join("embeddings")
                .join(format!("{}.bin", self.index_name)),
        }
    }

    /// Index location for the configured backend.
    pub fn index_path(&self) -> PathBuf {
        match self.backend {
            Backend::Sparse => self.sparse_index_dir(),
            Backend::Dense => self.dense_index_path(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            search_index_path: None,
            search_depth: defaults::DEFAULT_SEARCH_DEPTH,
            first_stage_depth: defaults::DEFAULT_FIRST_STAGE_DEPTH,
            size_limit_bytes: defaults::DEFAULT_SIZE_LIMIT_BYTES,
            index_name: defaults::DEFAULT_INDEX_NAME.to_string(),
            index_root: None,
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
