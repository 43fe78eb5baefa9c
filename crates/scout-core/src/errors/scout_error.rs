use super::error_code::{self, ScoutErrorCode};
use super::{CatalogError, ConfigError, EmbeddingError, RetrievalError};

/// Top-level error for every Scout operation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ScoutResult<T> = Result<T, ScoutError>;

impl ScoutErrorCode for ScoutError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Embedding(e) => e.error_code(),
            Self::Retrieval(e) => e.error_code(),
            Self::Io(_) => error_code::IO_ERROR,
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

impl ScoutError {
    /// True when the error is the caller-visible "nothing matched" condition.
    pub fn is_no_results(&self) -> bool {
        matches!(self, Self::Retrieval(RetrievalError::NoResults))
    }
}
