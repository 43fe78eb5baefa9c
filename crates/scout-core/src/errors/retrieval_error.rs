use super::error_code::{self, ScoutErrorCode};

/// Retrieval and ranking errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("no models retrieved from search index")]
    NoResults,

    #[error("retrieved model {name} is not in the loaded catalog; index and catalog are out of sync")]
    CatalogDesync { name: String },

    #[error("search index {path} could not be loaded: {reason}")]
    IndexLoadFailed { path: String, reason: String },

    #[error("search index {path} could not be written: {reason}")]
    IndexWriteFailed { path: String, reason: String },

    #[error("search index {path} could not be queried: {reason}")]
    IndexQueryFailed { path: String, reason: String },

    #[error("query rewrite failed: {reason}")]
    RewriteFailed { reason: String },
}

impl ScoutErrorCode for RetrievalError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoResults => error_code::NO_RESULTS,
            Self::CatalogDesync { .. } => error_code::CATALOG_DESYNC,
            Self::IndexLoadFailed { .. }
            | Self::IndexWriteFailed { .. }
            | Self::IndexQueryFailed { .. } => error_code::INDEX_ERROR,
            Self::RewriteFailed { .. } => error_code::REWRITE_FAILED,
        }
    }
}
