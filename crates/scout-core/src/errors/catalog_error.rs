//! Catalog loading errors.

use super::error_code::{self, ScoutErrorCode};

/// Errors raised while fetching, unpacking, or reading the model catalog.
///
/// Every variant is fatal for the load. Per-record skips are not errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog fetch from {url} failed: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("catalog archive {path} could not be unpacked: {reason}")]
    UnpackFailed { path: String, reason: String },

    #[error("catalog entry {path} could not be read: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("malformed catalog record {path}: {reason}")]
    MalformedRecord { path: String, reason: String },

    #[error("duplicate model name in catalog: {name}")]
    DuplicateModel { name: String },
}

impl ScoutErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FetchFailed { .. } | Self::UnpackFailed { .. } => {
                error_code::CATALOG_FETCH_FAILED
            }
            Self::ReadFailed { .. } => error_code::CATALOG_READ_FAILED,
            Self::MalformedRecord { .. } | Self::DuplicateModel { .. } => {
                error_code::CATALOG_MALFORMED
            }
        }
    }
}
