//! Configuration errors.

use super::error_code::{self, ScoutErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("search_index_path must not be set with the {backend} backend; it manages its own index location")]
    ConflictingIndexPath { backend: String },

    #[error("search index must either be a file or not exist yet, but {path} is a directory")]
    IndexPathIsDirectory { path: String },
}

impl ScoutErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
