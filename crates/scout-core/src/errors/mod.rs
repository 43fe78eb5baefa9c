//! Error handling for Scout.
//! One error enum per subsystem, `thiserror` only, aggregated into `ScoutError`.

pub mod catalog_error;
pub mod config_error;
pub mod embedding_error;
pub mod error_code;
pub mod retrieval_error;
pub mod scout_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use error_code::ScoutErrorCode;
pub use retrieval_error::RetrievalError;
pub use scout_error::{ScoutError, ScoutResult};
