//! Configuration system for Scout.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod catalog_config;
pub mod defaults;
pub mod embedding_config;
pub mod observability_config;
pub mod retrieval_config;
pub mod rewrite_config;
pub mod scout_config;

pub use catalog_config::CatalogConfig;
pub use embedding_config::{Device, EmbeddingConfig};
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::{Backend, RetrievalConfig};
pub use rewrite_config::QueryRewriteConfig;
pub use scout_config::ScoutConfig;
