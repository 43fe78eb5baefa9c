//! Top-level Scout configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    Backend, CatalogConfig, EmbeddingConfig, ObservabilityConfig, QueryRewriteConfig,
    RetrievalConfig,
};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SCOUT_*`)
/// 2. Project config (`scout.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoutConfig {
    pub catalog: CatalogConfig,
    pub retrieval: RetrievalConfig,
    pub embedding: EmbeddingConfig,
    pub query_rewrite: QueryRewriteConfig,
    pub observability: ObservabilityConfig,
}

impl ScoutConfig {
    /// Load configuration for a project rooted at `root`, then validate it.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(constants::CONFIG_FILE_NAME);
        let mut config = if project_config_path.exists() {
            Self::from_toml_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (no env overrides, no validation).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// The sparse backend owns its index location, so an explicit
    /// `search_index_path` alongside it is rejected. A dense index path must
    /// be a file or not exist yet.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let retrieval = &self.retrieval;
        match (retrieval.backend, retrieval.search_index_path.as_deref()) {
            (Backend::Sparse, Some(_)) => {
                return Err(ConfigError::ConflictingIndexPath {
                    backend: Backend::Sparse.to_string(),
                });
            }
            (Backend::Dense, Some(path)) if Path::new(path).is_dir() => {
                return Err(ConfigError::IndexPathIsDirectory {
                    path: path.to_string(),
                });
            }
            _ => {}
        }

        if retrieval.search_depth == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.search_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if retrieval.first_stage_depth == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.first_stage_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if retrieval.index_name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.index_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.embedding.dimensions == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.dimensions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if retrieval.first_stage_depth < retrieval.search_depth {
            warn!(
                first_stage_depth = retrieval.first_stage_depth,
                search_depth = retrieval.search_depth,
                "first_stage_depth is smaller than search_depth; rescoring cannot fill the result list"
            );
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `SCOUT_SEARCH_DEPTH`, `SCOUT_BACKEND`, etc.
    fn apply_env_overrides(config: &mut ScoutConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("SCOUT_CATALOG_DIR") {
            config.catalog.dir = val;
        }
        if let Ok(val) = std::env::var("SCOUT_INDEX_ROOT") {
            config.retrieval.index_root = Some(val);
        }
        if let Ok(val) = std::env::var("SCOUT_SEARCH_DEPTH") {
            config.retrieval.search_depth = parse_env("SCOUT_SEARCH_DEPTH", &val)?;
        }
        if let Ok(val) = std::env::var("SCOUT_FIRST_STAGE_DEPTH") {
            config.retrieval.first_stage_depth = parse_env("SCOUT_FIRST_STAGE_DEPTH", &val)?;
        }
        if let Ok(val) = std::env::var("SCOUT_SIZE_LIMIT_BYTES") {
            config.retrieval.size_limit_bytes = parse_env("SCOUT_SIZE_LIMIT_BYTES", &val)?;
        }
        if let Ok(val) = std::env::var("SCOUT_BACKEND") {
            config.retrieval.backend = val.parse().map_err(|message| {
                ConfigError::ValidationFailed {
                    field: "SCOUT_BACKEND".to_string(),
                    message,
                }
            })?;
        }
        if let Ok(val) = std::env::var("SCOUT_ENCODER") {
            config.embedding.encoder_model_name = val;
        }
        if let Ok(val) = std::env::var("SCOUT_QUERY_REWRITE") {
            config.query_rewrite.enabled = parse_env("SCOUT_QUERY_REWRITE", &val)?;
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_env<T: std::str::FromStr>(var: &str, val: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    val.parse::<T>().map_err(|e| ConfigError::ValidationFailed {
        field: var.to_string(),
        message: format!("invalid value '{val}': {e}"),
    })
}
