use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Device used for encoder inference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Cpu,
    Cuda,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Cuda => write!(f, "cuda"),
        }
    }
}

impl FromStr for Device {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpu" => Ok(Device::Cpu),
            "cuda" | "gpu" => Ok(Device::Cuda),
            _ => Err(format!("unknown device: '{s}'. Use: cpu, cuda")),
        }
    }
}

/// Text encoder configuration for the dense backend.
///
/// The persisted embedding matrix and query encodings must come from the
/// same encoder; nothing checks this at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Encoder identity, recorded in logs and used as the ONNX model name.
    pub encoder_model_name: String,
    /// Encoder provider: "hashing" or "onnx".
    pub provider: String,
    /// Path to the ONNX model file.
    pub model_path: Option<String>,
    /// Embedding dimensions.
    pub dimensions: usize,
    /// Inference device.
    pub device: Device,
    /// Descriptions encoded per batch when building the matrix.
    pub batch_size: usize,
    /// Max cached query embeddings.
    pub query_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            encoder_model_name: defaults::DEFAULT_ENCODER_MODEL.to_string(),
            provider: defaults::DEFAULT_ENCODER_PROVIDER.to_string(),
            model_path: None,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            device: Device::default(),
            batch_size: defaults::DEFAULT_ENCODE_BATCH_SIZE,
            query_cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
        }
    }
}
