use serde::{Deserialize, Serialize};

use super::defaults;

/// Hypothetical-document query rewriting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryRewriteConfig {
    /// Replace the instruction with a hypothetical model description.
    pub enabled: bool,
    /// Rewriter: "template" (offline) or "llm".
    pub provider: String,
    /// OpenAI-compatible chat completions endpoint for the "llm" provider.
    pub endpoint: String,
    /// Chat model name for the "llm" provider.
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Request timeout for the "llm" provider.
    pub timeout_secs: u64,
}

impl Default for QueryRewriteConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_QUERY_REWRITE,
            provider: defaults::DEFAULT_REWRITE_PROVIDER.to_string(),
            endpoint: defaults::DEFAULT_REWRITE_ENDPOINT.to_string(),
            model: defaults::DEFAULT_REWRITE_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_REWRITE_API_KEY_ENV.to_string(),
            timeout_secs: defaults::DEFAULT_REWRITE_TIMEOUT_SECS,
        }
    }
}
