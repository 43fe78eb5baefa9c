//! Query rewriting: replace the prompt with a hypothetical model description
//! (HyDE) so the query reads like the documents it is matched against.

pub mod hyde;
pub mod llm_rewriter;

pub use hyde::TemplateRewriter;
pub use llm_rewriter::LlmRewriter;

use scout_core::config::QueryRewriteConfig;
use scout_core::errors::{ConfigError, ScoutResult};
use scout_core::traits::IQueryRewriter;

/// Build the rewriter named by `config.provider`.
pub fn create_rewriter(config: &QueryRewriteConfig) -> ScoutResult<Box<dyn IQueryRewriter>> {
    match config.provider.as_str() {
        "template" => Ok(Box::new(TemplateRewriter)),
        "llm" => Ok(Box::new(LlmRewriter::from_config(config)?)),
        other => Err(ConfigError::ValidationFailed {
            field: "query_rewrite.provider".to_string(),
            message: format!("unknown rewriter '{other}'. Use: template, llm"),
        }
        .into()),
    }
}
