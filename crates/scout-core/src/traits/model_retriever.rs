use crate::errors::ScoutResult;
use crate::models::PromptSpec;

/// Select relevant models for a prompt.
pub trait IModelRetriever: Send + Sync {
    /// Names of the most relevant models, most relevant first.
    fn retrieve(&self, prompt: &PromptSpec) -> ScoutResult<Vec<String>>;
}
