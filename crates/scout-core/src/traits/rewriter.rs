use crate::errors::ScoutResult;
use crate::models::PromptSpec;

/// Query rewriting: replaces the instruction with a hypothetical model description.
pub trait IQueryRewriter: Send + Sync {
    /// Produce the query text for a prompt.
    fn rewrite(&self, prompt: &PromptSpec) -> ScoutResult<String>;

    /// Human-readable rewriter name.
    fn name(&self) -> &str;
}
