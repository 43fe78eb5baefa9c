//! Offline hypothetical model description.
//!
//! No LLM in-process: the description is assembled from the prompt in the
//! shape of a model card, so task words land in the same context they would
//! in a real description.

use scout_core::errors::ScoutResult;
use scout_core::models::PromptSpec;
use scout_core::traits::IQueryRewriter;

/// Template-based rewriter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRewriter;

impl TemplateRewriter {
    pub fn describe(prompt: &PromptSpec) -> String {
        let instruction = prompt.instruction.trim().trim_end_matches('.');
        let mut doc = format!(
            "This model is finetuned for the following task: {instruction}. \
             It is a strong choice for applications that need to {instruction_lower}.",
            instruction_lower = instruction.to_lowercase(),
        );
        let examples = prompt.examples.trim();
        if !examples.is_empty() {
            doc.push_str(" Example inputs and outputs it handles well: ");
            doc.push_str(examples);
        }
        doc
    }
}

impl IQueryRewriter for TemplateRewriter {
    fn rewrite(&self, prompt: &PromptSpec) -> ScoutResult<String> {
        Ok(Self::describe(prompt))
    }

    fn name(&self) -> &str {
        "template"
    }
}
