use serde::{Deserialize, Serialize};

/// A parsed task prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSpec {
    /// Natural-language task instruction; the default query text.
    pub instruction: String,
    /// Demonstration examples, used only by query rewriting.
    #[serde(default)]
    pub examples: String,
}

impl PromptSpec {
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            examples: String::new(),
        }
    }

    pub fn with_examples(mut self, examples: impl Into<String>) -> Self {
        self.examples = examples.into();
        self
    }
}
