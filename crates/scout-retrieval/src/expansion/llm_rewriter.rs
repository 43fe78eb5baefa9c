//! LLM-backed hypothetical model description via an OpenAI-compatible
//! chat completions endpoint. One blocking request per prompt, no retry.

use std::time::Duration;

use scout_core::config::QueryRewriteConfig;
use scout_core::errors::{RetrievalError, ScoutResult};
use scout_core::models::PromptSpec;
use scout_core::traits::IQueryRewriter;
use serde::{Deserialize, Serialize};
use tracing::debug;

const SYSTEM_PROMPT: &str = "You write model cards. Given a task description and \
optional examples, write a short description of a pretrained model that would be \
ideal for finetuning on this task. Describe the model, not the task. Reply with the \
description only.";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Rewriter that asks a chat model for the hypothetical description.
pub struct LlmRewriter {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key_env: String,
}

impl LlmRewriter {
    pub fn from_config(config: &QueryRewriteConfig) -> ScoutResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RetrievalError::RewriteFailed {
                reason: format!("http client: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key_env: config.api_key_env.clone(),
        })
    }

    fn user_message(prompt: &PromptSpec) -> String {
        let mut msg = format!("Task: {}", prompt.instruction.trim());
        if !prompt.examples.trim().is_empty() {
            msg.push_str("\nExamples:\n");
            msg.push_str(prompt.examples.trim());
        }
        msg
    }
}

impl IQueryRewriter for LlmRewriter {
    fn rewrite(&self, prompt: &PromptSpec) -> ScoutResult<String> {
        let fail = |reason: String| RetrievalError::RewriteFailed { reason };

        let api_key = std::env::var(&self.api_key_env)
            .map_err(|_| fail(format!("environment variable {} is not set", self.api_key_env)))?;
        let user = Self::user_message(prompt);
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user,
                },
            ],
            temperature: 0.0,
        };

        let response: ChatResponse = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| fail(e.to_string()))?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| fail("completion contained no text".to_string()))?;

        debug!(model = %self.model, chars = text.len(), "query rewritten by llm");
        Ok(text)
    }

    fn name(&self) -> &str {
        "llm"
    }
}
